//! Handler for code block macros.

use crate::config::DEFAULT_CODE_LANGUAGE;
use crate::error::Result;
use crate::macros::handler::{build_macro_element, MacroHandler, MacroNode, RecurseFn};
use crate::macros::types::{CodeMacro, MacroInfo};
use crate::model::{Content, Element, ElementKind};

/// Macro names rendered as code blocks.
const CODE_MACRO_NAMES: &[&str] = &["code", "code-block", "noformat"];

/// Handler for `code` (and `code-block`, `noformat`) macros.
///
/// Produces a `code` element with `language` and `isBlock=true`, holding
/// the plain-text body verbatim.
pub struct CodeHandler;

impl MacroHandler for CodeHandler {
    fn name(&self) -> &str {
        "code"
    }

    fn matches(&self, macro_name: &str) -> bool {
        CODE_MACRO_NAMES
            .iter()
            .any(|name| macro_name.eq_ignore_ascii_case(name))
    }

    fn handle<'a, 'input>(
        &self,
        node: &MacroNode<'a, 'input>,
        _recurse: &RecurseFn<'a, 'input>,
    ) -> Result<Element> {
        let language = node
            .param("language")
            .map(str::to_lowercase)
            .unwrap_or_else(|| DEFAULT_CODE_LANGUAGE.to_string());

        let info = MacroInfo::Code(CodeMacro {
            language,
            title: node.param_string("title"),
            line_numbers: node.flag("linenumbers"),
            collapse: node.flag("collapse"),
        });

        let body = node.plain_body.clone().unwrap_or_default();
        Ok(build_macro_element(
            ElementKind::Code,
            Content::Text(body),
            node,
            info,
        ))
    }
}
