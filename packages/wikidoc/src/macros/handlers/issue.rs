//! Handler for issue tracker references.

use crate::error::Result;
use crate::macros::handler::{build_macro_element, MacroHandler, MacroNode, RecurseFn};
use crate::macros::types::{IssueMacro, MacroInfo};
use crate::model::{Content, Element, ElementKind};

/// Handler for `jira` macros. The element's text is the issue key.
pub struct IssueReferenceHandler;

impl MacroHandler for IssueReferenceHandler {
    fn name(&self) -> &str {
        "jira"
    }

    fn handle<'a, 'input>(
        &self,
        node: &MacroNode<'a, 'input>,
        _recurse: &RecurseFn<'a, 'input>,
    ) -> Result<Element> {
        let info = IssueMacro {
            key: node.param_string("key"),
            server: node.param_string("server"),
            server_id: node.param_string("serverId"),
            jql: node.param_string("jqlQuery"),
        };
        let text = info.key.clone().unwrap_or_default();

        Ok(build_macro_element(
            ElementKind::Macro,
            Content::Text(text),
            node,
            MacroInfo::IssueReference(info),
        ))
    }
}
