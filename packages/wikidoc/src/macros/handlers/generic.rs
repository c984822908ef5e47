//! Fallback handler for macros without a dedicated handler.

use crate::error::Result;
use crate::macros::handler::{body_content, build_macro_element, MacroHandler, MacroNode, RecurseFn};
use crate::macros::types::{GenericMacro, MacroInfo};
use crate::model::{Element, ElementKind};

/// Keeps any macro as a `macro` element with its name, parameters and body.
pub struct GenericMacroHandler;

impl MacroHandler for GenericMacroHandler {
    fn name(&self) -> &str {
        "*"
    }

    fn matches(&self, _macro_name: &str) -> bool {
        true
    }

    fn handle<'a, 'input>(
        &self,
        node: &MacroNode<'a, 'input>,
        recurse: &RecurseFn<'a, 'input>,
    ) -> Result<Element> {
        let info = MacroInfo::Generic(GenericMacro {
            name: node.name.clone(),
            params: node.params.clone(),
        });
        let content = body_content(node, recurse)?;
        Ok(build_macro_element(ElementKind::Macro, content, node, info))
    }
}
