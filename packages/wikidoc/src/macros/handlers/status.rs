//! Handler for status lozenges.

use crate::config::DEFAULT_STATUS_COLOUR;
use crate::error::Result;
use crate::macros::handler::{build_macro_element, MacroHandler, MacroNode, RecurseFn};
use crate::macros::types::{MacroInfo, StatusMacro};
use crate::model::{Content, Element, ElementKind};

/// Handler for `status` macros. The element's text is the lozenge title.
pub struct StatusHandler;

impl MacroHandler for StatusHandler {
    fn name(&self) -> &str {
        "status"
    }

    fn handle<'a, 'input>(
        &self,
        node: &MacroNode<'a, 'input>,
        _recurse: &RecurseFn<'a, 'input>,
    ) -> Result<Element> {
        let title = node.param_string("title").unwrap_or_default();
        let colour = node
            .param("colour")
            .or_else(|| node.param("color"))
            .unwrap_or(DEFAULT_STATUS_COLOUR)
            .to_string();

        let info = MacroInfo::Status(StatusMacro {
            title: title.clone(),
            colour,
            subtle: node.flag("subtle"),
        });

        Ok(build_macro_element(
            ElementKind::Macro,
            Content::Text(title),
            node,
            info,
        ))
    }
}
