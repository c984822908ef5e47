//! Handler for info, note, warning and tip boxes.

use crate::error::Result;
use crate::macros::handler::{body_content, build_macro_element, MacroHandler, MacroNode, RecurseFn};
use crate::macros::types::{CalloutMacro, CalloutTone, MacroInfo};
use crate::model::{Element, ElementKind};

/// Handler for one callout tone.
///
/// Register one instance per tone; each matches only its own macro name.
pub struct CalloutHandler {
    tone: CalloutTone,
}

impl CalloutHandler {
    #[must_use]
    pub fn new(tone: CalloutTone) -> Self {
        Self { tone }
    }
}

impl MacroHandler for CalloutHandler {
    fn name(&self) -> &str {
        self.tone.as_str()
    }

    fn handle<'a, 'input>(
        &self,
        node: &MacroNode<'a, 'input>,
        recurse: &RecurseFn<'a, 'input>,
    ) -> Result<Element> {
        let info = MacroInfo::Callout(CalloutMacro {
            tone: self.tone,
            title: node.param_string("title"),
            show_icon: node.param("icon") != Some("false"),
        });

        let content = body_content(node, recurse)?;
        Ok(build_macro_element(ElementKind::Macro, content, node, info))
    }
}
