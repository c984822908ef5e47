//! Handlers for container macros: expand and panel.

use crate::config::DEFAULT_EXPAND_TITLE;
use crate::error::Result;
use crate::macros::handler::{body_content, build_macro_element, MacroHandler, MacroNode, RecurseFn};
use crate::macros::types::{ExpandMacro, MacroInfo, PanelMacro};
use crate::model::{Element, ElementKind};

/// Handler for `expand` macros.
pub struct ExpandHandler;

impl MacroHandler for ExpandHandler {
    fn name(&self) -> &str {
        "expand"
    }

    fn handle<'a, 'input>(
        &self,
        node: &MacroNode<'a, 'input>,
        recurse: &RecurseFn<'a, 'input>,
    ) -> Result<Element> {
        // The title may also come as the default parameter.
        let title = node
            .param("title")
            .or_else(|| node.param(""))
            .unwrap_or(DEFAULT_EXPAND_TITLE)
            .to_string();

        let content = body_content(node, recurse)?;
        Ok(build_macro_element(
            ElementKind::Macro,
            content,
            node,
            MacroInfo::Expand(ExpandMacro { title }),
        ))
    }
}

/// Handler for `panel` macros.
pub struct PanelHandler;

impl MacroHandler for PanelHandler {
    fn name(&self) -> &str {
        "panel"
    }

    fn handle<'a, 'input>(
        &self,
        node: &MacroNode<'a, 'input>,
        recurse: &RecurseFn<'a, 'input>,
    ) -> Result<Element> {
        let info = MacroInfo::Panel(PanelMacro {
            title: node.param_string("title"),
            bg_color: node.param_string("bgColor"),
            border_color: node.param_string("borderColor"),
            border_style: node.param_string("borderStyle"),
        });

        let content = body_content(node, recurse)?;
        Ok(build_macro_element(ElementKind::Macro, content, node, info))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::macros::handlers::test_support::handle_markup;

    #[test]
    fn test_expand_default_title() {
        let element = handle_markup(
            &ExpandHandler,
            r#"<ac:structured-macro ac:name="expand"><ac:rich-text-body><p>a</p><p>b</p></ac:rich-text-body></ac:structured-macro>"#,
        )
        .unwrap();

        assert_eq!(element.attribute("title"), Some("Click here to expand..."));
        assert_eq!(element.children().len(), 2);
    }

    #[test]
    fn test_expand_default_parameter_title() {
        let element = handle_markup(
            &ExpandHandler,
            r#"<ac:structured-macro ac:name="expand"><ac:default-parameter>Details</ac:default-parameter></ac:structured-macro>"#,
        )
        .unwrap();

        assert_eq!(element.attribute("title"), Some("Details"));
    }

    #[test]
    fn test_panel() {
        let element = handle_markup(
            &PanelHandler,
            r##"<ac:structured-macro ac:name="panel"><ac:parameter ac:name="title">Box</ac:parameter><ac:parameter ac:name="bgColor">#fff</ac:parameter><ac:rich-text-body><p>x</p></ac:rich-text-body></ac:structured-macro>"##,
        )
        .unwrap();

        assert_eq!(element.attribute("title"), Some("Box"));
        assert_eq!(element.attribute("bgColor"), Some("#fff"));
        assert!(element.is_container());
    }
}
