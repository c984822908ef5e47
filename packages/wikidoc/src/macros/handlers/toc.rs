//! Handler for the table-of-contents macro.

use tracing::warn;

use crate::error::Result;
use crate::macros::handler::{build_macro_element, MacroHandler, MacroNode, RecurseFn};
use crate::macros::types::{MacroInfo, TocMacro};
use crate::model::{Content, Element, ElementKind};

/// Handler for `toc` macros.
///
/// The macro has no body; the element records the requested level range.
pub struct TocHandler;

impl MacroHandler for TocHandler {
    fn name(&self) -> &str {
        "toc"
    }

    fn handle<'a, 'input>(
        &self,
        node: &MacroNode<'a, 'input>,
        _recurse: &RecurseFn<'a, 'input>,
    ) -> Result<Element> {
        let defaults = TocMacro::default();
        let info = MacroInfo::TableOfContents(TocMacro {
            min_level: level_param(node, "minLevel", defaults.min_level),
            max_level: level_param(node, "maxLevel", defaults.max_level),
        });

        Ok(build_macro_element(
            ElementKind::Macro,
            Content::Text(String::new()),
            node,
            info,
        ))
    }
}

fn level_param(node: &MacroNode<'_, '_>, key: &str, default: u8) -> u8 {
    let Some(raw) = node.param(key) else {
        return default;
    };
    raw.parse().unwrap_or_else(|_| {
        warn!(param = key, value = raw, "Invalid toc level, using default");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::macros::handlers::test_support::handle_markup;

    #[test]
    fn test_toc_levels() {
        let element = handle_markup(
            &TocHandler,
            r#"<ac:structured-macro ac:name="toc"><ac:parameter ac:name="maxLevel">3</ac:parameter></ac:structured-macro>"#,
        )
        .unwrap();

        assert_eq!(element.attribute("minLevel"), Some("1"));
        assert_eq!(element.attribute("maxLevel"), Some("3"));
        assert_eq!(
            element.macro_info(),
            Some(&MacroInfo::TableOfContents(TocMacro {
                min_level: 1,
                max_level: 3
            }))
        );
    }

    #[test]
    fn test_toc_invalid_level_uses_default() {
        let element = handle_markup(
            &TocHandler,
            r#"<ac:structured-macro ac:name="toc"><ac:parameter ac:name="minLevel">two</ac:parameter></ac:structured-macro>"#,
        )
        .unwrap();

        // Derived attributes win over the raw parameter.
        assert_eq!(element.attribute("minLevel"), Some("1"));
    }
}
