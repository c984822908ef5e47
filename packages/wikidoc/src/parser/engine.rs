//! Parse engine: walks the node tree and dispatches on tag class.

use roxmltree::Node;
use tracing::{debug, warn};

use super::context::ParseContext;
use super::tags::{classify, TagClass};
use super::{blocks, inline, lists, tables};
use crate::config::ParseOptions;
use crate::error::{ParseError, Result};
use crate::macros::{MacroNode, MacroRegistry};
use crate::model::{Element, ElementKind};
use crate::xml::{normalize_whitespace, qualified_name};

/// Engine that turns markup nodes into elements.
///
/// Element-level faults are isolated: the failing node becomes an
/// `error` element and its siblings still parse. Fatal errors (depth
/// exceeded) abort the walk.
pub struct ParseEngine<'p> {
    registry: &'p MacroRegistry,
    options: ParseOptions,
}

impl<'p> ParseEngine<'p> {
    #[must_use]
    pub fn new(registry: &'p MacroRegistry, options: ParseOptions) -> Self {
        Self { registry, options }
    }

    /// Parse every child of `node`, in document order.
    ///
    /// # Errors
    /// Returns only fatal errors; element-level faults become `error` elements.
    pub fn parse_children(&self, node: Node<'_, '_>, ctx: ParseContext) -> Result<Vec<Element>> {
        let mut elements = Vec::new();
        for child in node.children() {
            let parsed = self.parse_node(child, ctx);
            if let Some(element) = self.isolate(child, parsed)? {
                elements.push(element);
            }
        }
        Ok(elements)
    }

    /// Turn an element-level fault into an `error` element.
    ///
    /// # Errors
    /// Passes fatal errors through unchanged.
    pub fn isolate(
        &self,
        node: Node<'_, '_>,
        parsed: Result<Option<Element>>,
    ) -> Result<Option<Element>> {
        match parsed {
            Ok(element) => Ok(element),
            Err(err) if err.is_fatal() => Err(err),
            Err(err) => {
                let tag = qualified_name(node);
                warn!(
                    error = %err,
                    tag = %tag,
                    "Error parsing element, replacing with error element"
                );
                Ok(Some(Element::error(tag, err.to_string())))
            }
        }
    }

    /// Parse a single node.
    ///
    /// Returns `Ok(None)` for nodes that produce nothing: whitespace,
    /// comments, skipped tags and empty elements.
    ///
    /// # Errors
    /// Returns `DepthExceeded` past the configured depth, or any
    /// element-level fault raised while interpreting the node.
    pub fn parse_node(&self, node: Node<'_, '_>, ctx: ParseContext) -> Result<Option<Element>> {
        if node.is_text() {
            return Ok(text_leaf(node.text().unwrap_or_default(), ctx));
        }
        if !node.is_element() {
            return Ok(None);
        }
        if ctx.depth >= self.options.max_depth {
            return Err(ParseError::DepthExceeded {
                limit: self.options.max_depth,
            });
        }

        let class = classify(node);
        let inner = ctx.descend();

        match class {
            TagClass::Heading(level) => Ok(blocks::heading(node, level, inner)),
            TagClass::Paragraph => blocks::paragraph(self, node, inner),
            TagClass::Preformatted => Ok(blocks::preformatted(node)),
            TagClass::Table => tables::table(self, node, inner),
            TagClass::List { ordered } => lists::list(self, node, ordered, inner),
            TagClass::TaskList => Ok(lists::task_list(node)),
            TagClass::Link => Ok(Some(inline::link(node))),
            TagClass::RichLink => Ok(Some(inline::rich_link(node))),
            TagClass::Image => inline::image(node).map(Some),
            TagClass::RichImage => inline::rich_image(node).map(Some),
            TagClass::Emphasis(style) => inline::emphasis(self, node, style, inner),
            TagClass::Macro => self.parse_macro(node, inner).map(Some),
            TagClass::Other => blocks::generic(self, node, inner),
            TagClass::Skip => {
                debug!(tag = %qualified_name(node), "Skipping tag");
                Ok(None)
            }
        }
    }

    /// Hand a macro to the registry. Bodies are parsed as blocks.
    fn parse_macro(&self, node: Node<'_, '_>, ctx: ParseContext) -> Result<Element> {
        let macro_node = MacroNode::from_node(node)?;
        let body_ctx = ctx.block();
        let recurse =
            |body: Node<'_, '_>| -> Result<Vec<Element>> { self.parse_children(body, body_ctx) };
        self.registry.handle(&macro_node, &recurse)
    }
}

/// Build a `plain-text` leaf from a text run, if it has visible text.
fn text_leaf(raw: &str, ctx: ParseContext) -> Option<Element> {
    if raw.trim().is_empty() {
        return None;
    }
    let normalized = normalize_whitespace(raw);
    let text = if ctx.is_inline() {
        normalized
    } else {
        normalized.trim().to_string()
    };
    Some(Element::leaf(ElementKind::PlainText, text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::macros::create_macro_registry;
    use crate::xml::{tokenize, wrap_markup};
    use pretty_assertions::assert_eq;

    fn parse_with(markup: &str, options: ParseOptions) -> Result<Vec<Element>> {
        let registry = create_macro_registry();
        let engine = ParseEngine::new(&registry, options);
        let wrapped = wrap_markup(markup);
        let doc = tokenize(&wrapped)?;
        engine.parse_children(doc.root_element(), ParseContext::root())
    }

    #[test]
    fn test_text_runs() {
        let elements = parse_with("  hello \n world  <!-- note -->   ", ParseOptions::default())
            .unwrap();
        assert_eq!(
            elements,
            vec![Element::leaf(ElementKind::PlainText, "hello world")]
        );
    }

    #[test]
    fn test_inline_text_keeps_edge_spaces() {
        let leaf = text_leaf(" a  b ", ParseContext::root().inline()).unwrap();
        assert_eq!(leaf.text(), Some(" a b "));
        assert!(text_leaf(" \n ", ParseContext::root().inline()).is_none());
    }

    #[test]
    fn test_skipped_tags_produce_nothing() {
        let elements = parse_with(
            "<br/><hr/><ac:emoticon ac:name=\"smile\"/><script>x()</script>",
            ParseOptions::default(),
        )
        .unwrap();
        assert!(elements.is_empty());
    }

    #[test]
    fn test_depth_exceeded_is_fatal() {
        let markup = format!("{}x{}", "<div>".repeat(10), "</div>".repeat(10));
        let result = parse_with(&markup, ParseOptions::default().with_max_depth(5));
        assert!(matches!(result, Err(ParseError::DepthExceeded { limit: 5 })));

        let ok = parse_with(&markup, ParseOptions::default().with_max_depth(10));
        assert!(ok.is_ok());
    }

    #[test]
    fn test_fault_is_isolated() {
        let elements =
            parse_with("<p>before</p><img alt=\"x\"/><p>after</p>", ParseOptions::default())
                .unwrap();

        assert_eq!(elements.len(), 3);
        assert_eq!(elements[0].text(), Some("before"));
        assert_eq!(elements[1].kind(), ElementKind::Error);
        assert_eq!(elements[1].attribute("tag"), Some("img"));
        assert_eq!(elements[2].text(), Some("after"));
    }

    #[test]
    fn test_macro_body_is_parsed() {
        let elements = parse_with(
            r#"<ac:structured-macro ac:name="info"><ac:rich-text-body><p>Note <strong>this</strong></p></ac:rich-text-body></ac:structured-macro>"#,
            ParseOptions::default(),
        )
        .unwrap();

        assert_eq!(elements.len(), 1);
        let info = &elements[0];
        assert_eq!(info.kind(), ElementKind::Macro);
        assert_eq!(info.attribute("name"), Some("info"));
        assert_eq!(info.children()[0].kind(), ElementKind::Paragraph);
        assert_eq!(info.plain_text(), "Note this");
    }
}
