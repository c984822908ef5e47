//! Block-level tags: headings, paragraphs, preformatted text and
//! everything without a dedicated rule.

use roxmltree::Node;
use tracing::debug;

use super::context::ParseContext;
use super::engine::ParseEngine;
use crate::error::Result;
use crate::model::{Element, ElementKind};
use crate::xml::{
    collect_text, has_element_children, normalize_whitespace, qualified_name, source_attributes,
};

/// Flattened, whitespace-normalized text of a node.
pub(super) fn flat_text(node: Node<'_, '_>) -> String {
    normalize_whitespace(&collect_text(node)).trim().to_string()
}

/// `h1`..`h6`.
///
/// Inside inline content a heading tag is kept as plain text so it does
/// not start a section. Empty headings are dropped.
pub(super) fn heading(node: Node<'_, '_>, level: u8, ctx: ParseContext) -> Option<Element> {
    let text = flat_text(node);
    if text.is_empty() {
        debug!(level, "Dropping empty heading");
        return None;
    }

    if ctx.is_inline() {
        return Some(Element::leaf(ElementKind::PlainText, text));
    }

    Some(Element::heading(level, text).with_source_attributes(source_attributes(node)))
}

/// `p`: a text leaf, or a container of inline children.
pub(super) fn paragraph(
    engine: &ParseEngine<'_>,
    node: Node<'_, '_>,
    ctx: ParseContext,
) -> Result<Option<Element>> {
    let element = if has_element_children(node) {
        let children = engine.parse_children(node, ctx.inline())?;
        if children.is_empty() {
            return Ok(None);
        }
        Element::container(ElementKind::Paragraph, children)
    } else {
        let text = flat_text(node);
        if text.is_empty() {
            return Ok(None);
        }
        Element::leaf(ElementKind::Paragraph, text)
    };

    Ok(Some(element.with_source_attributes(source_attributes(node))))
}

/// `pre`: block code written as HTML. Text is kept verbatim.
pub(super) fn preformatted(node: Node<'_, '_>) -> Option<Element> {
    let text = collect_text(node);
    if text.trim().is_empty() {
        return None;
    }

    Some(
        Element::leaf(ElementKind::Code, text)
            .with_attribute("isBlock", "true")
            .with_source_attributes(source_attributes(node)),
    )
}

/// Any tag without a dedicated rule.
///
/// Becomes a container tagged with the source tag name if any child
/// parses, else an `unknown` leaf if it has text, else nothing.
pub(super) fn generic(
    engine: &ParseEngine<'_>,
    node: Node<'_, '_>,
    ctx: ParseContext,
) -> Result<Option<Element>> {
    if has_element_children(node) {
        let children = engine.parse_children(node, ctx)?;
        if !children.is_empty() {
            return Ok(Some(
                Element::container(ElementKind::Unknown, children)
                    .with_attribute("tag", qualified_name(node))
                    .with_source_attributes(source_attributes(node)),
            ));
        }
    }

    let tag = qualified_name(node);
    let text = flat_text(node);
    if text.is_empty() {
        debug!(tag = %tag, "Dropping empty element");
        return Ok(None);
    }

    Ok(Some(
        Element::leaf(ElementKind::Unknown, text)
            .with_attribute("tag", tag)
            .with_source_attributes(source_attributes(node)),
    ))
}
