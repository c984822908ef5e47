//! Ordered, unordered and task lists.

use roxmltree::Node;

use super::blocks::flat_text;
use super::context::ParseContext;
use super::engine::ParseEngine;
use super::tags::is_list;
use crate::error::Result;
use crate::model::{Element, ElementKind};
use crate::xml::{
    collect_text, element_children, find_ac_child, get_tag_name, has_element_children,
    is_ac_element, normalize_whitespace, source_attributes,
};

/// `ul`/`ol`.
///
/// Nesting is kept through containment: a nested list becomes a child of
/// its list item rather than a depth counter.
pub(super) fn list(
    engine: &ParseEngine<'_>,
    node: Node<'_, '_>,
    ordered: bool,
    ctx: ParseContext,
) -> Result<Option<Element>> {
    let mut items = Vec::new();

    for child in node.children() {
        let parsed = if child.is_element() && get_tag_name(child) == "li" {
            list_item(engine, child, ctx.descend()).map(Some)
        } else {
            engine.parse_node(child, ctx)
        };
        if let Some(element) = engine.isolate(child, parsed)? {
            items.push(element);
        }
    }

    if items.is_empty() {
        return Ok(None);
    }

    Ok(Some(
        Element::container(ElementKind::List, items)
            .with_attribute("ordered", ordered.to_string())
            .with_source_attributes(source_attributes(node)),
    ))
}

/// `li`.
///
/// An item holding nested lists becomes its own text followed by each
/// nested list. Items are never dropped, so numbering survives.
fn list_item(engine: &ParseEngine<'_>, node: Node<'_, '_>, ctx: ParseContext) -> Result<Element> {
    let element = if node.children().any(is_list) {
        let mut children = Vec::new();

        let own_text = own_text(node);
        if !own_text.is_empty() {
            children.push(Element::leaf(ElementKind::PlainText, own_text));
        }
        for nested in node.children().filter(|child| is_list(*child)) {
            let parsed = engine.parse_node(nested, ctx);
            if let Some(element) = engine.isolate(nested, parsed)? {
                children.push(element);
            }
        }

        Element::container(ElementKind::ListItem, children)
    } else if has_element_children(node) {
        let children = engine.parse_children(node, ctx.inline())?;
        if children.is_empty() {
            Element::leaf(ElementKind::ListItem, "")
        } else {
            Element::container(ElementKind::ListItem, children)
        }
    } else {
        Element::leaf(ElementKind::ListItem, flat_text(node))
    };

    Ok(element.with_source_attributes(source_attributes(node)))
}

/// Text of a list item with nested list markup stripped.
fn own_text(node: Node<'_, '_>) -> String {
    let raw: String = node
        .children()
        .filter(|child| !is_list(*child))
        .map(collect_text)
        .collect();
    normalize_whitespace(&raw).trim().to_string()
}

/// `ac:task-list`: a checklist of `ac:task` items.
pub(super) fn task_list(node: Node<'_, '_>) -> Option<Element> {
    let items: Vec<Element> = element_children(node)
        .filter(|child| is_ac_element(*child, "task"))
        .map(task)
        .collect();

    if items.is_empty() {
        return None;
    }

    Some(
        Element::container(ElementKind::List, items)
            .with_attribute("ordered", "false")
            .with_attribute("taskList", "true"),
    )
}

fn task(node: Node<'_, '_>) -> Element {
    let field = |name: &str| find_ac_child(node, name).map(flat_text);

    let status = match field("task-status").as_deref() {
        Some("complete") => "complete",
        _ => "incomplete",
    };

    let mut element = Element::leaf(
        ElementKind::ListItem,
        field("task-body").unwrap_or_default(),
    )
    .with_attribute("status", status);

    if let Some(id) = field("task-id") {
        element = element.with_attribute("taskId", id);
    }
    element
}
