//! Inline tags: links, images and emphasis.

use roxmltree::Node;

use super::blocks::flat_text;
use super::context::ParseContext;
use super::engine::ParseEngine;
use crate::error::{ParseError, Result};
use crate::model::{Element, ElementKind};
use crate::xml::{
    ac_attribute, find_ac_child, find_ri_child, get_tag_name, has_element_children, ri_attribute,
    source_attributes,
};

/// `a`: a leaf with `href`. Text falls back to the target.
pub(super) fn link(node: Node<'_, '_>) -> Element {
    let mut text = flat_text(node);
    if text.is_empty() {
        text = node.attribute("href").unwrap_or_default().to_string();
    }
    Element::leaf(ElementKind::Link, text).with_source_attributes(source_attributes(node))
}

/// Link target described by a resource identifier.
#[derive(Debug, Default)]
struct Target {
    attributes: Vec<(&'static str, String)>,
    label: Option<String>,
}

impl Target {
    fn push(&mut self, key: &'static str, value: Option<&str>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.attributes.push((key, value.to_string()));
        }
    }
}

/// Read the `ri:` child of a rich link or image.
fn resource_target(node: Node<'_, '_>) -> Target {
    let mut target = Target::default();
    let Some(resource) = find_ri_child(node) else {
        return target;
    };

    match get_tag_name(resource) {
        "page" | "blog-post" => {
            let title = ri_attribute(resource, "content-title");
            target.push("page", title);
            target.push("space", ri_attribute(resource, "space-key"));
            target.label = title.map(str::to_string);
        }
        "attachment" => {
            let filename = ri_attribute(resource, "filename");
            target.push("attachment", filename);
            target.push("src", filename);
            target.label = filename.map(str::to_string);
        }
        "url" => {
            let value = ri_attribute(resource, "value");
            target.push("href", value);
            target.push("src", value);
            target.label = value.map(str::to_string);
        }
        "user" => {
            let user = ri_attribute(resource, "account-id")
                .or_else(|| ri_attribute(resource, "userkey"))
                .or_else(|| ri_attribute(resource, "username"));
            target.push("user", user);
            target.label = user.map(str::to_string);
        }
        "space" => {
            let key = ri_attribute(resource, "space-key");
            target.push("space", key);
            target.label = key.map(str::to_string);
        }
        _ => {}
    }

    target
}

/// `ac:link`: page, attachment, URL or user links.
pub(super) fn rich_link(node: Node<'_, '_>) -> Element {
    let target = resource_target(node);
    let anchor = ac_attribute(node, "anchor");

    let body = find_ac_child(node, "plain-text-link-body")
        .or_else(|| find_ac_child(node, "link-body"))
        .map(flat_text)
        .filter(|text| !text.is_empty());

    let text = body
        .or(target.label)
        .or_else(|| anchor.map(str::to_string))
        .unwrap_or_default();

    let mut element = Element::leaf(ElementKind::Link, text);
    for (key, value) in target.attributes {
        // `src` only describes images.
        if key != "src" {
            element = element.with_attribute(key, value);
        }
    }
    if let Some(anchor) = anchor {
        element = element.with_attribute("anchor", anchor);
    }
    element.with_source_attributes(source_attributes(node))
}

/// `img`: requires `src`.
///
/// # Errors
/// Returns `MissingAttribute` when the image has no source.
pub(super) fn image(node: Node<'_, '_>) -> Result<Element> {
    let src = node
        .attribute("src")
        .filter(|src| !src.trim().is_empty())
        .ok_or_else(|| missing_source("img"))?;

    Ok(Element::leaf(ElementKind::Image, node.attribute("alt").unwrap_or_default())
        .with_attribute("src", src)
        .with_source_attributes(source_attributes(node)))
}

/// `ac:image`: source from an attachment or URL.
///
/// # Errors
/// Returns `MissingAttribute` when neither is present.
pub(super) fn rich_image(node: Node<'_, '_>) -> Result<Element> {
    let target = resource_target(node);
    let src = target
        .attributes
        .iter()
        .find(|(key, _)| *key == "src")
        .map(|(_, value)| value.clone())
        .ok_or_else(|| missing_source("ac:image"))?;

    let alt = ac_attribute(node, "alt").unwrap_or_default();
    let mut element = Element::leaf(ElementKind::Image, alt)
        .with_attribute("src", src)
        .with_attribute("alt", alt);
    for (key, value) in target.attributes {
        if key == "attachment" {
            element = element.with_attribute(key, value);
        }
    }
    Ok(element.with_source_attributes(source_attributes(node)))
}

fn missing_source(tag: &str) -> ParseError {
    ParseError::MissingAttribute {
        tag: tag.to_string(),
        attribute: "src".to_string(),
    }
}

/// Bold, italic, inline code and friends.
///
/// Plain text becomes a leaf. When the tag wraps links, images or nested
/// emphasis those are parsed and kept as children.
pub(super) fn emphasis(
    engine: &ParseEngine<'_>,
    node: Node<'_, '_>,
    style: &'static str,
    ctx: ParseContext,
) -> Result<Option<Element>> {
    let element = if has_element_children(node) {
        let children = engine.parse_children(node, ctx.inline())?;
        if children.is_empty() {
            return Ok(None);
        }
        if children.iter().all(|child| child.is(ElementKind::PlainText)) {
            Element::leaf(ElementKind::Emphasis, flat_text(node))
        } else {
            Element::container(ElementKind::Emphasis, children)
        }
    } else {
        let text = flat_text(node);
        if text.is_empty() {
            return Ok(None);
        }
        Element::leaf(ElementKind::Emphasis, text)
    };

    Ok(Some(
        element
            .with_attribute("style", style)
            .with_source_attributes(source_attributes(node)),
    ))
}
