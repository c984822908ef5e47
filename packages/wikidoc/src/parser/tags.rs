//! Classification of storage-format tags.

use roxmltree::Node;

use crate::config::{AC_NAMESPACE, RI_NAMESPACE};
use crate::xml::get_tag_name;

/// How the parse engine treats a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagClass {
    Heading(u8),
    Paragraph,
    Table,
    List { ordered: bool },
    TaskList,
    Link,
    RichLink,
    Image,
    RichImage,
    Emphasis(&'static str),
    Preformatted,
    Macro,
    /// Produces nothing.
    Skip,
    /// Any other tag: generic container or unknown leaf.
    Other,
}

/// HTML tags that never contribute content.
const SKIP_TAGS: &[&str] = &["colgroup", "col", "br", "hr", "script", "style"];

/// `ac:` tags that never contribute content.
const SKIP_AC_TAGS: &[&str] = &["placeholder", "emoticon", "parameter", "default-parameter"];

/// Classify an element node.
pub fn classify(node: Node<'_, '_>) -> TagClass {
    let name = get_tag_name(node);

    match node.tag_name().namespace() {
        Some(AC_NAMESPACE) => classify_ac(name),
        // Resource identifiers only mean something inside links and images.
        Some(RI_NAMESPACE) => TagClass::Skip,
        _ => classify_html(&name.to_ascii_lowercase()),
    }
}

fn classify_ac(name: &str) -> TagClass {
    match name {
        "structured-macro" | "macro" => TagClass::Macro,
        "link" => TagClass::RichLink,
        "image" => TagClass::RichImage,
        "task-list" => TagClass::TaskList,
        _ if SKIP_AC_TAGS.contains(&name) => TagClass::Skip,
        _ => TagClass::Other,
    }
}

fn classify_html(name: &str) -> TagClass {
    if let Some(level) = heading_level(name) {
        return TagClass::Heading(level);
    }

    match name {
        "p" => TagClass::Paragraph,
        "table" => TagClass::Table,
        "ul" => TagClass::List { ordered: false },
        "ol" => TagClass::List { ordered: true },
        "a" => TagClass::Link,
        "img" => TagClass::Image,
        "pre" => TagClass::Preformatted,
        _ => match emphasis_style(name) {
            Some(style) => TagClass::Emphasis(style),
            None if SKIP_TAGS.contains(&name) => TagClass::Skip,
            None => TagClass::Other,
        },
    }
}

/// Level of an `h1`..`h6` tag.
fn heading_level(name: &str) -> Option<u8> {
    let digit = name.strip_prefix('h')?;
    match digit.parse::<u8>() {
        Ok(level @ 1..=6) if digit.len() == 1 => Some(level),
        _ => None,
    }
}

/// Style recorded for an inline emphasis tag.
fn emphasis_style(name: &str) -> Option<&'static str> {
    let style = match name {
        "strong" | "b" => "bold",
        "em" | "i" => "italic",
        "code" => "code",
        "u" => "underline",
        "s" | "del" | "strike" => "strikethrough",
        "sup" => "superscript",
        "sub" => "subscript",
        _ => return None,
    };
    Some(style)
}

/// Check if a node is a `ul` or `ol` element.
pub fn is_list(node: Node<'_, '_>) -> bool {
    node.is_element() && matches!(classify(node), TagClass::List { .. })
}
