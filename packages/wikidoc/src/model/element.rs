//! The atomic parsed unit of a document.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::macros::MacroInfo;
use crate::xml::normalize_whitespace;

/// String-keyed attribute map of an element.
///
/// Iteration and serialization are sorted by key, so output does not depend
/// on the attribute order of the source markup.
pub type Attributes = BTreeMap<String, String>;

/// Classification of a parsed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    /// `h1`..`h6`, with a `level` attribute.
    Heading,
    Paragraph,
    Table,
    TableRow,
    TableCell,
    /// Ordered, unordered or task list.
    List,
    ListItem,
    Link,
    Image,
    /// Bold, italic, inline code and friends, with a `style` attribute. A
    /// leaf when it holds only text, a container when it wraps links or
    /// other inline elements.
    #[serde(rename = "inline-emphasis")]
    Emphasis,
    /// Block code from a code macro or `<pre>`.
    Code,
    Macro,
    PlainText,
    /// Unrecognised tag; the original tag name is kept under `tag`.
    Unknown,
    /// Element that failed to parse; carries `message` and `tag`.
    Error,
}

impl ElementKind {
    /// All element kinds, in declaration order.
    pub const ALL: [ElementKind; 15] = [
        Self::Heading,
        Self::Paragraph,
        Self::Table,
        Self::TableRow,
        Self::TableCell,
        Self::List,
        Self::ListItem,
        Self::Link,
        Self::Image,
        Self::Emphasis,
        Self::Code,
        Self::Macro,
        Self::PlainText,
        Self::Unknown,
        Self::Error,
    ];

    /// Get the kebab-case name of the kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Heading => "heading",
            Self::Paragraph => "paragraph",
            Self::Table => "table",
            Self::TableRow => "table-row",
            Self::TableCell => "table-cell",
            Self::List => "list",
            Self::ListItem => "list-item",
            Self::Link => "link",
            Self::Image => "image",
            Self::Emphasis => "inline-emphasis",
            Self::Code => "code",
            Self::Macro => "macro",
            Self::PlainText => "plain-text",
            Self::Unknown => "unknown",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| format!("unknown element kind '{s}'"))
    }
}

/// Content of an element: a text leaf or an ordered list of children.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Content {
    Text(String),
    Children(Vec<Element>),
}

/// A parsed element.
///
/// An element is either a leaf carrying text or a container carrying
/// children, never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    kind: ElementKind,
    content: Content,
    attributes: Attributes,
    #[serde(rename = "macro", skip_serializing_if = "Option::is_none")]
    macro_info: Option<Box<MacroInfo>>,
}

impl Element {
    /// Create a text leaf.
    #[must_use]
    pub fn leaf(kind: ElementKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            content: Content::Text(text.into()),
            attributes: Attributes::new(),
            macro_info: None,
        }
    }

    /// Create a container of child elements.
    #[must_use]
    pub fn container(kind: ElementKind, children: Vec<Element>) -> Self {
        Self {
            kind,
            content: Content::Children(children),
            attributes: Attributes::new(),
            macro_info: None,
        }
    }

    /// Create a heading leaf with its `level` attribute.
    #[must_use]
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::leaf(ElementKind::Heading, text).with_attribute("level", level.to_string())
    }

    /// Create an `error` element standing in for a node that failed to parse.
    #[must_use]
    pub fn error(tag: impl Into<String>, message: impl Into<String>) -> Self {
        Self::leaf(ElementKind::Error, "")
            .with_attribute("tag", tag)
            .with_attribute("message", message)
    }

    /// Set an attribute, replacing any existing value.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Merge attributes copied from source markup.
    ///
    /// Keys already present (derived keys such as `level` or `name`) win.
    #[must_use]
    pub fn with_source_attributes(mut self, attributes: Attributes) -> Self {
        for (key, value) in attributes {
            self.attributes.entry(key).or_insert(value);
        }
        self
    }

    /// Attach the typed macro payload.
    #[must_use]
    pub fn with_macro_info(mut self, info: MacroInfo) -> Self {
        self.macro_info = Some(Box::new(info));
        self
    }

    #[must_use]
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Get an attribute value.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Leaf text, or `None` for containers.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            Content::Children(_) => None,
        }
    }

    /// Child elements; empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[Element] {
        match &self.content {
            Content::Text(_) => &[],
            Content::Children(children) => children,
        }
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self.content, Content::Text(_))
    }

    #[must_use]
    pub fn is_container(&self) -> bool {
        !self.is_leaf()
    }

    /// Whether the element is of the given kind.
    #[must_use]
    pub fn is(&self, kind: ElementKind) -> bool {
        self.kind == kind
    }

    /// Heading level, parsed from the `level` attribute.
    #[must_use]
    pub fn level(&self) -> Option<u8> {
        self.attribute("level")?.parse().ok()
    }

    /// Typed payload of a macro-derived element.
    #[must_use]
    pub fn macro_info(&self) -> Option<&MacroInfo> {
        self.macro_info.as_deref()
    }

    /// All descendant text run together as a single line.
    ///
    /// # Examples
    /// ```
    /// use wikidoc::model::{Element, ElementKind};
    ///
    /// let p = Element::container(
    ///     ElementKind::Paragraph,
    ///     vec![
    ///         Element::leaf(ElementKind::PlainText, "Hello "),
    ///         Element::leaf(ElementKind::Emphasis, "world"),
    ///     ],
    /// );
    /// assert_eq!(p.plain_text(), "Hello world");
    /// ```
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut raw = String::new();
        self.push_text(&mut raw);
        normalize_whitespace(&raw).trim().to_string()
    }

    fn push_text(&self, out: &mut String) {
        match &self.content {
            Content::Text(text) => out.push_str(text),
            Content::Children(children) => {
                for child in children {
                    child.push_text(out);
                }
            }
        }
    }
}
