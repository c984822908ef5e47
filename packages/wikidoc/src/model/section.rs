//! Outline sections derived from a document's headings.

use serde::Serialize;

use super::element::Element;

/// A node in the outline of a document.
///
/// Sections are read-only views: `heading` and `content` borrow the
/// elements of the `Document` they were derived from, so a section tree
/// cannot outlive its document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section<'a> {
    /// Slug of the title, unique within one analysis.
    pub id: String,

    /// Text of the owning heading.
    pub title: String,

    /// Heading level 1-6, or 0 for the synthetic root.
    pub level: u8,

    /// Titles from the outermost ancestor down to this section.
    pub path: Vec<String>,

    /// The heading element, absent for the synthetic root.
    #[serde(skip)]
    pub heading: Option<&'a Element>,

    /// Blocks between this heading and the next heading. Containers that
    /// hold a heading are opened up, so their children are listed here
    /// rather than the container itself.
    pub content: Vec<&'a Element>,

    /// Child sections in document order.
    pub subsections: Vec<Section<'a>>,
}

impl<'a> Section<'a> {
    /// Whether this is the root produced for a document without headings.
    #[must_use]
    pub fn is_synthetic_root(&self) -> bool {
        self.heading.is_none()
    }

    /// Join the path titles with a separator.
    #[must_use]
    pub fn path_string(&self, separator: &str) -> String {
        self.path.join(separator)
    }

    /// Number of sections in this subtree, including this one.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.subsections.iter().map(Section::count).sum::<usize>()
    }
}
