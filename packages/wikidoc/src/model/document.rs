//! The parse result: a titled, immutable sequence of elements.

use serde::Serialize;

use super::element::{Element, ElementKind};
use super::section::Section;
use crate::extract::{extract_text, find_by_kind, summarize, table_of_contents};
use crate::structure::analyze;

/// A parsed document.
///
/// Built once per parse and never mutated afterwards, so it can be read
/// from several threads at once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    title: String,
    elements: Vec<Element>,
}

impl Document {
    /// Create a document from its title and top-level elements.
    #[must_use]
    pub fn new(title: impl Into<String>, elements: Vec<Element>) -> Self {
        Self {
            title: title.into(),
            elements,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Top-level elements in document order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn headings(&self) -> Vec<&Element> {
        find_by_kind(self, &[ElementKind::Heading])
    }

    #[must_use]
    pub fn paragraphs(&self) -> Vec<&Element> {
        find_by_kind(self, &[ElementKind::Paragraph])
    }

    #[must_use]
    pub fn tables(&self) -> Vec<&Element> {
        find_by_kind(self, &[ElementKind::Table])
    }

    #[must_use]
    pub fn lists(&self) -> Vec<&Element> {
        find_by_kind(self, &[ElementKind::List])
    }

    #[must_use]
    pub fn links(&self) -> Vec<&Element> {
        find_by_kind(self, &[ElementKind::Link])
    }

    #[must_use]
    pub fn images(&self) -> Vec<&Element> {
        find_by_kind(self, &[ElementKind::Image])
    }

    #[must_use]
    pub fn macros(&self) -> Vec<&Element> {
        find_by_kind(self, &[ElementKind::Macro])
    }

    /// All leaf text, one element per line.
    #[must_use]
    pub fn full_content(&self) -> String {
        extract_text(self)
    }

    /// Derive the outline of this document.
    #[must_use]
    pub fn sections(&self) -> Vec<Section<'_>> {
        analyze(&self.elements)
    }

    /// Outline restricted to an inclusive heading level range.
    #[must_use]
    pub fn table_of_contents(&self, min_level: u8, max_level: u8) -> Vec<Section<'_>> {
        table_of_contents(&self.sections(), min_level, max_level)
    }

    /// First paragraph (or all text) truncated to `max_length` characters.
    #[must_use]
    pub fn summary(&self, max_length: usize) -> String {
        summarize(&self.elements, max_length)
    }
}
