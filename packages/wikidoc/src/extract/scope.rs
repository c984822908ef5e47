//! What the extraction functions can read from.

use crate::model::{Document, Element, Section};
use crate::structure::flatten;

/// A readable scope: the top-level elements it covers, in document order.
///
/// Implemented for documents, element slices, single elements, sections
/// and section slices, so every extraction function works on all of them.
pub trait Scope {
    /// Top-level elements of the scope.
    fn roots(&self) -> Vec<&Element>;
}

impl Scope for Document {
    fn roots(&self) -> Vec<&Element> {
        self.elements().iter().collect()
    }
}

impl Scope for [Element] {
    fn roots(&self) -> Vec<&Element> {
        self.iter().collect()
    }
}

impl Scope for Element {
    fn roots(&self) -> Vec<&Element> {
        vec![self]
    }
}

/// A section covers its heading, its content and all its subsections.
impl Scope for Section<'_> {
    fn roots(&self) -> Vec<&Element> {
        std::slice::from_ref(self).roots()
    }
}

impl Scope for [Section<'_>] {
    fn roots(&self) -> Vec<&Element> {
        let mut roots = Vec::new();
        for section in flatten(self) {
            roots.extend(section.heading);
            roots.extend(section.content.iter().copied());
        }
        roots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementKind;
    use crate::structure::analyze;

    #[test]
    fn test_section_scope_covers_subtree() {
        let elements = vec![
            Element::leaf(ElementKind::Paragraph, "preamble"),
            Element::heading(1, "A"),
            Element::leaf(ElementKind::Paragraph, "a"),
            Element::heading(2, "B"),
            Element::leaf(ElementKind::Paragraph, "b"),
        ];
        let sections = analyze(&elements);

        let roots = sections[0].roots();
        assert_eq!(roots.len(), 4);
        assert_eq!(roots[0], &elements[1]);
        assert_eq!(roots[3], &elements[4]);

        assert_eq!(sections[0].subsections[0].roots().len(), 2);
        assert_eq!(elements.as_slice().roots().len(), 5);
    }
}
