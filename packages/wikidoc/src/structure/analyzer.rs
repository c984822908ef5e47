//! Outline reconstruction from the heading sequence of a document.

use thiserror::Error;
use tracing::warn;

use super::slug::SectionIds;
use crate::config::{SYNTHETIC_ROOT_ID, SYNTHETIC_ROOT_TITLE};
use crate::model::{Element, ElementKind, Section};

/// Structural problem that makes an element sequence unusable as an outline.
#[derive(Debug, Error)]
enum AnalyzeError {
    #[error("Heading at position {index} has no level between 1 and 6")]
    InvalidHeadingLevel { index: usize },
}

/// A heading with its position in the block stream.
struct HeadingRef<'a> {
    index: usize,
    element: &'a Element,
    level: u8,
}

/// Build the section tree of an element sequence.
///
/// Headings are found at any depth. A container with a heading somewhere
/// below it (a layout cell, a macro body, a `div`) is opened up and its
/// children take its place in the block stream; every other element stays
/// whole. In that stream each heading owns the blocks up to the next
/// heading of any level, and nests under the nearest preceding heading
/// with a lower level. Blocks before the first heading belong to no
/// section.
///
/// A sequence without headings yields one synthetic root (level 0,
/// title "Document") holding every element. This function never fails:
/// on a malformed sequence it logs a warning and returns that same root.
///
/// # Examples
/// ```
/// use wikidoc::model::{Element, ElementKind};
/// use wikidoc::structure::analyze;
///
/// let elements = vec![
///     Element::heading(1, "A"),
///     Element::leaf(ElementKind::Paragraph, "x"),
///     Element::container(ElementKind::Unknown, vec![
///         Element::heading(2, "B"),
///         Element::leaf(ElementKind::Paragraph, "y"),
///     ]),
/// ];
/// let sections = analyze(&elements);
/// assert_eq!(sections.len(), 1);
/// assert_eq!(sections[0].subsections[0].title, "B");
/// assert_eq!(sections[0].subsections[0].path, vec!["A", "B"]);
/// ```
#[must_use]
pub fn analyze(elements: &[Element]) -> Vec<Section<'_>> {
    match try_analyze(elements) {
        Ok(sections) => sections,
        Err(err) => {
            warn!(error = %err, "Could not build outline, using a single root section");
            vec![synthetic_root(elements)]
        }
    }
}

fn try_analyze(elements: &[Element]) -> Result<Vec<Section<'_>>, AnalyzeError> {
    let stream = block_stream(elements);
    let headings = collect_headings(&stream)?;
    if headings.is_empty() {
        return Ok(vec![synthetic_root(elements)]);
    }

    let mut ids = SectionIds::default();
    let mut roots = Vec::new();
    let mut open: Vec<Section<'_>> = Vec::new();

    for (position, heading) in headings.iter().enumerate() {
        let end = headings
            .get(position + 1)
            .map_or(stream.len(), |next| next.index);

        while open.last().is_some_and(|top| top.level >= heading.level) {
            close_innermost(&mut open, &mut roots);
        }

        let title = heading.element.plain_text();
        let mut path = open.last().map(|parent| parent.path.clone()).unwrap_or_default();
        path.push(title.clone());

        open.push(Section {
            id: ids.assign(&title),
            title,
            level: heading.level,
            path,
            heading: Some(heading.element),
            content: stream[heading.index + 1..end].to_vec(),
            subsections: Vec::new(),
        });
    }

    while !open.is_empty() {
        close_innermost(&mut open, &mut roots);
    }

    Ok(roots)
}

/// Flatten the elements into blocks, opening up every container that
/// holds a heading. Document order is preserved.
fn block_stream(elements: &[Element]) -> Vec<&Element> {
    let mut stream = Vec::with_capacity(elements.len());
    let mut pending: Vec<&Element> = elements.iter().rev().collect();

    while let Some(element) = pending.pop() {
        if holds_heading(element) {
            pending.extend(element.children().iter().rev());
        } else {
            stream.push(element);
        }
    }
    stream
}

fn holds_heading(element: &Element) -> bool {
    let mut pending: Vec<&Element> = element.children().iter().collect();
    while let Some(child) = pending.pop() {
        if child.is(ElementKind::Heading) {
            return true;
        }
        pending.extend(child.children().iter());
    }
    false
}

fn collect_headings<'a>(stream: &[&'a Element]) -> Result<Vec<HeadingRef<'a>>, AnalyzeError> {
    stream
        .iter()
        .enumerate()
        .filter(|(_, element)| element.is(ElementKind::Heading))
        .map(|(index, &element)| match element.level() {
            Some(level @ 1..=6) => Ok(HeadingRef {
                index,
                element,
                level,
            }),
            _ => Err(AnalyzeError::InvalidHeadingLevel { index }),
        })
        .collect()
}

/// Pop the innermost open section and attach it to its parent.
fn close_innermost<'a>(open: &mut Vec<Section<'a>>, roots: &mut Vec<Section<'a>>) {
    let Some(done) = open.pop() else {
        return;
    };
    match open.last_mut() {
        Some(parent) => parent.subsections.push(done),
        None => roots.push(done),
    }
}

fn synthetic_root(elements: &[Element]) -> Section<'_> {
    Section {
        id: SYNTHETIC_ROOT_ID.to_string(),
        title: SYNTHETIC_ROOT_TITLE.to_string(),
        level: 0,
        path: vec![SYNTHETIC_ROOT_TITLE.to_string()],
        heading: None,
        content: elements.iter().collect(),
        subsections: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn p(text: &str) -> Element {
        Element::leaf(ElementKind::Paragraph, text)
    }

    fn titles(sections: &[Section<'_>]) -> Vec<String> {
        sections.iter().map(|s| s.title.clone()).collect()
    }

    #[test]
    fn test_nested_sections() {
        let elements = vec![
            Element::heading(1, "A"),
            p("x"),
            Element::heading(2, "B"),
            p("y"),
        ];
        let sections = analyze(&elements);

        assert_eq!(sections.len(), 1);
        let a = &sections[0];
        assert_eq!(a.level, 1);
        assert_eq!(a.content, vec![&p("x")]);
        assert_eq!(a.subsections.len(), 1);

        let b = &a.subsections[0];
        assert_eq!(b.title, "B");
        assert_eq!(b.level, 2);
        assert_eq!(b.content, vec![&p("y")]);
        assert!(b.subsections.is_empty());
    }

    #[test]
    fn test_no_headings_yields_synthetic_root() {
        let elements = vec![p("only text")];
        let sections = analyze(&elements);

        assert_eq!(sections.len(), 1);
        let root = &sections[0];
        assert!(root.is_synthetic_root());
        assert_eq!(root.level, 0);
        assert_eq!(root.title, "Document");
        assert_eq!(root.id, "document");
        assert_eq!(root.content, elements.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_sequence_yields_empty_root() {
        let sections = analyze(&[]);
        assert_eq!(sections.len(), 1);
        assert!(sections[0].content.is_empty());
    }

    #[test]
    fn test_skipped_levels_nest_one_deep() {
        let elements = vec![Element::heading(1, "A"), Element::heading(3, "C")];
        let sections = analyze(&elements);

        assert_eq!(sections[0].subsections[0].title, "C");
        assert_eq!(sections[0].subsections[0].path, vec!["A", "C"]);
    }

    #[test]
    fn test_same_level_headings_are_siblings() {
        let elements = vec![
            Element::heading(2, "One"),
            Element::heading(2, "Two"),
            p("body"),
        ];
        let sections = analyze(&elements);

        assert_eq!(titles(&sections), vec!["One", "Two"]);
        assert!(sections[0].content.is_empty());
        assert_eq!(sections[1].content, vec![&p("body")]);
    }

    #[test]
    fn test_shallower_heading_climbs_out() {
        let elements = vec![
            Element::heading(2, "Deep start"),
            Element::heading(3, "Deeper"),
            Element::heading(1, "Top"),
            Element::heading(3, "Under top"),
            Element::heading(2, "Between"),
        ];
        let sections = analyze(&elements);

        assert_eq!(titles(&sections), vec!["Deep start", "Top"]);
        assert_eq!(titles(&sections[0].subsections), vec!["Deeper"]);
        assert_eq!(titles(&sections[1].subsections), vec!["Under top", "Between"]);
    }

    #[test]
    fn test_preamble_belongs_to_no_section() {
        let elements = vec![p("intro"), Element::heading(1, "A"), p("body")];
        let sections = analyze(&elements);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].content, vec![&p("body")]);
    }

    #[test]
    fn test_duplicate_titles_get_unique_ids() {
        let elements = vec![
            Element::heading(1, "Notes"),
            Element::heading(2, "Notes"),
            Element::heading(1, "Notes"),
        ];
        let sections = analyze(&elements);

        assert_eq!(sections[0].id, "notes");
        assert_eq!(sections[0].subsections[0].id, "notes-1");
        assert_eq!(sections[1].id, "notes-2");
    }

    #[test]
    fn test_heading_without_level_falls_back_to_root() {
        let elements = vec![Element::leaf(ElementKind::Heading, "No level"), p("x")];
        let sections = analyze(&elements);

        assert_eq!(sections.len(), 1);
        assert!(sections[0].is_synthetic_root());
        assert_eq!(sections[0].content.len(), 2);
    }

    #[test]
    fn test_deeper_then_shallower_heading_shares_parent() {
        let elements = vec![
            Element::heading(1, "A"),
            Element::heading(3, "C"),
            Element::heading(2, "B"),
        ];
        let sections = analyze(&elements);

        assert_eq!(titles(&sections), vec!["A"]);
        assert_eq!(titles(&sections[0].subsections), vec!["C", "B"]);
        assert!(sections[0].subsections[0].subsections.is_empty());
        assert_eq!(sections[0].subsections[1].path, vec!["A", "B"]);
    }

    #[test]
    fn test_headings_inside_containers_open_sections() {
        let layout = Element::container(
            ElementKind::Unknown,
            vec![Element::container(
                ElementKind::Unknown,
                vec![Element::heading(2, "Inside"), p("cell text")],
            )],
        );
        let elements = vec![Element::heading(1, "Top"), p("x"), layout];
        let sections = analyze(&elements);

        assert_eq!(titles(&sections), vec!["Top"]);
        assert_eq!(sections[0].content, vec![&p("x")]);
        let inside = &sections[0].subsections[0];
        assert_eq!(inside.title, "Inside");
        assert_eq!(inside.path, vec!["Top", "Inside"]);
        assert_eq!(inside.content, vec![&p("cell text")]);
    }

    #[test]
    fn test_macro_body_heading_splits_surrounding_content() {
        let panel = Element::container(
            ElementKind::Macro,
            vec![p("before"), Element::heading(1, "Second"), p("after")],
        );
        let table = Element::container(ElementKind::Table, vec![]);
        let elements = vec![Element::heading(1, "First"), panel, table.clone()];
        let sections = analyze(&elements);

        assert_eq!(titles(&sections), vec!["First", "Second"]);
        assert_eq!(sections[0].content, vec![&p("before")]);
        assert_eq!(sections[1].content, vec![&p("after"), &table]);
    }

    #[test]
    fn test_every_nested_heading_yields_one_section() {
        let elements = vec![
            Element::container(ElementKind::Unknown, vec![Element::heading(1, "A")]),
            Element::container(
                ElementKind::List,
                vec![Element::container(
                    ElementKind::ListItem,
                    vec![Element::heading(2, "B")],
                )],
            ),
            Element::heading(2, "C"),
        ];
        let sections = analyze(&elements);

        let total: usize = sections.iter().map(Section::count).sum();
        assert_eq!(total, 3);
        assert_eq!(titles(&sections[0].subsections), vec!["B", "C"]);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let elements = vec![
            Element::heading(1, "A"),
            p("x"),
            Element::heading(2, "B"),
            Element::heading(1, "C"),
        ];
        assert_eq!(analyze(&elements), analyze(&elements));
    }
}
