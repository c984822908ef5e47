//! Table of contents projection of a section tree.

use crate::model::Section;

/// Restrict a section tree to an inclusive level range.
///
/// Filtering is top-down: a section outside the range is dropped with
/// its entire subtree, even if some descendants are in range. Nesting of
/// the kept sections is unchanged.
///
/// # Examples
/// ```
/// use wikidoc::extract::table_of_contents;
/// use wikidoc::model::Element;
/// use wikidoc::structure::analyze;
///
/// let elements = vec![
///     Element::heading(1, "A"),
///     Element::heading(2, "B"),
///     Element::heading(3, "C"),
/// ];
/// let sections = analyze(&elements);
/// let toc = table_of_contents(&sections, 1, 2);
/// assert_eq!(toc[0].subsections[0].title, "B");
/// assert!(toc[0].subsections[0].subsections.is_empty());
/// ```
#[must_use]
pub fn table_of_contents<'a>(
    sections: &[Section<'a>],
    min_level: u8,
    max_level: u8,
) -> Vec<Section<'a>> {
    sections
        .iter()
        .filter(|section| (min_level..=max_level).contains(&section.level))
        .map(|section| Section {
            id: section.id.clone(),
            title: section.title.clone(),
            level: section.level,
            path: section.path.clone(),
            heading: section.heading,
            content: section.content.clone(),
            subsections: table_of_contents(&section.subsections, min_level, max_level),
        })
        .collect()
}
