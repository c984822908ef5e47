//! Navigation over a section tree.

use crate::model::Section;

/// All sections of a tree in pre-order (parent before children).
///
/// # Examples
/// ```
/// use wikidoc::model::Element;
/// use wikidoc::structure::{analyze, flatten};
///
/// let elements = vec![
///     Element::heading(1, "A"),
///     Element::heading(2, "B"),
///     Element::heading(1, "C"),
/// ];
/// let sections = analyze(&elements);
/// let titles: Vec<_> = flatten(&sections).iter().map(|s| s.title.as_str()).collect();
/// assert_eq!(titles, vec!["A", "B", "C"]);
/// ```
#[must_use]
pub fn flatten<'s, 'a>(sections: &'s [Section<'a>]) -> Vec<&'s Section<'a>> {
    let mut result = Vec::new();
    let mut stack: Vec<&'s Section<'a>> = sections.iter().rev().collect();

    while let Some(section) = stack.pop() {
        result.push(section);
        stack.extend(section.subsections.iter().rev());
    }

    result
}

/// Find a section by id anywhere in the tree.
#[must_use]
pub fn find_by_id<'s, 'a>(sections: &'s [Section<'a>], id: &str) -> Option<&'s Section<'a>> {
    flatten(sections).into_iter().find(|section| section.id == id)
}

/// Find sections by title, in pre-order.
///
/// With `exact_match` the title must be equal; otherwise a
/// case-insensitive substring match is enough.
#[must_use]
pub fn find_by_title<'s, 'a>(
    sections: &'s [Section<'a>],
    title: &str,
    exact_match: bool,
) -> Vec<&'s Section<'a>> {
    let needle = title.to_lowercase();

    flatten(sections)
        .into_iter()
        .filter(|section| {
            if exact_match {
                section.title == title
            } else {
                section.title.to_lowercase().contains(&needle)
            }
        })
        .collect()
}

/// Join a section's path with a separator.
#[must_use]
pub fn path_string(section: &Section<'_>, separator: &str) -> String {
    section.path_string(separator)
}
