//! Text extraction and summaries.

use super::filter::{find_by_kind, walk};
use super::scope::Scope;
use crate::config::ELLIPSIS;
use crate::model::{Element, ElementKind};

/// All leaf text of a scope, depth-first, one line per leaf.
///
/// Leaves are trimmed; blank leaves are skipped.
#[must_use]
pub fn extract_text<S: Scope + ?Sized>(scope: &S) -> String {
    walk(scope)
        .into_iter()
        .filter_map(Element::text)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Short summary of a sequence of elements.
///
/// Uses the text of the first paragraph, or all text if there is no
/// paragraph, truncated to `max_length` characters with a trailing `...`.
///
/// # Examples
/// ```
/// use wikidoc::extract::summarize;
/// use wikidoc::model::{Element, ElementKind};
///
/// let elements = vec![
///     Element::heading(1, "Title"),
///     Element::leaf(ElementKind::Paragraph, "A fairly long first paragraph."),
/// ];
/// assert_eq!(summarize(&elements, 8), "A fairly...");
/// assert_eq!(summarize(&elements, 100), "A fairly long first paragraph.");
/// ```
#[must_use]
pub fn summarize(elements: &[Element], max_length: usize) -> String {
    let text = find_by_kind(elements, &[ElementKind::Paragraph])
        .first()
        .map(|paragraph| paragraph.plain_text())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| extract_text(elements));

    truncate(&text, max_length)
}

fn truncate(text: &str, max_length: usize) -> String {
    match text.char_indices().nth(max_length) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_text_joins_leaves() {
        let elements = vec![
            Element::heading(1, "Title"),
            Element::container(
                ElementKind::Paragraph,
                vec![
                    Element::leaf(ElementKind::PlainText, "Hello "),
                    Element::leaf(ElementKind::Emphasis, "world"),
                    Element::leaf(ElementKind::PlainText, "  "),
                ],
            ),
        ];
        assert_eq!(extract_text(elements.as_slice()), "Title\nHello\nworld");
    }

    #[test]
    fn test_summarize_falls_back_to_all_text() {
        let elements = vec![
            Element::heading(1, "Only"),
            Element::leaf(ElementKind::ListItem, "items"),
        ];
        assert_eq!(summarize(&elements, 50), "Only\nitems");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("héllo wörld", 5), "héllo...");
        assert_eq!(truncate("short", 5), "short");
        assert_eq!(truncate("", 0), "");
        assert_eq!(truncate("x", 0), "...");
    }
}
