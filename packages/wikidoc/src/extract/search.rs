//! Keyword search over elements and sections.

use regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::{debug, warn};

use super::filter::walk_from;
use super::scope::Scope;
use crate::model::{Element, ElementKind, Section};
use crate::structure::flatten;

/// Options for [`search`] and [`search_sections`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Match case exactly.
    pub case_sensitive: bool,

    /// Only match the query as a whole word.
    pub whole_word: bool,

    /// Kinds of element to match against. When empty, every text leaf is
    /// matched; otherwise elements of these kinds are matched on their
    /// flattened text.
    pub include_kinds: Vec<ElementKind>,
}

impl SearchOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    #[must_use]
    pub fn with_whole_word(mut self, whole_word: bool) -> Self {
        self.whole_word = whole_word;
        self
    }

    #[must_use]
    pub fn with_kinds(mut self, kinds: impl IntoIterator<Item = ElementKind>) -> Self {
        self.include_kinds = kinds.into_iter().collect();
        self
    }
}

/// One occurrence of the query, as a byte range into the searched text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchMatch {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// All matches within one element.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<'a> {
    /// The matching element.
    pub element: &'a Element,

    /// The section owning the element, when searching sections.
    pub section: Option<&'a Section<'a>>,

    /// Matches in document order.
    pub matches: Vec<SearchMatch>,
}

/// Build the pattern for a literal query. `None` for an empty query.
fn build_pattern(query: &str, options: &SearchOptions) -> Option<Regex> {
    if query.is_empty() {
        debug!("Empty search query");
        return None;
    }

    let escaped = regex::escape(query);
    let pattern = if options.whole_word {
        format!(r"\b{escaped}\b")
    } else {
        escaped
    };

    RegexBuilder::new(&pattern)
        .case_insensitive(!options.case_sensitive)
        .build()
        .map_err(|err| warn!(error = %err, "Could not compile search pattern"))
        .ok()
}

/// Matches of `pattern` in one element, if it is a candidate.
fn match_element(
    element: &Element,
    pattern: &Regex,
    options: &SearchOptions,
) -> Vec<SearchMatch> {
    let text = if options.include_kinds.is_empty() {
        match element.text() {
            Some(text) => text.to_string(),
            None => return Vec::new(),
        }
    } else if options.include_kinds.contains(&element.kind()) {
        element.plain_text()
    } else {
        return Vec::new();
    };

    pattern
        .find_iter(&text)
        .map(|m| SearchMatch {
            start: m.start(),
            end: m.end(),
            text: m.as_str().to_string(),
        })
        .collect()
}

fn search_elements<'a>(
    roots: Vec<&'a Element>,
    section: Option<&'a Section<'a>>,
    pattern: &Regex,
    options: &SearchOptions,
    results: &mut Vec<SearchResult<'a>>,
) {
    for element in walk_from(roots) {
        let matches = match_element(element, pattern, options);
        if !matches.is_empty() {
            results.push(SearchResult {
                element,
                section,
                matches,
            });
        }
    }
}

/// Search a scope for a literal query.
///
/// The query is escaped before it is compiled, so it never fails; an
/// empty query finds nothing.
///
/// # Examples
/// ```
/// use wikidoc::extract::{search, SearchOptions};
/// use wikidoc::model::{Element, ElementKind};
///
/// let elements = vec![Element::leaf(ElementKind::Paragraph, "Foobar foo baz")];
/// let options = SearchOptions::new().with_whole_word(true);
/// let results = search(elements.as_slice(), "foo", &options);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].matches.len(), 1);
/// assert_eq!(results[0].matches[0].start, 7);
/// ```
#[must_use]
pub fn search<'a, S: Scope + ?Sized>(
    scope: &'a S,
    query: &str,
    options: &SearchOptions,
) -> Vec<SearchResult<'a>> {
    let mut results = Vec::new();
    if let Some(pattern) = build_pattern(query, options) {
        search_elements(scope.roots(), None, &pattern, options, &mut results);
    }
    results
}

/// Search a section tree, attaching the owning section to each result.
///
/// A heading belongs to its own section.
#[must_use]
pub fn search_sections<'a>(
    sections: &'a [Section<'a>],
    query: &str,
    options: &SearchOptions,
) -> Vec<SearchResult<'a>> {
    let mut results = Vec::new();
    let Some(pattern) = build_pattern(query, options) else {
        return results;
    };

    for section in flatten(sections) {
        let roots: Vec<&'a Element> = section
            .heading
            .into_iter()
            .chain(section.content.iter().copied())
            .collect();
        search_elements(roots, Some(section), &pattern, options, &mut results);
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::analyze;
    use pretty_assertions::assert_eq;

    fn p(text: &str) -> Element {
        Element::leaf(ElementKind::Paragraph, text)
    }

    #[test]
    fn test_whole_word_case_insensitive() {
        let elements = vec![p("Foobar foo baz")];
        let options = SearchOptions::new().with_whole_word(true);

        let results = search(elements.as_slice(), "foo", &options);
        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0].matches,
            vec![SearchMatch {
                start: 7,
                end: 10,
                text: "foo".to_string()
            }]
        );
        assert!(results[0].section.is_none());
    }

    #[test]
    fn test_substring_and_case() {
        let elements = vec![p("Foobar foo baz")];

        let insensitive = search(elements.as_slice(), "foo", &SearchOptions::new());
        assert_eq!(insensitive[0].matches.len(), 2);

        let sensitive = search(
            elements.as_slice(),
            "Foo",
            &SearchOptions::new().with_case_sensitive(true),
        );
        assert_eq!(sensitive[0].matches.len(), 1);
        assert_eq!(sensitive[0].matches[0].text, "Foo");
    }

    #[test]
    fn test_query_is_literal() {
        let elements = vec![p("cost is $5 (approx.) a+b")];
        let options = SearchOptions::new();

        assert_eq!(search(elements.as_slice(), "(approx.)", &options).len(), 1);
        assert_eq!(search(elements.as_slice(), "a+b", &options).len(), 1);
        assert!(search(elements.as_slice(), "a.b", &options).is_empty());
        assert!(search(elements.as_slice(), "[", &options).is_empty());
        assert!(search(elements.as_slice(), "", &options).is_empty());
    }

    #[test]
    fn test_include_kinds_matches_flattened_text() {
        let paragraph = Element::container(
            ElementKind::Paragraph,
            vec![
                Element::leaf(ElementKind::PlainText, "split "),
                Element::leaf(ElementKind::Emphasis, "word"),
            ],
        );
        let elements = vec![paragraph, Element::leaf(ElementKind::ListItem, "split word")];

        let leaves = search(elements.as_slice(), "split word", &SearchOptions::new());
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].element.kind(), ElementKind::ListItem);

        let paragraphs = search(
            elements.as_slice(),
            "split word",
            &SearchOptions::new().with_kinds([ElementKind::Paragraph]),
        );
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].element.kind(), ElementKind::Paragraph);
    }

    #[test]
    fn test_search_sections_attaches_owner() {
        let elements = vec![
            Element::heading(1, "Setup"),
            p("install the tool"),
            Element::heading(2, "Tool options"),
            p("the tool has options"),
        ];
        let sections = analyze(&elements);

        let results = search_sections(&sections, "tool", &SearchOptions::new());
        let owners: Vec<_> = results
            .iter()
            .map(|r| r.section.map(|s| s.title.as_str()).unwrap_or_default())
            .collect();
        assert_eq!(owners, vec!["Setup", "Tool options", "Tool options"]);
    }
}
