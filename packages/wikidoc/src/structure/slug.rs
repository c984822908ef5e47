//! Stable section ids derived from titles.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::expect_used)]
/// Regex for slug generation - matches non-word characters.
static SLUG_NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));

#[allow(clippy::expect_used)]
/// Regex for slug generation - matches whitespace and dashes.
static SLUG_SPACE_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("valid regex"));

/// Slug used when a title has no word characters at all.
const FALLBACK_SLUG: &str = "section";

/// Generate a URL-friendly slug from a title.
///
/// # Examples
/// ```
/// use wikidoc::structure::to_slug;
///
/// assert_eq!(to_slug("Getting Started: Step 1!"), "getting-started-step-1");
/// assert_eq!(to_slug("???"), "section");
/// ```
#[must_use]
pub fn to_slug(title: &str) -> String {
    let text = title.to_lowercase();
    let text = SLUG_NON_WORD.replace_all(&text, "");
    let text = SLUG_SPACE_DASH.replace_all(&text, "-");
    let slug = text.trim_matches('-');

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// Hands out unique ids in the order titles are seen.
///
/// Repeats get `-1`, `-2`, ... suffixes.
#[derive(Debug, Default)]
pub(crate) struct SectionIds {
    used: HashSet<String>,
}

impl SectionIds {
    pub(crate) fn assign(&mut self, title: &str) -> String {
        let base = to_slug(title);
        let mut candidate = base.clone();
        let mut suffix = 0;

        while self.used.contains(&candidate) {
            suffix += 1;
            candidate = format!("{base}-{suffix}");
        }

        self.used.insert(candidate.clone());
        candidate
    }
}
