//! Configuration constants and option types for parsing and extraction.

use crate::error::{ParseError, Result};

/// Default maximum element nesting depth.
///
/// Markup nesting deeper than this (runaway lists or divs) fails with
/// `ParseError::DepthExceeded`. Tag nesting is checked before tokenizing and
/// the walker checks its own depth again, so the limit must stay low enough
/// for a recursive walk on a 2 MiB thread stack.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Default minimum heading level of a table-of-contents macro.
pub const DEFAULT_TOC_MIN_LEVEL: u8 = 1;

/// Default maximum heading level of a table-of-contents macro.
pub const DEFAULT_TOC_MAX_LEVEL: u8 = 7;

/// Highest heading level a level range may name.
pub const MAX_LEVEL: u8 = 7;

/// Marker appended to truncated summaries.
pub const ELLIPSIS: &str = "...";

/// Title of the synthetic root section of a document without headings.
pub const SYNTHETIC_ROOT_TITLE: &str = "Document";

/// Id of the synthetic root section.
pub const SYNTHETIC_ROOT_ID: &str = "document";

/// Namespace URI bound to the `ac:` prefix.
///
/// Storage format uses the prefix without declaring it, so the parser
/// declares it on the synthetic root it wraps the markup in.
pub const AC_NAMESPACE: &str = "http://atlassian.com/content";

/// Namespace URI bound to the `ri:` prefix.
pub const RI_NAMESPACE: &str = "http://atlassian.com/resource/identifier";

/// Default title of an expand macro without a `title` parameter.
pub const DEFAULT_EXPAND_TITLE: &str = "Click here to expand...";

/// Default colour of a status macro without a `colour` parameter.
pub const DEFAULT_STATUS_COLOUR: &str = "Grey";

/// Default language of a code macro without a `language` parameter.
pub const DEFAULT_CODE_LANGUAGE: &str = "none";

/// Default line width for wrapped text output.
pub const TEXT_WRAP_WIDTH: usize = 100;

/// Default maximum length of a summary, in characters.
pub const DEFAULT_SUMMARY_LENGTH: usize = 200;

/// Options controlling a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum element nesting depth before the parse fails.
    pub max_depth: usize,
}

impl ParseOptions {
    /// Set the maximum nesting depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Validate an inclusive heading level range.
///
/// # Examples
/// ```
/// use wikidoc::config::validate_level_range;
///
/// assert!(validate_level_range(1, 3).is_ok());
/// assert!(validate_level_range(3, 1).is_err());
/// assert!(validate_level_range(1, 9).is_err());
/// ```
pub fn validate_level_range(min: u8, max: u8) -> Result<()> {
    if min == 0 || min > max || max > MAX_LEVEL {
        return Err(ParseError::InvalidLevelRange { min, max });
    }
    Ok(())
}
