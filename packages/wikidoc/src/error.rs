//! Error types for the document parser.
//!
//! A single `ParseError` enum covers both document-level failures, which
//! abort a parse, and element-level faults, which the parse engine turns
//! into `error`-kind elements so sibling elements still parse.

use thiserror::Error;

/// Main error type for the wikidoc library.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The markup could not be tokenized at all.
    #[error("Markup could not be tokenized: {0}")]
    Tokenize(#[from] roxmltree::Error),

    /// Nesting exceeded the configured recursion limit.
    #[error("Maximum nesting depth of {limit} exceeded")]
    DepthExceeded { limit: usize },

    /// An element is missing an attribute it cannot be interpreted without.
    #[error("Element <{tag}> is missing required attribute '{attribute}'")]
    MissingAttribute { tag: String, attribute: String },

    /// An element carries an attribute value that cannot be interpreted.
    #[error("Element <{tag}> has invalid {attribute} '{value}'")]
    InvalidAttribute {
        tag: String,
        attribute: String,
        value: String,
    },

    /// A macro tag without an `ac:name`.
    #[error("Macro element has no ac:name")]
    MissingMacroName,

    /// Inverted or out-of-range heading level range.
    #[error("Invalid heading level range {min}..={max}. Expected 1 <= min <= max <= 7")]
    InvalidLevelRange { min: u8, max: u8 },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl ParseError {
    /// Whether this error must abort the whole parse.
    ///
    /// Non-fatal errors are isolated to the element that raised them.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Tokenize(_) | Self::DepthExceeded { .. } | Self::Io(_)
        )
    }
}

/// Result type alias for wikidoc operations.
pub type Result<T> = std::result::Result<T, ParseError>;
