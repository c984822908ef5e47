//! Typed macro payloads.
//!
//! Each known macro gets a fixed-schema struct; everything else is kept as
//! a `GenericMacro` with its raw parameter map.

use serde::Serialize;

use crate::config::{
    DEFAULT_CODE_LANGUAGE, DEFAULT_EXPAND_TITLE, DEFAULT_STATUS_COLOUR, DEFAULT_TOC_MAX_LEVEL,
    DEFAULT_TOC_MIN_LEVEL,
};
use crate::model::Attributes;

/// Tone of a callout box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutTone {
    Info,
    Note,
    Warning,
    Tip,
}

impl CalloutTone {
    /// Get the macro name of this tone.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Note => "note",
            Self::Warning => "warning",
            Self::Tip => "tip",
        }
    }
}

/// An info, note, warning or tip box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalloutMacro {
    pub tone: CalloutTone,
    pub title: Option<String>,
    pub show_icon: bool,
}

/// A code block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeMacro {
    pub language: String,
    pub title: Option<String>,
    pub line_numbers: bool,
    pub collapse: bool,
}

impl Default for CodeMacro {
    fn default() -> Self {
        Self {
            language: DEFAULT_CODE_LANGUAGE.to_string(),
            title: None,
            line_numbers: false,
            collapse: false,
        }
    }
}

/// A table-of-contents placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TocMacro {
    pub min_level: u8,
    pub max_level: u8,
}

impl Default for TocMacro {
    fn default() -> Self {
        Self {
            min_level: DEFAULT_TOC_MIN_LEVEL,
            max_level: DEFAULT_TOC_MAX_LEVEL,
        }
    }
}

/// A coloured status lozenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMacro {
    pub title: String,
    pub colour: String,
    pub subtle: bool,
}

impl Default for StatusMacro {
    fn default() -> Self {
        Self {
            title: String::new(),
            colour: DEFAULT_STATUS_COLOUR.to_string(),
            subtle: false,
        }
    }
}

/// A collapsible section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpandMacro {
    pub title: String,
}

impl Default for ExpandMacro {
    fn default() -> Self {
        Self {
            title: DEFAULT_EXPAND_TITLE.to_string(),
        }
    }
}

/// A bordered panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PanelMacro {
    pub title: Option<String>,
    pub bg_color: Option<String>,
    pub border_color: Option<String>,
    pub border_style: Option<String>,
}

/// A reference to an issue in an external tracker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssueMacro {
    pub key: Option<String>,
    pub server: Option<String>,
    pub server_id: Option<String>,
    pub jql: Option<String>,
}

/// Any macro without a dedicated handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenericMacro {
    pub name: String,
    pub params: Attributes,
}

/// Typed payload of a macro-derived element, keyed by macro name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum MacroInfo {
    Callout(CalloutMacro),
    Code(CodeMacro),
    TableOfContents(TocMacro),
    Status(StatusMacro),
    Expand(ExpandMacro),
    Panel(PanelMacro),
    IssueReference(IssueMacro),
    Generic(GenericMacro),
}

impl MacroInfo {
    /// Attributes derived from the typed payload.
    ///
    /// These take precedence over raw parameters of the same name.
    #[must_use]
    pub fn derived_attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::new();

        match self {
            Self::Callout(callout) => {
                attrs.push(("tone", callout.tone.as_str().to_string()));
                if let Some(title) = &callout.title {
                    attrs.push(("title", title.clone()));
                }
            }
            Self::Code(code) => {
                attrs.push(("language", code.language.clone()));
                attrs.push(("isBlock", "true".to_string()));
                if let Some(title) = &code.title {
                    attrs.push(("title", title.clone()));
                }
            }
            Self::TableOfContents(toc) => {
                attrs.push(("minLevel", toc.min_level.to_string()));
                attrs.push(("maxLevel", toc.max_level.to_string()));
            }
            Self::Status(status) => {
                attrs.push(("title", status.title.clone()));
                attrs.push(("colour", status.colour.clone()));
            }
            Self::Expand(expand) => {
                attrs.push(("title", expand.title.clone()));
            }
            Self::Panel(panel) => {
                if let Some(title) = &panel.title {
                    attrs.push(("title", title.clone()));
                }
            }
            Self::IssueReference(issue) => {
                if let Some(key) = &issue.key {
                    attrs.push(("key", key.clone()));
                }
            }
            Self::Generic(_) => {}
        }

        attrs
    }
}
