//! Wikidoc - Parse wiki storage-format markup into a navigable document.
//!
//! Storage format is the XHTML-like markup wiki pages are saved in:
//! ordinary HTML tags plus `ac:`/`ri:` tags for macros, rich links and
//! images. This crate turns it into a typed element tree, rebuilds the
//! section outline from its headings, and offers read-only extraction
//! (text, filters, search, summaries, tables of contents) over both.
//!
//! # Example
//!
//! ```
//! use wikidoc::extract::{search, SearchOptions};
//! use wikidoc::parse;
//!
//! let doc = parse(
//!     "<h1>Setup</h1><p>Install the tool.</p><h2>Linux</h2><p>Use the package.</p>",
//!     "Guide",
//! )
//! .unwrap();
//!
//! let sections = doc.sections();
//! assert_eq!(sections[0].title, "Setup");
//! assert_eq!(sections[0].subsections[0].path, vec!["Setup", "Linux"]);
//!
//! let hits = search(&doc, "tool", &SearchOptions::new());
//! assert_eq!(hits.len(), 1);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Configuration constants, options and validation
//! - [`error`]: Error types and Result alias
//! - [`xml`]: Tokenizing markup and XML node utilities
//! - [`model`]: Elements, documents and sections
//! - [`parser`]: Markup tree parser
//! - [`macros`]: Macro handlers and the registry dispatching to them
//! - [`structure`]: Section outline analysis and navigation
//! - [`extract`]: Text, filters, search, summaries, tables of contents
//! - [`source`]: Page sources supplying raw markup
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod macros;
pub mod model;
pub mod parser;
pub mod source;
pub mod structure;
pub mod xml;

// Re-export main functions
pub use parser::{parse, Parser};
pub use structure::analyze;

// Re-export commonly used items
pub use config::ParseOptions;
pub use error::{ParseError, Result};
pub use model::{Document, Element, ElementKind, Section};
