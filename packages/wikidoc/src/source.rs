//! Page sources: where raw storage-format markup comes from.
//!
//! The parser itself never does I/O. A [`PageSource`] supplies the markup
//! and title of a page; [`load_document`] fetches and parses in one step.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{ParseError, Result};
use crate::model::Document;
use crate::parser::Parser;

/// Raw markup of one page, as supplied by a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPage {
    pub id: String,
    pub title: String,
    pub markup: String,
}

/// Trait for page source implementations.
pub trait PageSource: Send + Sync {
    /// Get the name of this source.
    fn name(&self) -> &str;

    /// Fetch the raw markup of a page.
    ///
    /// # Errors
    /// Returns `ParseError::Io` if the page cannot be read.
    fn fetch(&self, id: &str) -> Result<RawPage>;
}

/// Reads pages from files. The page id is a path relative to the root;
/// the title is the file stem.
#[derive(Debug, Clone, Default)]
pub struct FilePageSource {
    root: PathBuf,
}

impl FilePageSource {
    /// Create a source reading files under `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl PageSource for FilePageSource {
    fn name(&self) -> &str {
        "file"
    }

    fn fetch(&self, id: &str) -> Result<RawPage> {
        let path = self.root.join(id);
        debug!(path = %path.display(), "Reading page");

        let markup = fs::read_to_string(&path)?;
        let title = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| id.to_string());

        Ok(RawPage {
            id: id.to_string(),
            title,
            markup,
        })
    }
}

/// In-memory pages keyed by id.
#[derive(Debug, Clone, Default)]
pub struct MemoryPageSource {
    pages: HashMap<String, RawPage>,
}

impl MemoryPageSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page.
    #[must_use]
    pub fn with_page(
        mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        markup: impl Into<String>,
    ) -> Self {
        let id = id.into();
        self.pages.insert(
            id.clone(),
            RawPage {
                id,
                title: title.into(),
                markup: markup.into(),
            },
        );
        self
    }
}

impl PageSource for MemoryPageSource {
    fn name(&self) -> &str {
        "memory"
    }

    fn fetch(&self, id: &str) -> Result<RawPage> {
        self.pages.get(id).cloned().ok_or_else(|| {
            ParseError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("No page with id '{id}'"),
            ))
        })
    }
}

/// Fetch a page and parse it.
///
/// # Arguments
/// * `source` - Where to read the page from
/// * `parser` - Parser to use
/// * `id` - Page id understood by the source
/// * `title` - Title overriding the one the source supplies
///
/// # Errors
/// Returns source errors and fatal parse errors.
pub fn load_document(
    source: &dyn PageSource,
    parser: &Parser,
    id: &str,
    title: Option<&str>,
) -> Result<Document> {
    let page = source.fetch(id)?;
    let title = title.map_or(page.title, str::to_string);
    parser.parse(&page.markup, title)
}
