//! Read-only extraction over documents and section trees: text, kind
//! filters, search, summaries and tables of contents.

mod filter;
mod scope;
mod search;
mod text;
mod toc;

pub use filter::find_by_kind;
pub use scope::Scope;
pub use search::{search, search_sections, SearchMatch, SearchOptions, SearchResult};
pub use text::{extract_text, summarize};
pub use toc::table_of_contents;
