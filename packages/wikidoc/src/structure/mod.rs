//! Structure analysis: the section outline of a document.

mod analyzer;
mod navigation;
mod slug;

pub use analyzer::analyze;
pub use navigation::{find_by_id, find_by_title, flatten, path_string};
pub use slug::to_slug;
