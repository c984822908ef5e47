//! Handlers for the macros storage format pages commonly use.

mod callout;
mod code;
mod generic;
mod issue;
mod layout;
mod status;
mod toc;

pub use callout::CalloutHandler;
pub use code::CodeHandler;
pub use generic::GenericMacroHandler;
pub use issue::IssueReferenceHandler;
pub use layout::{ExpandHandler, PanelHandler};
pub use status::StatusHandler;
pub use toc::TocHandler;
