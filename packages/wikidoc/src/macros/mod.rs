//! Macro dispatch registry.
//!
//! Storage format represents rich widgets (callouts, code blocks, status
//! badges, ...) as `ac:structured-macro` tags. Each known macro has a named
//! handler; macros without one fall through to a generic handler so no
//! macro is ever dropped.

mod config;
mod core;
mod handler;
pub mod handlers;
mod types;

pub use config::create_macro_registry;
pub use core::MacroRegistry;
pub use handler::{body_content, build_macro_element, MacroHandler, MacroNode, RecurseFn};
pub use types::{
    CalloutMacro, CalloutTone, CodeMacro, ExpandMacro, GenericMacro, IssueMacro, MacroInfo,
    PanelMacro, StatusMacro, TocMacro,
};
