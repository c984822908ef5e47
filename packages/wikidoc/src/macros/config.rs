//! Default macro registry configuration.

use super::core::MacroRegistry;
use super::handlers::{
    CalloutHandler, CodeHandler, ExpandHandler, IssueReferenceHandler, PanelHandler,
    StatusHandler, TocHandler,
};
use super::types::CalloutTone;

/// Create a macro registry with handlers for the common macros.
///
/// Unregistered macros are still handled by the registry's generic
/// fallback.
#[must_use]
pub fn create_macro_registry() -> MacroRegistry {
    let mut registry = MacroRegistry::new();

    // Callouts
    for tone in [
        CalloutTone::Info,
        CalloutTone::Note,
        CalloutTone::Warning,
        CalloutTone::Tip,
    ] {
        registry.register(CalloutHandler::new(tone));
    }

    // Code (also code-block, noformat)
    registry.register(CodeHandler);

    registry.register(TocHandler);
    registry.register(StatusHandler);
    registry.register(ExpandHandler);
    registry.register(PanelHandler);
    registry.register(IssueReferenceHandler);

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create_macro_registry() {
        let registry = create_macro_registry();

        assert_eq!(
            registry.handler_names(),
            vec![
                "info", "note", "warning", "tip", "code", "toc", "status", "expand", "panel",
                "jira"
            ]
        );
        assert!(registry.has_handler("noformat"));
        assert!(registry.has_handler("Code-Block"));
        assert!(!registry.has_handler("gallery"));
    }
}
