//! Macro registry mapping macro names to handlers.

use tracing::debug;

use super::handler::{MacroHandler, MacroNode, RecurseFn};
use super::handlers::GenericMacroHandler;
use crate::error::Result;
use crate::model::Element;

/// Registry of macro handlers.
///
/// Handlers are consulted in registration order; the first one whose
/// `matches` accepts the macro name handles it. Macros no handler
/// accepts go to the generic handler, which keeps name, parameters
/// and body.
pub struct MacroRegistry {
    handlers: Vec<Box<dyn MacroHandler>>,
    fallback: GenericMacroHandler,
}

impl MacroRegistry {
    /// Create a registry with no named handlers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            fallback: GenericMacroHandler,
        }
    }

    /// Register a handler. Earlier registrations win on overlap.
    pub fn register(&mut self, handler: impl MacroHandler + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Get the named handler for a macro, if any.
    #[must_use]
    pub fn handler_for(&self, macro_name: &str) -> Option<&dyn MacroHandler> {
        self.handlers
            .iter()
            .find(|h| h.matches(macro_name))
            .map(|h| h.as_ref())
    }

    /// Check if a named handler accepts the macro.
    #[must_use]
    pub fn has_handler(&self, macro_name: &str) -> bool {
        self.handler_for(macro_name).is_some()
    }

    /// Names of all registered handlers, in registration order.
    #[must_use]
    pub fn handler_names(&self) -> Vec<&str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Convert a macro into an element.
    ///
    /// # Errors
    /// Propagates errors from the handler or from parsing the macro body.
    pub fn handle<'a, 'input>(
        &self,
        node: &MacroNode<'a, 'input>,
        recurse: &RecurseFn<'a, 'input>,
    ) -> Result<Element> {
        match self.handler_for(&node.name) {
            Some(handler) => handler.handle(node, recurse),
            None => {
                debug!(macro_name = %node.name, "No handler for macro, using generic handler");
                self.fallback.handle(node, recurse)
            }
        }
    }
}

impl Default for MacroRegistry {
    fn default() -> Self {
        Self::new()
    }
}
