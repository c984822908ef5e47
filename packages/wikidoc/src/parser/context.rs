//! Parsing context threaded through the tree walk.

/// Whether children are parsed as blocks or as inline runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Top level, table cells, macro bodies. Text runs are trimmed.
    Block,
    /// Paragraph and list item content. Text runs keep edge spaces and
    /// heading tags are not promoted.
    Inline,
}

/// Context passed down the tree walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseContext {
    /// Nesting depth of the node being parsed.
    pub depth: usize,

    /// Current parsing mode.
    pub mode: Mode,
}

impl ParseContext {
    /// Context for the children of the document root.
    #[must_use]
    pub fn root() -> Self {
        Self {
            depth: 0,
            mode: Mode::Block,
        }
    }

    /// Context one level deeper.
    #[must_use]
    pub fn descend(self) -> Self {
        Self {
            depth: self.depth + 1,
            ..self
        }
    }

    #[must_use]
    pub fn inline(self) -> Self {
        Self {
            mode: Mode::Inline,
            ..self
        }
    }

    #[must_use]
    pub fn block(self) -> Self {
        Self {
            mode: Mode::Block,
            ..self
        }
    }

    #[must_use]
    pub fn is_inline(&self) -> bool {
        self.mode == Mode::Inline
    }
}
