//! Error types for rendering
//!
//! Everything checkable at construction time is rejected by `doc_model`
//! before it reaches the renderer; errors here are reserved for render-only
//! invariants and the `save` convenience I/O.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// A render path opened and closed groups unevenly. Unreachable through
    /// the public API; hitting it indicates a renderer bug, not a bad tree.
    #[error("unbalanced group nesting: {open} group(s) left open")]
    UnbalancedGroup { open: usize },

    /// Failure writing the rendered document in [`crate::save`].
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
