//! Error types for document model operations
//!
//! Every mutation that can violate a structural invariant fails here, at the
//! call site, and leaves the tree unchanged. Render-time errors live in the
//! `rtf_render` crate.

use crate::container::Capability;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocModelError {
    /// A format range with `start >= end` or `end` past the end of the text.
    #[error("invalid format range [{start}, {end}) for text of length {len}")]
    InvalidRange {
        start: usize,
        end: usize,
        len: usize,
    },

    /// An anchor offset outside `[0, len)` of the host paragraph's text.
    #[error("invalid anchor position {offset} (text length {len})")]
    InvalidPosition { offset: usize, len: usize },

    /// Non-positive table dimensions or a malformed value descriptor.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// A block kind the target container was built to reject.
    #[error("container does not allow {0}")]
    CapabilityViolation(Capability),

    /// A cell address outside the table grid.
    #[error("cell ({row}, {col}) out of bounds for {rows}x{cols} table")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A merge rectangle that extends past the table grid.
    #[error("merge of {row_span}x{col_span} at ({row}, {col}) exceeds {rows}x{cols} table")]
    MergeOutOfBounds {
        row: usize,
        col: usize,
        row_span: usize,
        col_span: usize,
        rows: usize,
        cols: usize,
    },

    /// A merge target already absorbed by an earlier merge.
    #[error("cell ({row}, {col}) is already covered by a merge")]
    CellAlreadyCovered { row: usize, col: usize },

    /// A merge target that is itself the anchor of an earlier merge.
    #[error("cell ({row}, {col}) is already the anchor of a merge")]
    CellAlreadyMerged { row: usize, col: usize },

    /// Content access through a covered cell; content lives on the anchor.
    #[error("cell ({row}, {col}) is covered; its content belongs to ({primary_row}, {primary_col})")]
    CellCovered {
        row: usize,
        col: usize,
        primary_row: usize,
        primary_col: usize,
    },
}

pub type Result<T> = std::result::Result<T, DocModelError>;
