//! Document Model - the RTF writer's in-memory document tree
//!
//! This crate provides the document object model: a root [`Document`] owning
//! page geometry, deduplicating font/color reference tables, optional
//! header/footer containers, and a body of blocks (paragraphs, tables,
//! images). Mutations validate structural invariants at the call site;
//! serialization to RTF text lives in the `rtf_render` crate.

mod charformat;
mod container;
mod document;
mod error;
mod field;
mod footnote;
mod header_footer;
mod image;
mod paragraph;
mod reftable;
pub mod table;
pub mod units;

pub use charformat::*;
pub use container::*;
pub use document::*;
pub use error::*;
pub use field::*;
pub use footnote::*;
pub use header_footer::*;
pub use image::*;
pub use paragraph::*;
pub use reftable::*;
pub use table::{Border, BorderStyle, Cell, CellBorders, Table, TableCell};
pub use units::{Direction, Lcid, Margins, PaperOrientation, PaperSize};
