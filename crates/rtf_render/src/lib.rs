//! Deterministic RTF serialization for `doc_model` trees
//!
//! The renderer walks a finished [`doc_model::Document`] and produces the
//! complete RTF source as a string: prolog, font and color tables, page
//! geometry, header/footer groups, then the body flow of paragraphs,
//! tables and images. Output is a pure function of the tree; rendering the
//! same document twice yields byte-identical markup.
//!
//! ```no_run
//! use doc_model::{Document, Lcid, PaperOrientation, PaperSize};
//!
//! let mut doc = Document::new(PaperSize::A4, PaperOrientation::Portrait, Lcid::English);
//! doc.add_paragraph().set_text("Hello, world");
//! let rtf = rtf_render::render(&doc)?;
//! # Ok::<(), rtf_render::RenderError>(())
//! ```

mod blocks;
mod charstate;
mod document;
mod emitter;
mod error;
mod escape;
mod image;
mod paragraph;
mod table;

pub use document::{render, save};
pub use error::{RenderError, Result};
pub use escape::{escape, escape_into};
