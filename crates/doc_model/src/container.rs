//! Block containers - ordered owners of heterogeneous blocks
//!
//! A container is the only way blocks enter the tree. Its capability flags
//! are fixed at construction and checked on every add, so an illegal block
//! kind fails fast instead of surfacing as a corrupt document later.

use crate::error::{DocModelError, Result};
use crate::image::{Image, ImageData};
use crate::paragraph::Paragraph;
use crate::table::Table;
use serde::{Deserialize, Serialize};

// =============================================================================
// Capabilities
// =============================================================================

/// A block kind a container may accept or reject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Capability {
    Footnote,
    ControlWord,
    Image,
    Table,
    PageBreak,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Capability::Footnote => "footnotes",
            Capability::ControlWord => "control words",
            Capability::Image => "images",
            Capability::Table => "tables",
            Capability::PageBreak => "page breaks",
        };
        f.write_str(name)
    }
}

/// Capability flags fixed when a container is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerPolicy {
    pub allow_footnote: bool,
    pub allow_control_word: bool,
    pub allow_image: bool,
    pub allow_table: bool,
    pub allow_page_break: bool,
}

impl ContainerPolicy {
    /// Document body: everything allowed.
    pub fn body() -> Self {
        Self {
            allow_footnote: true,
            allow_control_word: true,
            allow_image: true,
            allow_table: true,
            allow_page_break: true,
        }
    }

    /// Page headers and footers: control words yes, footnotes and page
    /// breaks no.
    pub fn header_footer() -> Self {
        Self {
            allow_footnote: false,
            allow_control_word: true,
            allow_image: true,
            allow_table: true,
            allow_page_break: false,
        }
    }

    /// Footnote bodies: paragraphs and images only, no nesting.
    pub fn footnote() -> Self {
        Self {
            allow_footnote: false,
            allow_control_word: false,
            allow_image: true,
            allow_table: false,
            allow_page_break: false,
        }
    }

    /// Table cells: no footnotes, nested tables, or page breaks.
    pub fn table_cell() -> Self {
        Self {
            allow_footnote: false,
            allow_control_word: false,
            allow_image: true,
            allow_table: false,
            allow_page_break: false,
        }
    }
}

// =============================================================================
// Block
// =============================================================================

/// A renderable unit owned by a container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
    Image(Image),
}

// =============================================================================
// BlockContainer
// =============================================================================

/// Ordered sequence of blocks with capability enforcement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockContainer {
    policy: ContainerPolicy,
    blocks: Vec<Block>,
}

impl BlockContainer {
    pub fn new(policy: ContainerPolicy) -> Self {
        Self {
            policy,
            blocks: Vec::new(),
        }
    }

    pub fn policy(&self) -> ContainerPolicy {
        self.policy
    }

    /// Blocks in insertion order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Append an empty paragraph and return it for population.
    ///
    /// The paragraph inherits this container's footnote, control-word, and
    /// page-break capabilities.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.blocks
            .push(Block::Paragraph(Paragraph::with_capabilities(self.policy)));
        match self.blocks.last_mut() {
            Some(Block::Paragraph(p)) => p,
            _ => unreachable!("last block was just pushed as a paragraph"),
        }
    }

    /// Append a `rows` x `cols` table of the given total width.
    pub fn add_table(
        &mut self,
        rows: usize,
        cols: usize,
        width: f32,
        font_size: f32,
    ) -> Result<&mut Table> {
        if !self.policy.allow_table {
            return Err(DocModelError::CapabilityViolation(Capability::Table));
        }
        let table = Table::new(rows, cols, width, font_size)?;
        self.blocks.push(Block::Table(table));
        match self.blocks.last_mut() {
            Some(Block::Table(t)) => Ok(t),
            _ => unreachable!("last block was just pushed as a table"),
        }
    }

    /// Append an image block built from decoded image data.
    pub fn add_image(&mut self, data: ImageData) -> Result<&mut Image> {
        if !self.policy.allow_image {
            return Err(DocModelError::CapabilityViolation(Capability::Image));
        }
        self.blocks
            .push(Block::Image(Image::new(data, self.policy.allow_page_break)));
        match self.blocks.last_mut() {
            Some(Block::Image(i)) => Ok(i),
            _ => unreachable!("last block was just pushed as an image"),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
