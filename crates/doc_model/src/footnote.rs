//! Footnotes - anchored nested containers
//!
//! A footnote is owned by exactly one paragraph and anchored at a character
//! offset of that paragraph's text. Its body is a nested [`BlockContainer`]
//! with the footnote capability policy (no further footnotes, control words,
//! or tables). Numbering is not stored here: the renderer assigns numbers in
//! document order on every render.

use crate::container::{BlockContainer, ContainerPolicy};
use crate::paragraph::Paragraph;
use serde::{Deserialize, Serialize};

/// A footnote anchored inside a paragraph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Footnote {
    offset: usize,
    content: BlockContainer,
}

impl Footnote {
    /// Built only by [`Paragraph::add_footnote`], which validates the offset.
    pub(crate) fn new(offset: usize) -> Self {
        Self {
            offset,
            content: BlockContainer::new(ContainerPolicy::footnote()),
        }
    }

    /// Offset of the character the footnote marker follows.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn container(&self) -> &BlockContainer {
        &self.content
    }

    pub fn container_mut(&mut self) -> &mut BlockContainer {
        &mut self.content
    }

    /// Convenience shortcut into the footnote body.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.content.add_paragraph()
    }
}
