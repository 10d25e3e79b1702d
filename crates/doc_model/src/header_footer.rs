//! Page headers and footers
//!
//! A header or footer is a block container with the header/footer capability
//! policy: paragraphs, tables, images, and control-word fields, but no
//! footnotes and no page breaks.

use crate::container::{BlockContainer, ContainerPolicy};
use crate::paragraph::Paragraph;
use serde::{Deserialize, Serialize};

/// Whether the container renders above or below the page body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeaderFooterKind {
    Header,
    Footer,
}

/// A per-page header or footer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderFooter {
    kind: HeaderFooterKind,
    content: BlockContainer,
}

impl HeaderFooter {
    pub(crate) fn new(kind: HeaderFooterKind) -> Self {
        Self {
            kind,
            content: BlockContainer::new(ContainerPolicy::header_footer()),
        }
    }

    pub fn kind(&self) -> HeaderFooterKind {
        self.kind
    }

    pub fn container(&self) -> &BlockContainer {
        &self.content
    }

    pub fn container_mut(&mut self) -> &mut BlockContainer {
        &mut self.content
    }

    /// Convenience shortcut into the content.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.content.add_paragraph()
    }
}
