//! Field anchors - control words substituted by the consuming viewer
//!
//! A field is a purely textual marker (page number, page count, date, time)
//! attached to a paragraph by character offset. It owns no content; the
//! viewer computes the value when the document is displayed.

use serde::{Deserialize, Serialize};

/// Kinds of dynamic field the writer can anchor in text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Current page number
    Page,
    /// Total number of pages
    NumPages,
    /// Current date
    Date,
    /// Current time
    Time,
}

impl FieldKind {
    /// The field instruction emitted inside `{\*\fldinst ...}`.
    pub fn instruction(&self) -> &'static str {
        match self {
            FieldKind::Page => "PAGE",
            FieldKind::NumPages => "NUMPAGES",
            FieldKind::Date => "DATE",
            FieldKind::Time => "TIME",
        }
    }
}

/// A field anchored at a character offset of its host paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldAnchor {
    pub(crate) offset: usize,
    pub kind: FieldKind,
}

impl FieldAnchor {
    /// Offset of the character the field follows.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_instructions() {
        assert_eq!(FieldKind::Page.instruction(), "PAGE");
        assert_eq!(FieldKind::NumPages.instruction(), "NUMPAGES");
        assert_eq!(FieldKind::Date.instruction(), "DATE");
        assert_eq!(FieldKind::Time.instruction(), "TIME");
    }
}
