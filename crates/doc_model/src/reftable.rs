//! Reference tables - append-only deduplicating registries
//!
//! RTF refers to fonts and colors by index into declaration tables emitted in
//! the document preamble. The model assigns those indices at registration
//! time: identical descriptors collapse to one entry, index order is
//! first-seen order, and nothing is ever removed within a document's
//! lifetime.

use crate::error::{DocModelError, Result};
use serde::{Deserialize, Serialize};

// =============================================================================
// ReferenceTable
// =============================================================================

/// Deduplicating descriptor-to-index registry.
///
/// Tables stay small (a handful of fonts and colors per document), so lookup
/// is a linear scan over the entry list; this also keeps the serialized form
/// a plain ordered list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTable<T> {
    entries: Vec<T>,
}

impl<T: PartialEq + Clone> ReferenceTable<T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a descriptor, returning its stable index.
    ///
    /// Registering a value equal to an existing entry returns the existing
    /// index; otherwise the value is appended and assigned the next index.
    pub fn register(&mut self, value: T) -> usize {
        if let Some(index) = self.entries.iter().position(|e| *e == value) {
            return index;
        }
        self.entries.push(value);
        self.entries.len() - 1
    }

    /// Look up the index of a previously registered descriptor.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.entries.iter().position(|e| e == value)
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// Number of distinct descriptors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Font descriptors
// =============================================================================

/// A font family name registered in the document font table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontName(pub String);

impl FontName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Handle into the document font table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontRef(pub(crate) usize);

impl FontRef {
    /// The font table index, the `N` of `\fN`.
    pub fn index(&self) -> usize {
        self.0
    }
}

// =============================================================================
// Color descriptors
// =============================================================================

/// An RGB color registered in the document color table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6-digit hex string such as `"76923C"`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DocModelError::InvalidDimensions(format!(
                "malformed hex color {hex:?}, expected 6 hex digits"
            )));
        }
        // Length and digit checks above make these infallible
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Ok(Self { r, g, b })
    }
}

/// Handle into the document color table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorRef(pub(crate) usize);

impl ColorRef {
    /// The zero-based color table index.
    ///
    /// The RTF color table reserves slot 0 for the automatic color, so the
    /// renderer emits `index() + 1` after `\cf` and friends.
    pub fn index(&self) -> usize {
        self.0
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_register_assigns_sequential_indices() {
        let mut table = ReferenceTable::new();
        assert_eq!(table.register(FontName::new("Times New Roman")), 0);
        assert_eq!(table.register(FontName::new("Courier New")), 1);
        assert_eq!(table.register(FontName::new("Arial")), 2);
    }

    #[test]
    fn test_register_deduplicates_by_value() {
        let mut table = ReferenceTable::new();
        let first = table.register(Color::new(255, 0, 0));
        table.register(Color::new(0, 0, 255));
        let again = table.register(Color::new(255, 0, 0));
        assert_eq!(first, again);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_entries_keep_first_seen_order() {
        let mut table = ReferenceTable::new();
        table.register(FontName::new("B"));
        table.register(FontName::new("A"));
        table.register(FontName::new("B"));
        let names: Vec<&str> = table.entries().iter().map(|f| f.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("ff0000").unwrap(), Color::new(255, 0, 0));
        assert_eq!(Color::from_hex("76923C").unwrap(), Color::new(0x76, 0x92, 0x3C));
        assert!(Color::from_hex("fff").is_err());
        assert!(Color::from_hex("zzzzzz").is_err());
    }

    proptest! {
        #[test]
        fn prop_equal_descriptors_share_an_index(
            colors in proptest::collection::vec((any::<u8>(), any::<u8>(), any::<u8>()), 1..40)
        ) {
            let mut table = ReferenceTable::new();
            let mut assigned = Vec::new();
            for (r, g, b) in &colors {
                assigned.push(table.register(Color::new(*r, *g, *b)));
            }
            for ((r, g, b), index) in colors.iter().zip(&assigned) {
                prop_assert_eq!(table.register(Color::new(*r, *g, *b)), *index);
            }
            // Index space is dense and bounded by the number of distinct values
            prop_assert!(table.len() <= colors.len());
            for index in assigned {
                prop_assert!(index < table.len());
            }
        }
    }
}
