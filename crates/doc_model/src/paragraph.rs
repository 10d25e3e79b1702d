//! Paragraph - a text run with format ranges and positioned anchors
//!
//! The text buffer is immutable once set; format overrides, footnotes, and
//! field anchors are addressed by zero-based character offset and validated
//! against the current text length when added. Anchors live in sorted side
//! lists next to the text, never as markers embedded in the buffer.

use crate::charformat::{CharFormat, FormatRange};
use crate::container::{Capability, ContainerPolicy};
use crate::error::{DocModelError, Result};
use crate::field::{FieldAnchor, FieldKind};
use crate::footnote::Footnote;
use serde::{Deserialize, Serialize};

/// Text alignment options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// A maximal contiguous span of text sharing one resolved character format
#[derive(Debug, Clone, PartialEq)]
pub struct FormatRun {
    /// Start offset, inclusive
    pub start: usize,
    /// End offset, exclusive
    pub end: usize,
    /// The fully resolved format for every character in the span
    pub format: CharFormat,
}

/// A paragraph of formatted text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paragraph {
    text: String,
    /// Format applied to all text not covered by a range override
    pub default_format: CharFormat,
    ranges: Vec<FormatRange>,
    footnotes: Vec<Footnote>,
    fields: Vec<FieldAnchor>,
    pub alignment: Alignment,
    /// First-line indent in points
    pub first_line_indent: Option<f32>,
    /// Line spacing in points
    pub line_spacing: Option<f32>,
    start_new_page: bool,
    allow_footnote: bool,
    allow_control_word: bool,
    allow_page_break: bool,
}

impl Paragraph {
    /// Built by a container, inheriting its capability flags.
    pub(crate) fn with_capabilities(policy: ContainerPolicy) -> Self {
        Self {
            text: String::new(),
            default_format: CharFormat::new(),
            ranges: Vec::new(),
            footnotes: Vec::new(),
            fields: Vec::new(),
            alignment: Alignment::default(),
            first_line_indent: None,
            line_spacing: None,
            start_new_page: false,
            allow_footnote: policy.allow_footnote,
            allow_control_word: policy.allow_control_word,
            allow_page_break: policy.allow_page_break,
        }
    }

    /// Replace the paragraph text.
    ///
    /// Offsets of existing ranges and anchors would dangle against the new
    /// buffer, so they are cleared; set the text before adding overrides.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.ranges.clear();
        self.footnotes.clear();
        self.fields.clear();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text length in characters (offsets count chars, not bytes).
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether this paragraph forces a page break before itself.
    pub fn starts_new_page(&self) -> bool {
        self.start_new_page
    }

    /// Force (or clear) a page break before this paragraph.
    pub fn set_start_new_page(&mut self, start_new_page: bool) -> Result<()> {
        if start_new_page && !self.allow_page_break {
            return Err(DocModelError::CapabilityViolation(Capability::PageBreak));
        }
        self.start_new_page = start_new_page;
        Ok(())
    }

    /// Add a format override for `[start, end)` and return it for population.
    ///
    /// Ranges may overlap; at render time later ranges override earlier ones
    /// field-by-field.
    pub fn add_char_format(&mut self, start: usize, end: usize) -> Result<&mut CharFormat> {
        let range = FormatRange::new(start, end, self.char_len())?;
        let index = self.ranges.len();
        self.ranges.push(range);
        Ok(&mut self.ranges[index].format)
    }

    /// Range overrides in insertion order.
    pub fn ranges(&self) -> &[FormatRange] {
        &self.ranges
    }

    /// Anchor a footnote after the character at `offset`.
    pub fn add_footnote(&mut self, offset: usize) -> Result<&mut Footnote> {
        if !self.allow_footnote {
            return Err(DocModelError::CapabilityViolation(Capability::Footnote));
        }
        let len = self.char_len();
        if offset >= len {
            return Err(DocModelError::InvalidPosition { offset, len });
        }
        let index = self.footnotes.partition_point(|f| f.offset() <= offset);
        self.footnotes.insert(index, Footnote::new(offset));
        Ok(&mut self.footnotes[index])
    }

    /// Footnotes ordered by anchor offset.
    pub fn footnotes(&self) -> &[Footnote] {
        &self.footnotes
    }

    /// Anchor a control-word field after the character at `offset`.
    pub fn add_field(&mut self, offset: usize, kind: FieldKind) -> Result<()> {
        if !self.allow_control_word {
            return Err(DocModelError::CapabilityViolation(Capability::ControlWord));
        }
        let len = self.char_len();
        if offset >= len {
            return Err(DocModelError::InvalidPosition { offset, len });
        }
        let index = self.fields.partition_point(|f| f.offset() <= offset);
        self.fields.insert(index, FieldAnchor { offset, kind });
        Ok(())
    }

    /// Field anchors ordered by offset.
    pub fn fields(&self) -> &[FieldAnchor] {
        &self.fields
    }

    /// Resolve the effective format of the character at `offset`.
    ///
    /// Starts from the default format and layers every covering range in
    /// insertion order, field-by-field. Total over any offset; offsets past
    /// the text simply resolve to the default format.
    pub fn resolve_format_at(&self, offset: usize) -> CharFormat {
        self.ranges
            .iter()
            .filter(|r| r.contains(offset))
            .fold(self.default_format.clone(), |acc, r| acc.merge(&r.format))
    }

    /// Group the text into maximal runs of identical resolved format.
    pub fn runs(&self) -> Vec<FormatRun> {
        let len = self.char_len();
        let mut runs: Vec<FormatRun> = Vec::new();
        for offset in 0..len {
            let format = self.resolve_format_at(offset);
            match runs.last_mut() {
                Some(run) if run.format == format => run.end = offset + 1,
                _ => runs.push(FormatRun {
                    start: offset,
                    end: offset + 1,
                    format,
                }),
            }
        }
        runs
    }
}

// =============================================================================
// Tests
// =============================================================================
