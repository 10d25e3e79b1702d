//! Character formatting - fonts, colors, style flags, and range overrides
//!
//! Every field is optional so formats can be layered: a paragraph's default
//! format is merged with each range override field-by-field, later ranges
//! winning only for the fields they actually set.

use crate::error::{DocModelError, Result};
use crate::reftable::{ColorRef, FontRef};
use serde::{Deserialize, Serialize};

// =============================================================================
// Two-in-one bracket styles
// =============================================================================

/// Bracket style for side-by-side ("two in one") Far East text layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TwoInOneStyle {
    NoBracket,
    Parentheses,
    SquareBrackets,
    AngledBrackets,
    Braces,
}

impl TwoInOneStyle {
    /// The digit appended to `\twoinone`.
    pub fn code(&self) -> u8 {
        match self {
            TwoInOneStyle::NoBracket => 0,
            TwoInOneStyle::Parentheses => 1,
            TwoInOneStyle::SquareBrackets => 2,
            TwoInOneStyle::AngledBrackets => 3,
            TwoInOneStyle::Braces => 4,
        }
    }
}

// =============================================================================
// CharFormat
// =============================================================================

/// Character formatting properties
///
/// `font` is the primary font; `ansi_font`, when set, is used for runs of
/// text inside the 7-bit range while `font` covers the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharFormat {
    /// Primary font reference
    pub font: Option<FontRef>,
    /// Fallback font for ANSI text when the primary font targets another script
    pub ansi_font: Option<FontRef>,
    /// Font size in points
    pub font_size: Option<f32>,
    /// Foreground (text) color
    pub fg_color: Option<ColorRef>,
    /// Background (highlight) color
    pub bg_color: Option<ColorRef>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub strikethrough: Option<bool>,
    pub superscript: Option<bool>,
    pub subscript: Option<bool>,
    pub small_caps: Option<bool>,
    /// Side-by-side bracket style for Far East text
    pub two_in_one: Option<TwoInOneStyle>,
    /// Bookmark name attached to the formatted range
    pub bookmark: Option<String>,
    /// Name of a bookmark this range links to
    pub local_hyperlink: Option<String>,
    /// Tooltip shown for the hyperlink
    pub hyperlink_tip: Option<String>,
}

impl CharFormat {
    /// Create an empty format (every field unset).
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `other` on top of this format.
    ///
    /// Fields set in `other` override the corresponding fields here;
    /// unset fields keep their current value.
    pub fn merge(&self, other: &CharFormat) -> CharFormat {
        CharFormat {
            font: other.font.or(self.font),
            ansi_font: other.ansi_font.or(self.ansi_font),
            font_size: other.font_size.or(self.font_size),
            fg_color: other.fg_color.or(self.fg_color),
            bg_color: other.bg_color.or(self.bg_color),
            bold: other.bold.or(self.bold),
            italic: other.italic.or(self.italic),
            underline: other.underline.or(self.underline),
            strikethrough: other.strikethrough.or(self.strikethrough),
            superscript: other.superscript.or(self.superscript),
            subscript: other.subscript.or(self.subscript),
            small_caps: other.small_caps.or(self.small_caps),
            two_in_one: other.two_in_one.or(self.two_in_one),
            bookmark: other.bookmark.clone().or_else(|| self.bookmark.clone()),
            local_hyperlink: other
                .local_hyperlink
                .clone()
                .or_else(|| self.local_hyperlink.clone()),
            hyperlink_tip: other
                .hyperlink_tip
                .clone()
                .or_else(|| self.hyperlink_tip.clone()),
        }
    }

    /// Set the primary font.
    pub fn with_font(mut self, font: FontRef) -> Self {
        self.font = Some(font);
        self
    }

    /// Set the font size in points.
    pub fn with_font_size(mut self, points: f32) -> Self {
        self.font_size = Some(points);
        self
    }

    /// Set the foreground color.
    pub fn with_fg_color(mut self, color: ColorRef) -> Self {
        self.fg_color = Some(color);
        self
    }

    /// Set the background color.
    pub fn with_bg_color(mut self, color: ColorRef) -> Self {
        self.bg_color = Some(color);
        self
    }

    /// Set the bold flag.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Set the italic flag.
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    /// Set the underline flag.
    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = Some(underline);
        self
    }
}

// =============================================================================
// FormatRange
// =============================================================================

/// A character format applied to `[start, end)` of a paragraph's text
///
/// Offsets are zero-based character indices. Ranges may overlap; resolution
/// applies them in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatRange {
    start: usize,
    end: usize,
    pub format: CharFormat,
}

impl FormatRange {
    /// Create a validated range; fails unless `start < end <= text_len`.
    pub(crate) fn new(start: usize, end: usize, text_len: usize) -> Result<Self> {
        if start >= end || end > text_len {
            return Err(DocModelError::InvalidRange {
                start,
                end,
                len: text_len,
            });
        }
        Ok(Self {
            start,
            end,
            format: CharFormat::new(),
        })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Whether the range covers the character at `offset`.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }
}

// =============================================================================
// Tests
// =============================================================================
