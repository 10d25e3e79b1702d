//! Resolved character state and minimal-diff control emission
//!
//! A paragraph group starts from the document base state (default font,
//! 12pt, every flag off). Each format run is lowered to a fully-populated
//! [`CharState`]; only the fields that differ from the previously emitted
//! state produce control words, with explicit off-switches so a later run
//! can drop a flag an earlier run turned on.

use crate::emitter::Emitter;
use doc_model::units::points_to_half_points;
use doc_model::CharFormat;

/// Document default font size in points when no format sets one.
pub(crate) const DEFAULT_FONT_SIZE: f32 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Script {
    Normal,
    Superscript,
    Subscript,
}

/// Emission-ready character state with every field populated
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CharState {
    pub font: usize,
    pub ansi_font: Option<usize>,
    pub half_point_size: i32,
    pub fg_color: Option<usize>,
    pub bg_color: Option<usize>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub script: Script,
    pub small_caps: bool,
}

impl CharState {
    /// The state in force at the top of a fresh paragraph group.
    pub fn base() -> Self {
        Self {
            font: 0,
            ansi_font: None,
            half_point_size: points_to_half_points(DEFAULT_FONT_SIZE),
            fg_color: None,
            bg_color: None,
            bold: false,
            italic: false,
            underline: false,
            strikethrough: false,
            script: Script::Normal,
            small_caps: false,
        }
    }

    /// Lower a resolved format to a fully-populated state.
    pub fn from_format(format: &CharFormat) -> Self {
        let script = if format.superscript == Some(true) {
            Script::Superscript
        } else if format.subscript == Some(true) {
            Script::Subscript
        } else {
            Script::Normal
        };
        Self {
            font: format.font.map(|f| f.index()).unwrap_or(0),
            ansi_font: format.ansi_font.map(|f| f.index()),
            half_point_size: points_to_half_points(format.font_size.unwrap_or(DEFAULT_FONT_SIZE)),
            fg_color: format.fg_color.map(|c| c.index()),
            bg_color: format.bg_color.map(|c| c.index()),
            bold: format.bold.unwrap_or(false),
            italic: format.italic.unwrap_or(false),
            underline: format.underline.unwrap_or(false),
            strikethrough: format.strikethrough.unwrap_or(false),
            script,
            small_caps: format.small_caps.unwrap_or(false),
        }
    }
}

/// Emit control words for every field of `next` that differs from `prev`.
pub(crate) fn emit_diff(e: &mut Emitter, prev: &CharState, next: &CharState) {
    if next.font != prev.font {
        e.control_value("f", next.font as i32);
    }
    if next.ansi_font != prev.ansi_font {
        // Dropping the association falls back to the primary font
        let assoc = next.ansi_font.unwrap_or(next.font);
        e.control_value("af", assoc as i32);
    }
    if next.half_point_size != prev.half_point_size {
        e.control_value("fs", next.half_point_size);
    }
    if next.fg_color != prev.fg_color {
        // Color table index 0 is the automatic color
        e.control_value("cf", next.fg_color.map(|i| i as i32 + 1).unwrap_or(0));
    }
    if next.bg_color != prev.bg_color {
        e.control_value("chcbpat", next.bg_color.map(|i| i as i32 + 1).unwrap_or(0));
    }
    if next.bold != prev.bold {
        e.control(if next.bold { "b" } else { "b0" });
    }
    if next.italic != prev.italic {
        e.control(if next.italic { "i" } else { "i0" });
    }
    if next.underline != prev.underline {
        e.control(if next.underline { "ul" } else { "ulnone" });
    }
    if next.strikethrough != prev.strikethrough {
        e.control(if next.strikethrough { "strike" } else { "strike0" });
    }
    if next.script != prev.script {
        e.control(match next.script {
            Script::Superscript => "super",
            Script::Subscript => "sub",
            Script::Normal => "nosupersub",
        });
    }
    if next.small_caps != prev.small_caps {
        e.control(if next.small_caps { "scaps" } else { "scaps0" });
    }
}

// =============================================================================
// Tests
// =============================================================================
