//! Text escaping and encoding
//!
//! Reserved structural characters are escaped and every code point outside
//! the printable 7-bit range is emitted as a signed 16-bit `\uN?` escape
//! (surrogate pairs for astral characters), so the output is valid in any
//! byte encoding a consumer assumes. The same routine covers paragraph text,
//! table cells, headers/footers, and hyperlink tooltips.

use std::fmt::Write;

/// Escape `text` and append it to `out`.
pub fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '\\' => out.push_str(r"\\"),
            '{' => out.push_str(r"\{"),
            '}' => out.push_str(r"\}"),
            '\n' => out.push_str("\\line "),
            '\t' => out.push_str("\\tab "),
            '\r' => {}
            c if (' '..='\u{7e}').contains(&c) => out.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    // Infallible: writing to a String
                    let _ = write!(out, "\\u{}?", *unit as i16);
                }
            }
        }
    }
}

/// Escape `text` into a fresh string.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(text, &mut out);
    out
}

// =============================================================================
// Tests
// =============================================================================
