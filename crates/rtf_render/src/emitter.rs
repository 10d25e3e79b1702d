//! Group-balanced output emitter
//!
//! All RTF text flows through this writer. It tracks group nesting depth so
//! an unbalanced render path is caught at `finish()` instead of shipping a
//! document that corrupts the consumer's parse state.

use crate::error::{RenderError, Result};
use crate::escape::escape_into;
use std::fmt::Write;

#[derive(Debug, Default)]
pub(crate) struct Emitter {
    out: String,
    depth: usize,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a `{` group.
    pub fn open_group(&mut self) {
        self.out.push('{');
        self.depth += 1;
    }

    /// Close the innermost group.
    pub fn close_group(&mut self) -> Result<()> {
        if self.depth == 0 {
            return Err(RenderError::UnbalancedGroup { open: 0 });
        }
        self.out.push('}');
        self.depth -= 1;
        Ok(())
    }

    /// Emit a control word: `\word`.
    pub fn control(&mut self, word: &str) {
        self.out.push('\\');
        self.out.push_str(word);
    }

    /// Emit a control word with a numeric parameter: `\wordN`.
    pub fn control_value(&mut self, word: &str, value: i32) {
        // Infallible: writing to a String
        let _ = write!(self.out, "\\{word}{value}");
    }

    /// Emit pre-escaped output verbatim.
    pub fn raw(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Emit document text, escaped.
    ///
    /// A space is inserted first when the output currently ends in a control
    /// word or its numeric parameter, so the text cannot be swallowed as
    /// part of it.
    pub fn text(&mut self, text: &str) {
        if self
            .out
            .ends_with(|c: char| c.is_ascii_alphanumeric() || c == '-')
        {
            self.out.push(' ');
        }
        escape_into(text, &mut self.out);
    }

    pub fn newline(&mut self) {
        self.out.push('\n');
    }

    /// Consume the emitter; fails unless every opened group was closed.
    pub fn finish(self) -> Result<String> {
        if self.depth != 0 {
            return Err(RenderError::UnbalancedGroup { open: self.depth });
        }
        Ok(self.out)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_output() {
        let mut e = Emitter::new();
        e.open_group();
        e.control("rtf1");
        e.text("hi");
        e.close_group().unwrap();
        assert_eq!(e.finish().unwrap(), "{\\rtf1 hi}");
    }

    #[test]
    fn test_unclosed_group_fails() {
        let mut e = Emitter::new();
        e.open_group();
        e.open_group();
        e.close_group().unwrap();
        assert!(matches!(
            e.finish(),
            Err(RenderError::UnbalancedGroup { open: 1 })
        ));
    }

    #[test]
    fn test_extra_close_fails() {
        let mut e = Emitter::new();
        assert!(e.close_group().is_err());
    }

    #[test]
    fn test_text_delimits_after_control_words() {
        let mut e = Emitter::new();
        e.control_value("fs", 24);
        e.text("size");
        e.open_group();
        e.text("no delimiter after a brace");
        e.close_group().unwrap();
        assert_eq!(
            e.finish().unwrap(),
            "\\fs24 size{no delimiter after a brace}"
        );
    }
}
