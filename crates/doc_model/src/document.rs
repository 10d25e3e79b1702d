//! Document root - page geometry, reference tables, and the body container
//!
//! The document exclusively owns its font and color tables; every
//! [`FontRef`]/[`ColorRef`] reachable from the tree was handed out by
//! `create_font`/`create_color`, so formats can only reference registered
//! descriptors. Tables are append-only for the document's lifetime.

use crate::container::{BlockContainer, ContainerPolicy};
use crate::error::Result;
use crate::header_footer::{HeaderFooter, HeaderFooterKind};
use crate::image::{Image, ImageData};
use crate::paragraph::Paragraph;
use crate::reftable::{Color, ColorRef, FontName, FontRef, ReferenceTable};
use crate::table::Table;
use crate::units::{Lcid, Margins, PaperOrientation, PaperSize};
use serde::{Deserialize, Serialize};

/// Font registered for text with no explicit font, the `\deff0` target.
pub const DEFAULT_FONT: &str = "Times New Roman";

/// The root of a document tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub paper_size: PaperSize,
    pub orientation: PaperOrientation,
    pub language: Lcid,
    /// Page margins in points
    pub margins: Margins,
    fonts: ReferenceTable<FontName>,
    colors: ReferenceTable<Color>,
    header: Option<HeaderFooter>,
    footer: Option<HeaderFooter>,
    body: BlockContainer,
}

impl Document {
    /// Create an empty document with the given page setup.
    pub fn new(paper_size: PaperSize, orientation: PaperOrientation, language: Lcid) -> Self {
        let mut fonts = ReferenceTable::new();
        fonts.register(FontName::new(DEFAULT_FONT));
        Self {
            paper_size,
            orientation,
            language,
            margins: Margins::default(),
            fonts,
            colors: ReferenceTable::new(),
            header: None,
            footer: None,
            body: BlockContainer::new(ContainerPolicy::body()),
        }
    }

    // -------------------------------------------------------------------------
    // Reference tables
    // -------------------------------------------------------------------------

    /// Register a font by family name, deduplicated by name.
    pub fn create_font(&mut self, name: impl Into<String>) -> FontRef {
        FontRef(self.fonts.register(FontName::new(name)))
    }

    /// Register a color, deduplicated by RGB value.
    pub fn create_color(&mut self, color: Color) -> ColorRef {
        ColorRef(self.colors.register(color))
    }

    /// The font table in declaration order.
    pub fn fonts(&self) -> &ReferenceTable<FontName> {
        &self.fonts
    }

    /// The color table in declaration order.
    pub fn colors(&self) -> &ReferenceTable<Color> {
        &self.colors
    }

    // -------------------------------------------------------------------------
    // Containers
    // -------------------------------------------------------------------------

    pub fn body(&self) -> &BlockContainer {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut BlockContainer {
        &mut self.body
    }

    pub fn header(&self) -> Option<&HeaderFooter> {
        self.header.as_ref()
    }

    pub fn footer(&self) -> Option<&HeaderFooter> {
        self.footer.as_ref()
    }

    /// The page header, created on first access.
    pub fn header_mut(&mut self) -> &mut HeaderFooter {
        self.header
            .get_or_insert_with(|| HeaderFooter::new(HeaderFooterKind::Header))
    }

    /// The page footer, created on first access.
    pub fn footer_mut(&mut self) -> &mut HeaderFooter {
        self.footer
            .get_or_insert_with(|| HeaderFooter::new(HeaderFooterKind::Footer))
    }

    // -------------------------------------------------------------------------
    // Body conveniences
    // -------------------------------------------------------------------------

    /// Append a paragraph to the body.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.body.add_paragraph()
    }

    /// Append a table to the body.
    pub fn add_table(
        &mut self,
        rows: usize,
        cols: usize,
        width: f32,
        font_size: f32,
    ) -> Result<&mut Table> {
        self.body.add_table(rows, cols, width, font_size)
    }

    /// Append an image to the body.
    pub fn add_image(&mut self, data: ImageData) -> Result<&mut Image> {
        self.body.add_image(data)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> Document {
        Document::new(PaperSize::A4, PaperOrientation::Landscape, Lcid::English)
    }

    #[test]
    fn test_default_font_is_index_zero() {
        let mut doc = document();
        assert_eq!(doc.fonts().len(), 1);
        assert_eq!(doc.create_font(DEFAULT_FONT).index(), 0);
        assert_eq!(doc.create_font("Courier New").index(), 1);
    }

    #[test]
    fn test_color_registration_dedups() {
        let mut doc = document();
        let red = doc.create_color(Color::new(255, 0, 0));
        let blue = doc.create_color(Color::from_hex("0000ff").unwrap());
        let red_again = doc.create_color(Color::from_hex("ff0000").unwrap());
        assert_eq!(red, red_again);
        assert_ne!(red, blue);
        assert_eq!(doc.colors().len(), 2);
    }

    #[test]
    fn test_header_created_lazily() {
        let mut doc = document();
        assert!(doc.header().is_none());
        doc.header_mut().add_paragraph().set_text("top of page");
        assert_eq!(doc.header().unwrap().container().len(), 1);
        assert!(doc.footer().is_none());
    }

    #[test]
    fn test_model_serde_round_trip() {
        let mut doc = document();
        let red = doc.create_color(Color::new(255, 0, 0));
        let par = doc.add_paragraph();
        par.set_text("Hello");
        par.add_char_format(1, 3).unwrap().fg_color = Some(red);
        par.add_footnote(2).unwrap().add_paragraph().set_text("note");
        doc.add_table(2, 2, 200.0, 12.0).unwrap().merge(0, 0, 2, 1).unwrap();

        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back.fonts(), doc.fonts());
        assert_eq!(back.colors(), doc.colors());
        assert_eq!(back.body().len(), doc.body().len());
    }
}
