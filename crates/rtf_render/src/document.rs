//! Whole-document rendering: prolog, reference tables, page geometry,
//! header/footer groups and the body flow
//!
//! Rendering is a pure function of the document tree. The same tree always
//! produces byte-identical output, so generated files diff cleanly.

use std::path::Path;

use doc_model::units::{paper_dimensions, points_to_twips};
use doc_model::{Direction, Document, HeaderFooter, HeaderFooterKind, PaperOrientation};

use crate::blocks::{render_container, RenderCtx};
use crate::emitter::Emitter;
use crate::error::Result;

/// Render a document to RTF markup.
pub fn render(doc: &Document) -> Result<String> {
    let mut e = Emitter::new();
    let mut ctx = RenderCtx::new();

    e.open_group();
    render_prolog(&mut e, doc)?;
    render_page_geometry(&mut e, doc);
    if let Some(header) = doc.header() {
        render_header_footer(&mut e, header, &mut ctx)?;
    }
    if let Some(footer) = doc.footer() {
        render_header_footer(&mut e, footer, &mut ctx)?;
    }
    render_container(&mut e, doc.body(), &mut ctx, false)?;
    e.close_group()?;

    tracing::debug!(
        fonts = doc.fonts().len(),
        colors = doc.colors().len(),
        blocks = doc.body().len(),
        footnotes = ctx.footnote_seq,
        "document rendered"
    );
    e.finish()
}

/// Render a document and write it to `path`.
pub fn save(doc: &Document, path: impl AsRef<Path>) -> Result<()> {
    let output = render(doc)?;
    std::fs::write(path.as_ref(), output)?;
    tracing::debug!(path = %path.as_ref().display(), "document saved");
    Ok(())
}

fn render_prolog(e: &mut Emitter, doc: &Document) -> Result<()> {
    e.control("rtf1");
    e.control("ansi");
    e.control_value("ansicpg", 1252);
    e.control_value("deff", 0);
    e.control_value("deflang", doc.language.code() as i32);
    e.newline();

    e.open_group();
    e.control("fonttbl");
    for (index, font) in doc.fonts().entries().iter().enumerate() {
        e.open_group();
        e.control_value("f", index as i32);
        e.control("fnil");
        e.text(font.as_str());
        e.raw(";");
        e.close_group()?;
    }
    e.close_group()?;
    e.newline();

    if !doc.colors().is_empty() {
        e.open_group();
        e.control("colortbl");
        // the leading ';' is the automatic color, entry 0
        e.raw(";");
        for color in doc.colors().entries() {
            e.control_value("red", i32::from(color.r));
            e.control_value("green", i32::from(color.g));
            e.control_value("blue", i32::from(color.b));
            e.raw(";");
        }
        e.close_group()?;
        e.newline();
    }
    Ok(())
}

fn render_page_geometry(e: &mut Emitter, doc: &Document) {
    let (width, height) = paper_dimensions(doc.paper_size, doc.orientation);
    e.control_value("paperw", width);
    e.control_value("paperh", height);
    e.control_value("margl", points_to_twips(doc.margins[Direction::Left]));
    e.control_value("margr", points_to_twips(doc.margins[Direction::Right]));
    e.control_value("margt", points_to_twips(doc.margins[Direction::Top]));
    e.control_value("margb", points_to_twips(doc.margins[Direction::Bottom]));
    if doc.orientation == PaperOrientation::Landscape {
        e.control("landscape");
    }
    e.newline();
}

fn render_header_footer(
    e: &mut Emitter,
    hf: &HeaderFooter,
    ctx: &mut RenderCtx,
) -> Result<()> {
    e.open_group();
    e.control(match hf.kind() {
        HeaderFooterKind::Header => "header",
        HeaderFooterKind::Footer => "footer",
    });
    e.newline();
    render_container(e, hf.container(), ctx, false)?;
    e.close_group()?;
    e.newline();
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::{Color, Lcid, Margins, PaperOrientation, PaperSize};

    fn empty_doc() -> Document {
        Document::new(PaperSize::A4, PaperOrientation::Portrait, Lcid::English)
    }

    #[test]
    fn test_prolog_and_default_font() {
        let out = render(&empty_doc()).unwrap();
        assert!(out.starts_with("{\\rtf1\\ansi\\ansicpg1252\\deff0\\deflang1033"));
        assert!(out.contains("{\\fonttbl{\\f0\\fnil Times New Roman;}}"));
        // no colors registered, no color table
        assert!(!out.contains("\\colortbl"));
    }

    #[test]
    fn test_color_table_leads_with_automatic_entry() {
        let mut doc = empty_doc();
        doc.create_color(Color::new(255, 0, 0));
        doc.create_color(Color::new(0, 0, 255));
        let out = render(&doc).unwrap();
        assert!(out
            .contains("{\\colortbl;\\red255\\green0\\blue0;\\red0\\green0\\blue255;}"));
    }

    #[test]
    fn test_page_geometry_portrait_a4() {
        let mut doc = empty_doc();
        doc.margins = Margins::uniform(36.0);
        let out = render(&doc).unwrap();
        assert!(out.contains("\\paperw11906\\paperh16838"));
        assert!(out.contains("\\margl720\\margr720\\margt720\\margb720"));
        assert!(!out.contains("\\landscape"));
    }

    #[test]
    fn test_landscape_swaps_paper_dimensions() {
        let doc = Document::new(PaperSize::A4, PaperOrientation::Landscape, Lcid::English);
        let out = render(&doc).unwrap();
        assert!(out.contains("\\paperw16838\\paperh11906\\"));
        assert!(out.contains("\\landscape"));
    }

    #[test]
    fn test_header_and_footer_groups() {
        let mut doc = empty_doc();
        doc.header_mut().add_paragraph().set_text("running head");
        doc.footer_mut().add_paragraph().set_text("running foot");
        let out = render(&doc).unwrap();
        let header = out.find("{\\header").unwrap();
        let footer = out.find("{\\footer").unwrap();
        assert!(header < footer);
        assert!(out.contains("running head"));
        assert!(out.contains("running foot"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut doc = empty_doc();
        doc.create_color(Color::new(1, 2, 3));
        let p = doc.add_paragraph();
        p.set_text("stable output");
        assert_eq!(render(&doc).unwrap(), render(&doc).unwrap());
    }

    #[test]
    fn test_output_is_brace_balanced() {
        let mut doc = empty_doc();
        doc.header_mut().add_paragraph().set_text("h");
        let p = doc.add_paragraph();
        p.set_text("body text");
        p.add_char_format(0, 4).unwrap().bold = Some(true);
        let out = render(&doc).unwrap();
        let mut depth: i64 = 0;
        let mut chars = out.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => {
                    // skip the escaped character so \{ and \} are not counted
                    chars.next();
                }
                '{' => depth += 1,
                '}' => depth -= 1,
                _ => {}
            }
            assert!(depth >= 0);
        }
        assert_eq!(depth, 0);
    }
}
