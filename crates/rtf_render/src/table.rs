//! Table rendering: row definitions, merge markers, borders, cell content
//!
//! Each grid row renders as a row definition (`\trowd` plus one property
//! cluster and `\cellx` per column, covered slots included) followed by one
//! `\cell` of content per column and a closing `\row`. Merges never drop
//! columns; the covered slots carry `\clmrg`/`\clvmrg` so the consumer
//! fuses them back together.

use doc_model::units::points_to_twips;
use doc_model::{Block, Border, BorderStyle, Direction, Table};

use crate::blocks::RenderCtx;
use crate::emitter::Emitter;
use crate::error::Result;
use crate::image::render_pict;
use crate::paragraph::{alignment_word, render_paragraph, ParagraphMode};

fn border_style_word(style: BorderStyle) -> &'static str {
    match style {
        BorderStyle::Single => "brdrs",
        BorderStyle::Dotted => "brdrdot",
        BorderStyle::Dashed => "brdrdash",
        BorderStyle::Double => "brdrdb",
        BorderStyle::Thick => "brdrth",
    }
}

fn emit_border(e: &mut Emitter, edge_word: &str, border: Border) {
    e.control(edge_word);
    e.control(border_style_word(border.style));
    e.control_value("brdrw", points_to_twips(border.width));
}

pub(crate) fn render_table(e: &mut Emitter, table: &Table, ctx: &mut RenderCtx) -> Result<()> {
    let edges = table.column_right_edges();
    for row in 0..table.row_count() {
        render_row_definition(e, table, row, &edges);
        render_row_content(e, table, row, ctx)?;
    }
    Ok(())
}

fn render_row_definition(e: &mut Emitter, table: &Table, row: usize, edges: &[f32]) {
    e.control("trowd");
    e.control_value("trgaph", points_to_twips(table.margins[Direction::Left]));
    e.control_value("trpaddt", points_to_twips(table.margins[Direction::Top]));
    e.control_value("trpaddr", points_to_twips(table.margins[Direction::Right]));
    e.control_value("trpaddb", points_to_twips(table.margins[Direction::Bottom]));
    e.control_value("trpaddl", points_to_twips(table.margins[Direction::Left]));
    if let Some(height) = table.explicit_row_height(row) {
        e.control_value("trrh", points_to_twips(height));
    }
    for col in 0..table.col_count() {
        // Every accessor below is in bounds by construction.
        if table.is_covered(row, col).unwrap_or(false) {
            match table.primary_position(row, col) {
                Ok((primary_row, _)) if primary_row == row => e.control("clmrg"),
                _ => e.control("clvmrg"),
            }
        } else if let Ok(cell) = table.cell(row, col) {
            if cell.col_span() > 1 {
                e.control("clmgf");
            }
            if cell.row_span() > 1 {
                e.control("clvmgf");
            }
        }
        if let Some(color) = table.resolved_background(row, col).ok().flatten() {
            e.control_value("clcbpat", color.index() as i32 + 1);
        }
        for (direction, word) in [
            (Direction::Top, "clbrdrt"),
            (Direction::Left, "clbrdrl"),
            (Direction::Bottom, "clbrdrb"),
            (Direction::Right, "clbrdrr"),
        ] {
            if let Some(border) = table.resolved_border(row, col, direction).ok().flatten() {
                emit_border(e, word, border);
            }
        }
        e.control_value("cellx", points_to_twips(edges[col]));
    }
    e.newline();
}

fn render_row_content(e: &mut Emitter, table: &Table, row: usize, ctx: &mut RenderCtx) -> Result<()> {
    for col in 0..table.col_count() {
        e.control("pard");
        e.control("intbl");
        if let Ok(cell) = table.cell(row, col) {
            if let Some(alignment) = cell.alignment {
                e.control(alignment_word(alignment));
            }
            let mut first = true;
            for block in cell.container().blocks() {
                match block {
                    Block::Paragraph(p) => {
                        if !first {
                            e.control("par");
                        }
                        render_paragraph(e, p, ctx, ParagraphMode::InTable)?;
                        first = false;
                    }
                    Block::Image(img) => {
                        render_pict(e, img)?;
                        first = false;
                    }
                    // table_cell policy rejects nested tables at build time;
                    // a deserialized tree could still carry one
                    Block::Table(_) => {
                        debug_assert!(false, "nested table in cell ({row}, {col})");
                        tracing::warn!(row, col, "skipping nested table in a cell");
                    }
                }
            }
        }
        e.control("cell");
        e.newline();
    }
    e.control("row");
    e.newline();
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::{Color, Document, Lcid, PaperOrientation, PaperSize};

    fn new_table(rows: usize, cols: usize) -> Table {
        let mut doc = Document::new(PaperSize::A4, PaperOrientation::Portrait, Lcid::English);
        doc.add_table(rows, cols, 400.0, 12.0).unwrap().clone()
    }

    fn render_str(table: &Table) -> String {
        let mut e = Emitter::new();
        let mut ctx = RenderCtx::new();
        render_table(&mut e, table, &mut ctx).unwrap();
        e.finish().unwrap()
    }

    #[test]
    fn test_row_definition_shape() {
        let mut t = new_table(1, 2);
        t.cell_mut(0, 0).unwrap().add_paragraph().set_text("a");
        t.cell_mut(0, 1).unwrap().add_paragraph().set_text("b");
        let out = render_str(&t);
        assert!(out.starts_with("\\trowd\\trgaph60"));
        // no fixed heights configured, so no \trrh
        assert!(!out.contains("\\trrh"));
        assert!(out.contains("\\cellx4000\\cellx8000"));
        assert!(out.contains("\\pard\\intbl{a}\\cell"));
        assert!(out.contains("\\pard\\intbl{b}\\cell"));
        assert!(out.ends_with("\\row\n"));
    }

    #[test]
    fn test_row_height_emitted_only_when_fixed() {
        let mut t = new_table(2, 1);
        t.set_row_height(0, 24.0).unwrap();
        let out = render_str(&t);
        assert_eq!(out.matches("\\trrh").count(), 1);
        assert!(out.contains("\\trrh480"));
    }

    #[test]
    fn test_vertical_merge_markers() {
        // 2x2 with the left column merged vertically: anchor gets \clvmgf,
        // the slot below it \clvmrg, and the column count never changes.
        let mut t = new_table(2, 2);
        t.merge(0, 0, 2, 1).unwrap();
        let out = render_str(&t);
        assert_eq!(out.matches("\\clvmgf").count(), 1);
        assert_eq!(out.matches("\\clvmrg").count(), 1);
        assert_eq!(out.matches("\\cellx").count(), 4);
        assert_eq!(out.matches("\\cell\n").count(), 4);
        assert_eq!(out.matches("\\row").count(), 2);
    }

    #[test]
    fn test_horizontal_merge_markers() {
        let mut t = new_table(1, 3);
        t.merge(0, 0, 1, 2).unwrap();
        let out = render_str(&t);
        assert_eq!(out.matches("\\clmgf").count(), 1);
        assert_eq!(out.matches("\\clmrg").count(), 1);
    }

    #[test]
    fn test_borders_and_backgrounds() {
        let mut doc = Document::new(PaperSize::A4, PaperOrientation::Portrait, Lcid::English);
        let gray = doc.create_color(Color::new(200, 200, 200));
        let mut t = new_table(2, 2);
        t.set_outer_border(BorderStyle::Double, 2.0);
        t.set_inner_border(BorderStyle::Dotted, 1.0);
        t.header_background = Some(gray);
        let out = render_str(&t);
        // outer edge of the top-left cell
        assert!(out.contains("\\clbrdrt\\brdrdb\\brdrw40"));
        assert!(out.contains("\\clbrdrl\\brdrdb\\brdrw40"));
        // interior edge falls back to the inner border
        assert!(out.contains("\\clbrdrb\\brdrdot\\brdrw20"));
        // header row color, shifted past the automatic entry
        assert_eq!(out.matches("\\clcbpat1").count(), 2);
    }

    #[test]
    fn test_cell_alignment_precedes_content() {
        let mut t = new_table(1, 1);
        let cell = t.cell_mut(0, 0).unwrap();
        cell.alignment = Some(doc_model::Alignment::Center);
        cell.add_paragraph().set_text("mid");
        let out = render_str(&t);
        assert!(out.contains("\\pard\\intbl\\qc{mid}\\cell"));
    }
}
