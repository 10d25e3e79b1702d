//! Builds a document touching most writer features and saves it as
//! `demo.rtf` in the working directory.
//!
//! Usage: `cargo run --example demo [image.png]`; an optional image path
//! is embedded if given.

use doc_model::{
    Alignment, BorderStyle, Color, Direction, Document, FieldKind, Lcid, PaperOrientation,
    PaperSize, TwoInOneStyle,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut doc = Document::new(PaperSize::A4, PaperOrientation::Landscape, Lcid::English);
    let courier = doc.create_font("Courier New");
    let red = doc.create_color(Color::new(255, 0, 0));
    let gray = doc.create_color(Color::new(220, 220, 220));

    let header = doc.header_mut().add_paragraph();
    header.set_text("Demo document - page  of ");
    header.add_field(20, FieldKind::Page)?;
    header.add_field(24, FieldKind::NumPages)?;

    let footer = doc.footer_mut().add_paragraph();
    footer.set_text("Generated  ");
    footer.add_field(9, FieldKind::Date)?;
    footer.add_field(10, FieldKind::Time)?;

    let p = doc.add_paragraph();
    p.set_text("Testing\n");
    p.alignment = Alignment::Left;
    p.default_format.font_size = Some(12.0);
    {
        let fmt = p.add_char_format(0, 4)?;
        fmt.fg_color = Some(red);
        fmt.bold = Some(true);
        fmt.underline = Some(true);
    }
    let note = p.add_footnote(6)?;
    note.add_paragraph().set_text("Footnote details here.");

    let table = doc.add_table(5, 4, 415.2, 12.0)?;
    table.margins[Direction::Bottom] = 20.0;
    table.set_inner_border(BorderStyle::Dotted, 1.0);
    table.set_outer_border(BorderStyle::Single, 2.0);
    table.header_background = Some(gray);
    table.merge(1, 0, 3, 1)?;
    for row in 0..5 {
        for col in 0..4 {
            if table.is_covered(row, col)? {
                continue;
            }
            table
                .cell_mut(row, col)?
                .add_paragraph()
                .set_text(format!("CELL {row},{col}"));
        }
    }

    if let Some(path) = std::env::args().nth(1) {
        let image = doc.add_image(media::load_image(&path)?)?;
        image.set_width(130.0);
    }

    let p = doc.add_paragraph();
    p.set_text("Appendix anchor; linked term: 2024.");
    p.set_start_new_page(true)?;
    p.default_format.font = Some(courier);
    p.add_char_format(0, 8)?.bookmark = Some("appendix".into());
    {
        let fmt = p.add_char_format(17, 28)?;
        fmt.local_hyperlink = Some("appendix".into());
        fmt.hyperlink_tip = Some("back to the appendix".into());
    }
    p.add_char_format(30, 34)?.two_in_one = Some(TwoInOneStyle::Braces);

    rtf_render::save(&doc, "demo.rtf")?;
    println!("wrote demo.rtf");
    Ok(())
}
