//! Image rendering: `\pict` groups with hex-encoded payloads

use std::fmt::Write as _;

use doc_model::units::points_to_twips;
use doc_model::{Image, ImageType};

use crate::emitter::Emitter;
use crate::error::Result;

/// Bytes of payload per hex line; 60 output characters.
const HEX_BYTES_PER_LINE: usize = 30;

fn blip_word(image_type: ImageType) -> &'static str {
    match image_type {
        ImageType::Jpeg => "jpegblip",
        // GIF payloads are re-encoded to PNG before they reach the model
        ImageType::Png | ImageType::Gif => "pngblip",
    }
}

/// An image standing alone in the block flow, in its own paragraph group.
pub(crate) fn render_image(e: &mut Emitter, image: &Image) -> Result<()> {
    e.open_group();
    e.control("pard");
    if image.starts_new_page() {
        e.control("pagebb");
    }
    render_pict(e, image)?;
    e.control("par");
    e.close_group()?;
    e.newline();
    Ok(())
}

/// The bare `{\pict ...}` group, also usable inline in a table cell.
pub(crate) fn render_pict(e: &mut Emitter, image: &Image) -> Result<()> {
    if image.start_new_paragraph {
        e.control("par");
    }
    let data = image.data();
    e.open_group();
    e.control("pict");
    e.control(blip_word(data.image_type));
    e.control_value("picw", data.pixel_width as i32);
    e.control_value("pich", data.pixel_height as i32);
    let (width, height) = image.display_size();
    e.control_value("picwgoal", points_to_twips(width));
    e.control_value("pichgoal", points_to_twips(height));
    for chunk in data.bytes.chunks(HEX_BYTES_PER_LINE) {
        e.newline();
        let mut line = String::with_capacity(chunk.len() * 2);
        for byte in chunk {
            // infallible on String
            let _ = write!(line, "{byte:02x}");
        }
        e.raw(&line);
    }
    e.close_group()?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::{Document, ImageData, Lcid, PaperOrientation, PaperSize};

    fn sample_image(image_type: ImageType, bytes: Vec<u8>) -> Image {
        let mut doc = Document::new(PaperSize::A4, PaperOrientation::Portrait, Lcid::English);
        doc.add_image(ImageData {
            image_type,
            pixel_width: 200,
            pixel_height: 100,
            bytes,
        })
        .unwrap()
        .clone()
    }

    fn render_str(image: &Image) -> String {
        let mut e = Emitter::new();
        render_image(&mut e, image).unwrap();
        e.finish().unwrap()
    }

    #[test]
    fn test_pict_group_shape() {
        let out = render_str(&sample_image(ImageType::Jpeg, vec![0xab, 0x01, 0xff]));
        assert!(out.starts_with("{\\pard{\\pict\\jpegblip\\picw200\\pich100"));
        assert!(out.contains("\nab01ff}"));
        assert!(out.ends_with("\\par}\n"));
    }

    #[test]
    fn test_gif_payload_declares_png_blip() {
        let out = render_str(&sample_image(ImageType::Gif, vec![0x00]));
        assert!(out.contains("\\pngblip"));
    }

    #[test]
    fn test_default_scaling_is_one_point_per_pixel() {
        let out = render_str(&sample_image(ImageType::Png, vec![]));
        assert!(out.contains("\\picwgoal4000\\pichgoal2000"));
    }

    #[test]
    fn test_width_only_keeps_aspect_ratio() {
        let mut image = sample_image(ImageType::Png, vec![]);
        image.set_width(50.0);
        let out = render_str(&image);
        assert!(out.contains("\\picwgoal1000\\pichgoal500"));
    }

    #[test]
    fn test_hex_wraps_every_thirty_bytes() {
        let out = render_str(&sample_image(ImageType::Png, vec![0x11; 45]));
        let lines: Vec<&str> = out.lines().collect();
        let hex_lines: Vec<&str> = lines
            .iter()
            .copied()
            .filter(|l| l.starts_with("11"))
            .collect();
        assert_eq!(hex_lines.len(), 2);
        assert_eq!(hex_lines[0].len(), 60);
        assert!(hex_lines[1].starts_with(&"11".repeat(15)));
    }
}
