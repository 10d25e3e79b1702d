//! Image loading for the document model
//!
//! `doc_model` places images but never decodes them; this crate is the
//! collaborator that turns files or byte buffers into [`ImageData`]: it
//! probes pixel dimensions, keeps JPEG and PNG payloads byte-for-byte, and
//! re-encodes GIF to PNG since RTF has no GIF blip.

mod error;

use std::io::Cursor;
use std::path::Path;

use doc_model::{ImageData, ImageType};
use image::{GenericImageView, ImageFormat};

pub use error::{MediaError, Result};

/// Map a file extension (case-insensitive) to a supported image format.
pub fn infer_type(path: &Path) -> Result<ImageType> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => Ok(ImageType::Jpeg),
        "png" => Ok(ImageType::Png),
        "gif" => Ok(ImageType::Gif),
        _ => Err(MediaError::UnrecognizedExtension(ext)),
    }
}

/// Read and decode an image file, inferring its format from the extension.
pub fn load_image(path: impl AsRef<Path>) -> Result<ImageData> {
    let path = path.as_ref();
    let image_type = infer_type(path)?;
    let bytes = std::fs::read(path)?;
    let data = decode_image(&bytes, image_type)?;
    tracing::debug!(
        path = %path.display(),
        width = data.pixel_width,
        height = data.pixel_height,
        "image loaded"
    );
    Ok(data)
}

/// Decode an in-memory payload of the given format.
///
/// JPEG and PNG payloads are embedded verbatim; only their dimensions are
/// probed. GIF is re-encoded to PNG and the returned data reports
/// [`ImageType::Png`].
pub fn decode_image(bytes: &[u8], image_type: ImageType) -> Result<ImageData> {
    let format = match image_type {
        ImageType::Jpeg => ImageFormat::Jpeg,
        ImageType::Png => ImageFormat::Png,
        ImageType::Gif => ImageFormat::Gif,
    };
    let decoded = image::load_from_memory_with_format(bytes, format)?;
    let (pixel_width, pixel_height) = decoded.dimensions();

    let (image_type, bytes) = match image_type {
        ImageType::Jpeg | ImageType::Png => (image_type, bytes.to_vec()),
        ImageType::Gif => {
            let mut png = Cursor::new(Vec::new());
            decoded.write_to(&mut png, ImageFormat::Png)?;
            (ImageType::Png, png.into_inner())
        }
    };
    Ok(ImageData {
        image_type,
        pixel_width,
        pixel_height,
        bytes,
    })
}

// =============================================================================
// Tests
// =============================================================================
