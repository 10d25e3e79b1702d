//! Image blocks - pre-decoded raster payloads placed in the document flow
//!
//! The model never decodes image files itself. A collaborator (the `media`
//! crate, or any caller honoring the contract) supplies an [`ImageData`]
//! with the encoded payload and its pixel dimensions; the model only scales
//! and places it.

use serde::{Deserialize, Serialize};

/// Encoded image formats the writer can embed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageType {
    Jpeg,
    Png,
    Gif,
}

/// The image collaborator's result: an encoded payload plus its dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageData {
    pub image_type: ImageType,
    pub pixel_width: u32,
    pub pixel_height: u32,
    /// The encoded file bytes, embedded verbatim (hex) in the output
    pub bytes: Vec<u8>,
}

/// An image block with display scaling and placement flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    data: ImageData,
    width: Option<f32>,
    height: Option<f32>,
    start_new_page: bool,
    /// Emit the image in its own fresh paragraph
    pub start_new_paragraph: bool,
    allow_page_break: bool,
}

impl Image {
    pub(crate) fn new(data: ImageData, allow_page_break: bool) -> Self {
        Self {
            data,
            width: None,
            height: None,
            start_new_page: false,
            start_new_paragraph: false,
            allow_page_break,
        }
    }

    pub fn data(&self) -> &ImageData {
        &self.data
    }

    /// Set the display width in points; height follows the aspect ratio
    /// unless also set.
    pub fn set_width(&mut self, points: f32) {
        self.width = Some(points);
    }

    /// Set the display height in points; width follows the aspect ratio
    /// unless also set.
    pub fn set_height(&mut self, points: f32) {
        self.height = Some(points);
    }

    pub fn starts_new_page(&self) -> bool {
        self.start_new_page
    }

    /// Force a page break before the image.
    pub fn set_start_new_page(&mut self, start_new_page: bool) -> crate::Result<()> {
        if start_new_page && !self.allow_page_break {
            return Err(crate::DocModelError::CapabilityViolation(
                crate::Capability::PageBreak,
            ));
        }
        self.start_new_page = start_new_page;
        Ok(())
    }

    /// Display size in points.
    ///
    /// With one dimension set, the other is derived from the source pixel
    /// aspect ratio; with neither set, pixels map to points one-to-one.
    pub fn display_size(&self) -> (f32, f32) {
        let pw = self.data.pixel_width.max(1) as f32;
        let ph = self.data.pixel_height.max(1) as f32;
        match (self.width, self.height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => (w, w * ph / pw),
            (None, Some(h)) => (h * pw / ph, h),
            (None, None) => (pw, ph),
        }
    }
}
