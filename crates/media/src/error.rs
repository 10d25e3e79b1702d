//! Error types for image loading

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaError {
    /// The file extension maps to no supported image format.
    #[error("unrecognized image extension: {0:?}")]
    UnrecognizedExtension(String),

    /// The payload could not be decoded as the expected format.
    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MediaError>;
