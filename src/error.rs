//! Error types for the conversion phase.

use std::io;
use thiserror::Error;

/// Why a single image failed to convert.
///
/// The pipeline reports these per image and moves on; they never abort
/// the batch.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The source could not be opened or decoded as a raster image.
    #[error("failed to decode: {0}")]
    Decode(#[from] image::ImageError),

    /// libwebp rejected the pixel buffer or the encode configuration.
    #[error("failed to encode: {0}")]
    Encode(String),

    /// Reading source metadata or writing the output failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
