//! Image Converter: re-encodes a single raster image as a WebP sibling.

use image::DynamicImage;
use std::fs;
use std::path::{Path, PathBuf};
use webp::Encoder;

use crate::config::TARGET_EXTENSION;
use crate::error::ConvertError;

/// Outcome of one successful conversion, kept for reporting only.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The image that was read.
    pub source: PathBuf,

    /// The `.webp` file that was written.
    pub output: PathBuf,

    /// Byte size of the source file.
    pub source_bytes: u64,

    /// Byte size of the written output.
    pub output_bytes: u64,
}

impl Conversion {
    /// Size reduction as a percentage of the source size.
    ///
    /// Negative when the WebP output came out larger than the source.
    pub fn savings_percent(&self) -> f64 {
        (self.source_bytes as f64 - self.output_bytes as f64) / self.source_bytes as f64 * 100.0
    }
}

/// Derive the output path for a source image (`photo.jpg` -> `photo.webp`).
pub fn webp_sibling(path: &Path) -> PathBuf {
    path.with_extension(TARGET_EXTENSION)
}

/// Convert a single image to a lossy WebP at the given quality.
///
/// Sources with an alpha channel keep it: the decoder expands gray+alpha
/// and transparent palette images to RGBA, so checking the decoded color
/// type covers all of them. Opaque sources are normalized to RGB before
/// encoding. Writes exactly one new file; the source is never modified.
pub fn convert_image(source: &Path, quality: u8) -> Result<Conversion, ConvertError> {
    let output = webp_sibling(source);

    let img = image::open(source)?;
    let pixels = if img.color().has_alpha() {
        DynamicImage::ImageRgba8(img.into_rgba8())
    } else {
        DynamicImage::ImageRgb8(img.into_rgb8())
    };

    let encoder =
        Encoder::from_image(&pixels).map_err(|reason| ConvertError::Encode(reason.to_string()))?;
    let encoded = encoder
        .encode_simple(false, f32::from(quality))
        .map_err(|err| ConvertError::Encode(format!("{:?}", err)))?;

    let source_bytes = fs::metadata(source)?.len();
    fs::write(&output, &*encoded)?;

    Ok(Conversion {
        source: source.to_path_buf(),
        output,
        source_bytes,
        output_bytes: encoded.len() as u64,
    })
}
