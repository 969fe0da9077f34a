//! Image decoding into pixel grids.

use std::path::Path;

use image::{ColorType, DynamicImage};
use rasterlab_core::{ColorLayout, PixelGrid};

use crate::error::CodecError;

/// Decode encoded image bytes (PNG, JPEG, BMP, …) into a pixel grid.
///
/// The channel layout follows the source: gray, gray+alpha, RGB or RGBA.
/// Deeper formats are reduced to 8 bits per sample.
pub fn decode(bytes: &[u8]) -> Result<PixelGrid, CodecError> {
    if bytes.is_empty() {
        return Err(CodecError::EmptyInput);
    }
    let img = image::load_from_memory(bytes)?;
    from_dynamic(&img)
}

/// Load and decode an image file.
pub fn load(path: &Path) -> Result<PixelGrid, CodecError> {
    let bytes = std::fs::read(path)?;
    tracing::debug!("read {} bytes from {}", bytes.len(), path.display());
    decode(&bytes)
}

/// Convert a decoded `image` buffer into a grid.
pub fn from_dynamic(img: &DynamicImage) -> Result<PixelGrid, CodecError> {
    let (width, height) = (img.width(), img.height());
    let (layout, data) = match img.color() {
        ColorType::L8 | ColorType::L16 => (ColorLayout::Gray, img.to_luma8().into_raw()),
        ColorType::La8 | ColorType::La16 => {
            (ColorLayout::GrayAlpha, img.to_luma_alpha8().into_raw())
        }
        ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => {
            (ColorLayout::Rgb, img.to_rgb8().into_raw())
        }
        _ => (ColorLayout::Rgba, img.to_rgba8().into_raw()),
    };
    Ok(PixelGrid::new(width, height, layout, data)?)
}
