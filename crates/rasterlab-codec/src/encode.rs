//! Image encoding and lossy re-encode preview.

use std::fmt;
use std::path::Path;

use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use rasterlab_core::{ColorLayout, PixelGrid};

use crate::decode::decode;
use crate::error::CodecError;

/// Lowest quality accepted by the JPEG writer.
const MIN_QUALITY: f32 = 0.01;

/// Encoded output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Png,
    Jpeg,
    Bmp,
}

impl OutputFormat {
    /// Resolve a file extension, case-insensitively.
    pub fn from_extension(ext: &str) -> Result<Self, CodecError> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "bmp" => Ok(Self::Bmp),
            _ => Err(CodecError::UnsupportedFormat(ext.to_string())),
        }
    }

    /// Resolve the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self, CodecError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| CodecError::UnsupportedFormat(path.display().to_string()))?;
        Self::from_extension(ext)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
            Self::Bmp => "BMP",
        }
    }

    pub const fn is_lossy(self) -> bool {
        matches!(self, Self::Jpeg)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Encode a grid into `format`.
///
/// `quality` is a fraction in `[0, 1]`, clamped to `[0.01, 1]`, and only
/// affects JPEG. JPEG output drops any alpha channel.
pub fn encode(grid: &PixelGrid, format: OutputFormat, quality: f32) -> Result<Vec<u8>, CodecError> {
    if grid.is_empty() {
        return Err(CodecError::InvalidArgument("cannot encode a zero-area grid"));
    }
    let jpeg_quality = jpeg_quality(quality)?;

    let mut buf = Vec::new();
    let (width, height) = (grid.width(), grid.height());
    let result = match format {
        OutputFormat::Png => PngEncoder::new(&mut buf).write_image(
            grid.as_raw(),
            width,
            height,
            color_type(grid.layout()),
        ),
        OutputFormat::Bmp => BmpEncoder::new(&mut buf).write_image(
            grid.as_raw(),
            width,
            height,
            color_type(grid.layout()),
        ),
        OutputFormat::Jpeg => {
            let (layout, data) = strip_alpha(grid);
            JpegEncoder::new_with_quality(&mut buf, jpeg_quality).write_image(
                &data,
                width,
                height,
                color_type(layout),
            )
        }
    };
    result.map_err(|source| CodecError::Encode {
        format: format.label(),
        source,
    })?;

    tracing::debug!("encoded {width}x{height} {format}: {} bytes", buf.len());
    Ok(buf)
}

/// Round-trip a grid through JPEG at `quality`, entirely in memory.
///
/// Used to preview compression artifacts before exporting.
pub fn recompress(grid: &PixelGrid, quality: f32) -> Result<PixelGrid, CodecError> {
    let bytes = encode(grid, OutputFormat::Jpeg, quality)?;
    decode(&bytes)
}

/// Encode and write a grid, picking the format from the extension.
pub fn save(grid: &PixelGrid, path: &Path, quality: f32) -> Result<(), CodecError> {
    let format = OutputFormat::from_path(path)?;
    let bytes = encode(grid, format, quality)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

fn jpeg_quality(quality: f32) -> Result<u8, CodecError> {
    if !quality.is_finite() {
        return Err(CodecError::InvalidArgument("quality must be finite"));
    }
    let q = quality.clamp(MIN_QUALITY, 1.0);
    Ok(((q * 100.0).round() as u8).max(1))
}

fn color_type(layout: ColorLayout) -> ExtendedColorType {
    match layout {
        ColorLayout::Gray => ExtendedColorType::L8,
        ColorLayout::GrayAlpha => ExtendedColorType::La8,
        ColorLayout::Rgb => ExtendedColorType::Rgb8,
        ColorLayout::Rgba => ExtendedColorType::Rgba8,
    }
}

fn strip_alpha(grid: &PixelGrid) -> (ColorLayout, Vec<u8>) {
    let layout = grid.layout();
    if !layout.has_alpha() {
        return (layout, grid.as_raw().to_vec());
    }
    let keep = layout.color_channels();
    let data = grid
        .as_raw()
        .chunks_exact(layout.channels())
        .flat_map(|px| px[..keep].iter().copied())
        .collect();
    let stripped = match layout {
        ColorLayout::GrayAlpha => ColorLayout::Gray,
        _ => ColorLayout::Rgb,
    };
    (stripped, data)
}
