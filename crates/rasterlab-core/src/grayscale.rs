//! Luminance reduction and capped downsampling.
//!
//! Every analysis operator works on a single channel. Color grids are
//! reduced with Rec. 709 luma weights; alpha is ignored.

use image::imageops::{self, FilterType};
use image::GrayImage;

use crate::error::{EngineError, EngineResult};
use crate::image::{ColorLayout, PixelGrid};

/// Rec. 709 luminance weights.
const LUMA_REC709: [f32; 3] = [0.2126, 0.7152, 0.0722];

/// Reduce a grid to one luminance channel. Dimensions are unchanged.
pub fn to_gray(grid: &PixelGrid) -> EngineResult<PixelGrid> {
    grid.ensure_non_empty()?;
    Ok(luma(grid))
}

/// Reduce to luminance and shrink so that neither side exceeds `max_side`.
///
/// The scale factor is `min(1, max_side / max(w, h))`; new sides are rounded
/// and never drop below one pixel. Grids that already fit are returned at
/// full size.
pub fn to_gray_scaled(grid: &PixelGrid, max_side: u32) -> EngineResult<PixelGrid> {
    grid.ensure_non_empty()?;
    if max_side == 0 {
        return Err(EngineError::InvalidParameter {
            name: "max_side",
            value: 0.0,
        });
    }

    let gray = luma(grid);
    let (width, height) = scaled_dimensions(grid.width(), grid.height(), max_side);
    if (width, height) == (grid.width(), grid.height()) {
        return Ok(gray);
    }

    tracing::debug!(
        "downsampling {}x{} to {}x{} (cap {max_side})",
        grid.width(),
        grid.height(),
        width,
        height
    );

    let expected = gray.area();
    let actual = gray.as_raw().len();
    let buffer = GrayImage::from_raw(gray.width(), gray.height(), gray.into_raw())
        .ok_or(EngineError::BufferLength { expected, actual })?;
    let resized = imageops::resize(&buffer, width, height, FilterType::Triangle);
    Ok(PixelGrid::from_parts(
        width,
        height,
        ColorLayout::Gray,
        resized.into_raw(),
    ))
}

/// Output size for a downsample cap.
pub fn scaled_dimensions(width: u32, height: u32, max_side: u32) -> (u32, u32) {
    let longest = width.max(height).max(1) as f64;
    let scale = (max_side as f64 / longest).min(1.0);
    let scale_side = |side: u32| ((side as f64 * scale).round() as u32).max(1);
    (scale_side(width), scale_side(height))
}

fn luma(grid: &PixelGrid) -> PixelGrid {
    let channels = grid.channels();
    let data = match grid.layout() {
        ColorLayout::Gray => grid.as_raw().to_vec(),
        ColorLayout::GrayAlpha => grid.as_raw().chunks_exact(channels).map(|px| px[0]).collect(),
        ColorLayout::Rgb | ColorLayout::Rgba => grid
            .as_raw()
            .chunks_exact(channels)
            .map(|px| {
                let y = LUMA_REC709[0] * px[0] as f32
                    + LUMA_REC709[1] * px[1] as f32
                    + LUMA_REC709[2] * px[2] as f32;
                y.round().clamp(0.0, 255.0) as u8
            })
            .collect(),
    };
    PixelGrid::from_parts(grid.width(), grid.height(), ColorLayout::Gray, data)
}
