//! Generic 2D kernel correlation.
//!
//! Each channel is filtered independently. Pixels closer than the kernel
//! radius to any edge are not computed and keep their source value, so the
//! output always has the input's shape.
//!
//! # Complexity
//! O(W × H × C × side²).

use crate::error::EngineResult;
use crate::image::PixelGrid;
use crate::kernel::Kernel;

/// Correlate `grid` with `kernel`, returning a new grid.
///
/// Each computed sample is the weighted sum over the kernel window, rounded
/// to nearest and clamped to `[0, 255]`.
pub fn convolve(grid: &PixelGrid, kernel: &Kernel) -> EngineResult<PixelGrid> {
    grid.ensure_non_empty()?;

    let width = grid.width() as usize;
    let height = grid.height() as usize;
    let channels = grid.channels();
    let radius = kernel.radius();
    let side = kernel.side();
    let src = grid.as_raw();
    let mut dst = src.to_vec();

    // Kernel does not fit: every pixel is border.
    if width <= 2 * radius || height <= 2 * radius {
        return Ok(PixelGrid::from_parts(
            grid.width(),
            grid.height(),
            grid.layout(),
            dst,
        ));
    }

    let stride = width * channels;
    for y in radius..height - radius {
        for x in radius..width - radius {
            for c in 0..channels {
                let mut acc = 0.0_f64;
                for ky in 0..side {
                    let row = (y + ky - radius) * stride;
                    for kx in 0..side {
                        let idx = row + (x + kx - radius) * channels + c;
                        acc += kernel.weight(kx, ky) * src[idx] as f64;
                    }
                }
                dst[y * stride + x * channels + c] = saturate(acc);
            }
        }
    }

    Ok(PixelGrid::from_parts(
        grid.width(),
        grid.height(),
        grid.layout(),
        dst,
    ))
}

/// Round to nearest and clamp into the 8-bit range.
#[inline]
pub(crate) fn saturate(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
