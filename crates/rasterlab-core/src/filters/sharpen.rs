//! Laplacian-style sharpening.

use crate::convolve::convolve;
use crate::error::{EngineError, EngineResult};
use crate::image::PixelGrid;
use crate::kernel::Kernel;

/// Lowest accepted sharpening strength.
pub const MIN_STRENGTH: f32 = 0.1;
/// Highest accepted sharpening strength.
pub const MAX_STRENGTH: f32 = 5.0;
/// Strength of the standard sharpen.
pub const DEFAULT_STRENGTH: f32 = 1.0;

/// Sharpen every channel with a 3×3 cross kernel.
///
/// ```text
///  0  -s   0
/// -s  5s  -s
///  0  -s   0
/// ```
///
/// `strength` is clamped to `[0.1, 5.0]`. The kernel sums to `s`, so flat
/// regions are reproduced exactly at `s = 1` and scaled by `s` otherwise.
pub fn sharpen(grid: &PixelGrid, strength: f32) -> EngineResult<PixelGrid> {
    grid.ensure_non_empty()?;
    let s = clamp_strength(strength)?;
    tracing::debug!("sharpen s={s} on {}x{}", grid.width(), grid.height());
    convolve(grid, &sharpen_kernel(s)?)
}

/// The 3×3 sharpen kernel for an already clamped strength.
pub fn sharpen_kernel(strength: f32) -> EngineResult<Kernel> {
    let s = strength as f64;
    Kernel::from_3x3([[0.0, -s, 0.0], [-s, 5.0 * s, -s], [0.0, -s, 0.0]])
}

fn clamp_strength(strength: f32) -> EngineResult<f32> {
    if !strength.is_finite() {
        return Err(EngineError::InvalidParameter {
            name: "strength",
            value: strength as f64,
        });
    }
    let clamped = strength.clamp(MIN_STRENGTH, MAX_STRENGTH);
    if clamped != strength {
        tracing::warn!("sharpen strength {strength} clamped to {clamped}");
    }
    Ok(clamped)
}
