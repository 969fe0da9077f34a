//! Histogram-driven tone remapping: equalization and contrast stretching.
//!
//! Both operators reduce to grayscale, build a 256-entry lookup table, and
//! remap every pixel through it.

use crate::error::EngineResult;
use crate::grayscale::to_gray;
use crate::histogram::Histogram;
use crate::image::PixelGrid;

/// Spread intensities by their cumulative distribution.
///
/// ```text
/// out(v) = floor(cdf[v] × 255 / (W × H))
/// ```
///
/// The mapping is monotonic non-decreasing because the CDF is.
pub fn equalize(grid: &PixelGrid) -> EngineResult<PixelGrid> {
    let gray = to_gray(grid)?;
    let hist = Histogram::from_gray(&gray);
    let total = gray.area() as u64;

    let mut lut = [0u8; 256];
    for (out, cdf) in lut.iter_mut().zip(hist.cumulative()) {
        *out = (cdf * 255 / total) as u8;
    }

    tracing::debug!("equalize {}x{}", gray.width(), gray.height());
    Ok(gray.map_gray(&lut))
}

/// Linearly map the observed `[min, max]` range onto `[0, 255]`.
///
/// ```text
/// out(v) = floor((v − min) × 255 / (max − min))
/// ```
///
/// A flat image (`min == max`) is returned as its grayscale reduction.
pub fn stretch(grid: &PixelGrid) -> EngineResult<PixelGrid> {
    let gray = to_gray(grid)?;
    let Some((min, max)) = Histogram::from_gray(&gray).range() else {
        return Ok(gray);
    };
    if min == max {
        tracing::debug!("stretch: flat image at {min}, unchanged");
        return Ok(gray);
    }

    let span = (max - min) as u32;
    let mut lut = [0u8; 256];
    for (v, out) in lut.iter_mut().enumerate().skip(min as usize).take(span as usize + 1) {
        *out = ((v as u32 - min as u32) * 255 / span) as u8;
    }

    tracing::debug!("stretch [{min}, {max}] -> [0, 255]");
    Ok(gray.map_gray(&lut))
}
