//! Linear contrast and brightness adjustment.

use crate::convolve::saturate;
use crate::error::{EngineError, EngineResult};
use crate::image::PixelGrid;

/// Largest brightness offset in either direction.
pub const MAX_BRIGHTNESS: f32 = 255.0;

/// Rescale color channels as `contrast × v + brightness`.
///
/// Alpha channels pass through untouched. `contrast` must be finite and
/// non-negative; `brightness` must lie in `[-255, 255]`.
///
/// `contrast = 1.0` with `brightness = 0.0` produces no change.
pub fn enhance(grid: &PixelGrid, contrast: f32, brightness: f32) -> EngineResult<PixelGrid> {
    grid.ensure_non_empty()?;
    if !contrast.is_finite() || contrast < 0.0 {
        return Err(EngineError::InvalidParameter {
            name: "contrast",
            value: contrast as f64,
        });
    }
    if !brightness.is_finite() || brightness.abs() > MAX_BRIGHTNESS {
        return Err(EngineError::InvalidParameter {
            name: "brightness",
            value: brightness as f64,
        });
    }

    tracing::debug!("enhance contrast={contrast} brightness={brightness}");

    let mut lut = [0u8; 256];
    for (v, out) in lut.iter_mut().enumerate() {
        *out = saturate(contrast as f64 * v as f64 + brightness as f64);
    }

    let layout = grid.layout();
    let channels = layout.channels();
    let color = layout.color_channels();
    let data = grid
        .as_raw()
        .iter()
        .enumerate()
        .map(|(i, &v)| if i % channels < color { lut[v as usize] } else { v })
        .collect();
    PixelGrid::new(grid.width(), grid.height(), layout, data)
}
