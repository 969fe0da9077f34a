//! Frequency-domain views and the local determinant response.
//!
//! Every operator here first reduces the input to grayscale and caps its
//! longest side, because the direct summations cost O((W·H)²).
//!
//! The spectral views are split into a [`SpectralTransform`] that produces
//! raw coefficient magnitudes and a shared display stage
//! ([`spectrum`]) that applies `log(1 + m)`, normalizes by the observed
//! maximum, and rescales to `[0, 255]`. A faster transform only has to
//! implement the trait.

pub mod dct;
pub mod determinant;
pub mod dft;

use crate::error::EngineResult;
use crate::grayscale::to_gray_scaled;
use crate::image::{ColorLayout, PixelGrid};

pub use dct::{DirectDct, dct_magnitude, dct_magnitude_with};
pub use determinant::{determinant_response, determinant_response_with};
pub use dft::{DirectDft, dft_magnitude, dft_magnitude_with};

/// Seed for the observed maximum, keeping an all-zero spectrum finite.
const MAGNITUDE_FLOOR: f64 = 1e-9;

/// A grayscale image as real-valued samples, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    pub width: usize,
    pub height: usize,
    pub samples: Vec<f64>,
}

impl Plane {
    pub fn from_gray(gray: &PixelGrid) -> Self {
        Self {
            width: gray.width() as usize,
            height: gray.height() as usize,
            samples: gray.as_raw().iter().map(|&v| v as f64).collect(),
        }
    }

    #[inline]
    pub fn at(&self, x: usize, y: usize) -> f64 {
        self.samples[y * self.width + x]
    }
}

/// A 2D transform producing one raw magnitude per frequency bin.
pub trait SpectralTransform {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Magnitudes for every bin `(u, v)`, stored at `v * width + u`.
    ///
    /// The output has exactly `plane.width * plane.height` entries.
    fn coefficients(&self, plane: &Plane) -> Vec<f64>;
}

/// Run `transform` on the downsampled luminance of `grid` and render the
/// log-magnitude spectrum as a grayscale grid of the downsampled size.
pub fn spectrum(
    grid: &PixelGrid,
    transform: &impl SpectralTransform,
    max_side: u32,
) -> EngineResult<PixelGrid> {
    let gray = to_gray_scaled(grid, max_side)?;
    let plane = Plane::from_gray(&gray);
    tracing::debug!(
        "{} on {}x{} (cap {max_side})",
        transform.name(),
        plane.width,
        plane.height
    );

    let magnitudes: Vec<f64> = transform
        .coefficients(&plane)
        .into_iter()
        .map(f64::ln_1p)
        .collect();
    let max = magnitudes.iter().copied().fold(MAGNITUDE_FLOOR, f64::max);

    let data = magnitudes
        .iter()
        .map(|&m| (m / max * 255.0).round().clamp(0.0, 255.0) as u8)
        .collect();
    Ok(PixelGrid::from_parts(
        gray.width(),
        gray.height(),
        ColorLayout::Gray,
        data,
    ))
}
