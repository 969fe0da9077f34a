//! Fixed 5×5 Gaussian blur (σ ≈ 1.4).

use crate::convolve::convolve;
use crate::error::EngineResult;
use crate::grayscale::to_gray;
use crate::image::PixelGrid;
use crate::kernel::Kernel;

/// Binomial taps; their outer product approximates a Gaussian with σ ≈ 1.4.
const BINOMIAL_TAPS: [f64; 5] = [1.0, 4.0, 6.0, 4.0, 1.0];
/// Sum of the outer product of [`BINOMIAL_TAPS`].
const BINOMIAL_NORM: f64 = 256.0;

/// Reduce to grayscale and smooth with the fixed binomial kernel.
///
/// The two outermost rows and columns are copied unfiltered.
pub fn gaussian_blur(grid: &PixelGrid) -> EngineResult<PixelGrid> {
    let gray = to_gray(grid)?;
    convolve(&gray, &gaussian_kernel()?)
}

pub fn gaussian_kernel() -> EngineResult<Kernel> {
    Kernel::separable(&BINOMIAL_TAPS, BINOMIAL_NORM)
}
