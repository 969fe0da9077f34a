//! Direct 2D discrete Fourier transform magnitude.
//!
//! # Algorithm
//! For every bin `(u, v)`:
//! ```text
//! re = Σ I(x,y)·cos(2π(ux/W + vy/H))
//! im = −Σ I(x,y)·sin(2π(ux/W + vy/H))
//! ```
//! The angle sum is expanded with per-axis cosine/sine tables so the inner
//! loop does no trigonometry.
//!
//! # Complexity
//! O((W·H)²) time, O(W² + H²) table memory.

use std::f64::consts::TAU;

use crate::error::EngineResult;
use crate::frequency::{Plane, SpectralTransform, spectrum};
use crate::image::PixelGrid;
use crate::params::SpectrumOptions;

/// Reference-grade DFT by direct double summation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectDft;

impl SpectralTransform for DirectDft {
    fn name(&self) -> &'static str {
        "direct DFT"
    }

    fn coefficients(&self, plane: &Plane) -> Vec<f64> {
        let (w, h) = (plane.width, plane.height);
        let (cos_x, sin_x) = twiddles(w);
        let (cos_y, sin_y) = twiddles(h);

        let mut out = Vec::with_capacity(w * h);
        for v in 0..h {
            for u in 0..w {
                let mut re = 0.0;
                let mut im = 0.0;
                for y in 0..h {
                    let (cy, sy) = (cos_y[v * h + y], sin_y[v * h + y]);
                    for x in 0..w {
                        let (cx, sx) = (cos_x[u * w + x], sin_x[u * w + x]);
                        let val = plane.at(x, y);
                        // cos(a + b) and sin(a + b)
                        re += val * (cx * cy - sx * sy);
                        im -= val * (sx * cy + cx * sy);
                    }
                }
                out.push(re.hypot(im));
            }
        }
        out
    }
}

/// `cos(2π·k·n/N)` and `sin(2π·k·n/N)` tables indexed by `k * N + n`.
fn twiddles(n: usize) -> (Vec<f64>, Vec<f64>) {
    let mut cos = Vec::with_capacity(n * n);
    let mut sin = Vec::with_capacity(n * n);
    for k in 0..n {
        for i in 0..n {
            // Reduce k·i mod N first to keep the angle small and exact.
            let angle = TAU * ((k * i) % n) as f64 / n as f64;
            cos.push(angle.cos());
            sin.push(angle.sin());
        }
    }
    (cos, sin)
}

/// Log-magnitude DFT view with the default 128-pixel cap.
pub fn dft_magnitude(grid: &PixelGrid) -> EngineResult<PixelGrid> {
    dft_magnitude_with(grid, &SpectrumOptions::default())
}

pub fn dft_magnitude_with(grid: &PixelGrid, options: &SpectrumOptions) -> EngineResult<PixelGrid> {
    spectrum(grid, &DirectDft, options.max_side)
}
