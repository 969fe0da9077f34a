//! Direct 2D DCT-II magnitude.
//!
//! ```text
//! F(u,v) = Σ I(x,y)·cos(π(2x+1)u / 2N)·cos(π(2y+1)v / 2M)
//! ```
//! Unnormalized; the display stage only looks at `|F|` relative to its max.

use std::f64::consts::PI;

use crate::error::EngineResult;
use crate::frequency::{Plane, SpectralTransform, spectrum};
use crate::image::PixelGrid;
use crate::params::SpectrumOptions;

/// Reference-grade DCT-II by direct double summation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectDct;

impl SpectralTransform for DirectDct {
    fn name(&self) -> &'static str {
        "direct DCT-II"
    }

    fn coefficients(&self, plane: &Plane) -> Vec<f64> {
        let (n, m) = (plane.width, plane.height);
        let basis_x = cosine_basis(n);
        let basis_y = cosine_basis(m);

        let mut out = Vec::with_capacity(n * m);
        for v in 0..m {
            for u in 0..n {
                let mut sum = 0.0;
                for y in 0..m {
                    let cy = basis_y[v * m + y];
                    for x in 0..n {
                        sum += plane.at(x, y) * basis_x[u * n + x] * cy;
                    }
                }
                out.push(sum.abs());
            }
        }
        out
    }
}

/// `cos(π(2i+1)k / 2N)` indexed by `k * N + i`.
fn cosine_basis(n: usize) -> Vec<f64> {
    let mut table = Vec::with_capacity(n * n);
    for k in 0..n {
        for i in 0..n {
            table.push((PI * (2 * i + 1) as f64 * k as f64 / (2.0 * n as f64)).cos());
        }
    }
    table
}

/// Log-magnitude DCT view with the default 128-pixel cap.
pub fn dct_magnitude(grid: &PixelGrid) -> EngineResult<PixelGrid> {
    dct_magnitude_with(grid, &SpectrumOptions::default())
}

pub fn dct_magnitude_with(grid: &PixelGrid, options: &SpectrumOptions) -> EngineResult<PixelGrid> {
    spectrum(grid, &DirectDct, options.max_side)
}
