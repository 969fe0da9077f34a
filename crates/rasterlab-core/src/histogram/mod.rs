//! Luminance histogram computation, rendering, and tone remapping.

pub mod render;
pub mod tone;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::grayscale::to_gray;
use crate::image::PixelGrid;

pub use render::render;
pub use tone::{equalize, stretch};

/// Number of intensity bins.
pub const BINS: usize = 256;

/// Pixel counts per 8-bit intensity.
///
/// Always exactly 256 bins; serializes as a plain list of counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u64>", into = "Vec<u64>")]
pub struct Histogram {
    bins: Vec<u64>,
}

impl Histogram {
    /// Count the luminance values of `grid`.
    pub fn compute(grid: &PixelGrid) -> EngineResult<Self> {
        let gray = to_gray(grid)?;
        Ok(Self::from_gray(&gray))
    }

    /// Count an already single-channel grid.
    pub(crate) fn from_gray(gray: &PixelGrid) -> Self {
        let mut bins = vec![0u64; BINS];
        for &v in gray.as_raw() {
            bins[v as usize] += 1;
        }
        Self { bins }
    }

    pub fn bins(&self) -> &[u64] {
        &self.bins
    }

    /// Count for one intensity.
    pub fn count(&self, value: u8) -> u64 {
        self.bins[value as usize]
    }

    /// Total number of counted pixels.
    pub fn total(&self) -> u64 {
        self.bins.iter().sum()
    }

    /// Largest bin count.
    pub fn peak(&self) -> u64 {
        self.bins.iter().copied().max().unwrap_or(0)
    }

    /// Running sum of the bins; the last entry equals [`Histogram::total`].
    pub fn cumulative(&self) -> Vec<u64> {
        self.bins
            .iter()
            .scan(0u64, |acc, &count| {
                *acc += count;
                Some(*acc)
            })
            .collect()
    }

    /// Lowest and highest intensity with a non-zero count.
    pub fn range(&self) -> Option<(u8, u8)> {
        let lo = self.bins.iter().position(|&c| c > 0)?;
        let hi = self.bins.iter().rposition(|&c| c > 0)?;
        Some((lo as u8, hi as u8))
    }
}

impl TryFrom<Vec<u64>> for Histogram {
    type Error = EngineError;

    fn try_from(bins: Vec<u64>) -> Result<Self, Self::Error> {
        if bins.len() != BINS {
            return Err(EngineError::BufferLength {
                expected: BINS,
                actual: bins.len(),
            });
        }
        Ok(Self { bins })
    }
}

impl From<Histogram> for Vec<u64> {
    fn from(histogram: Histogram) -> Self {
        histogram.bins
    }
}

/// Compute the 256-bin luminance histogram of a grid.
pub fn histogram(grid: &PixelGrid) -> EngineResult<Histogram> {
    Histogram::compute(grid)
}
