//! Tunable constants of the analysis operators.
//!
//! The defaults reproduce the established behavior. The Canny threshold
//! ratio and the determinant scale are empirical values with no derivation
//! behind them; they are exposed here so callers can tune them.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Downsample cap for the spectral transforms.
pub const SPECTRUM_MAX_SIDE: u32 = 128;
/// Downsample cap for the determinant response.
pub const DETERMINANT_MAX_SIDE: u32 = 512;

/// Settings for the approximate Canny detector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CannyOptions {
    /// Fraction of the strongest gradient a pixel must reach to count as an edge.
    pub threshold_ratio: f64,
}

impl Default for CannyOptions {
    fn default() -> Self {
        Self {
            threshold_ratio: 0.3,
        }
    }
}

impl CannyOptions {
    pub fn validate(&self) -> EngineResult<()> {
        let r = self.threshold_ratio;
        if !r.is_finite() || r <= 0.0 || r > 1.0 {
            return Err(EngineError::InvalidParameter {
                name: "threshold_ratio",
                value: r,
            });
        }
        Ok(())
    }
}

/// Settings for the DFT and DCT magnitude views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpectrumOptions {
    /// Longest side after downsampling.
    pub max_side: u32,
}

impl Default for SpectrumOptions {
    fn default() -> Self {
        Self {
            max_side: SPECTRUM_MAX_SIDE,
        }
    }
}

/// Settings for the 3×3 determinant response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeterminantOptions {
    /// Longest side after downsampling.
    pub max_side: u32,
    /// Divisor applied to `|det|` before clamping to 255.
    pub scale: f64,
}

impl Default for DeterminantOptions {
    fn default() -> Self {
        Self {
            max_side: DETERMINANT_MAX_SIDE,
            scale: 100.0,
        }
    }
}

impl DeterminantOptions {
    pub fn validate(&self) -> EngineResult<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(EngineError::InvalidParameter {
                name: "scale",
                value: self.scale,
            });
        }
        Ok(())
    }
}

/// Every tunable of the engine in one serializable struct.
///
/// Missing fields fall back to their defaults, so a partial JSON document
/// is a valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub canny: CannyOptions,
    pub spectrum: SpectrumOptions,
    pub determinant: DeterminantOptions,
}

impl EngineConfig {
    /// Check every section.
    pub fn validate(&self) -> EngineResult<()> {
        self.canny.validate()?;
        self.determinant.validate()?;
        if self.spectrum.max_side == 0 {
            return Err(EngineError::InvalidParameter {
                name: "spectrum.max_side",
                value: 0.0,
            });
        }
        if self.determinant.max_side == 0 {
            return Err(EngineError::InvalidParameter {
                name: "determinant.max_side",
                value: 0.0,
            });
        }
        Ok(())
    }
}
