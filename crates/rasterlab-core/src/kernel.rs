//! Square convolution kernels.

use crate::error::{EngineError, EngineResult};

/// A square weight matrix with odd side `2 * radius + 1`, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    side: usize,
    weights: Vec<f64>,
}

impl Kernel {
    /// Build a kernel from row-major weights.
    pub fn new(side: usize, weights: Vec<f64>) -> EngineResult<Self> {
        if side % 2 == 0 {
            return Err(EngineError::InvalidKernel("side length must be odd"));
        }
        if weights.len() != side * side {
            return Err(EngineError::InvalidKernel("weight count must equal side squared"));
        }
        if weights.iter().any(|w| !w.is_finite()) {
            return Err(EngineError::InvalidKernel("weights must be finite"));
        }
        Ok(Self { side, weights })
    }

    /// Build a 3×3 kernel from a fixed array.
    pub fn from_3x3(rows: [[f64; 3]; 3]) -> EngineResult<Self> {
        Self::new(3, rows.iter().flatten().copied().collect())
    }

    /// Uniform averaging kernel of the given radius.
    pub fn box_filter(radius: usize) -> Self {
        let side = 2 * radius + 1;
        let weight = 1.0 / (side * side) as f64;
        Self {
            side,
            weights: vec![weight; side * side],
        }
    }

    /// Outer product of a 1D tap vector with itself, scaled by `1 / norm`.
    pub fn separable(taps: &[f64], norm: f64) -> EngineResult<Self> {
        let weights = taps
            .iter()
            .flat_map(|&a| taps.iter().map(move |&b| a * b / norm))
            .collect();
        Self::new(taps.len(), weights)
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn radius(&self) -> usize {
        self.side / 2
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Weight at row `ky`, column `kx`.
    pub fn weight(&self, kx: usize, ky: usize) -> f64 {
        self.weights[ky * self.side + kx]
    }

    /// Sum of all weights; the gain applied to a constant field.
    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_side_is_rejected() {
        assert!(matches!(Kernel::new(2, vec![0.25; 4]), Err(EngineError::InvalidKernel(_))));
        assert!(Kernel::new(0, vec![]).is_err());
    }

    #[test]
    fn test_weight_count_must_match() {
        assert!(Kernel::new(3, vec![1.0; 8]).is_err());
    }

    #[test]
    fn test_from_3x3_rejects_non_finite_weights() {
        let rows = [[0.0, 0.0, 0.0], [0.0, f64::NAN, 0.0], [0.0, 0.0, 0.0]];
        assert!(matches!(Kernel::from_3x3(rows), Err(EngineError::InvalidKernel(_))));
        let identity = [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]];
        assert_eq!(Kernel::from_3x3(identity).unwrap().sum(), 1.0);
    }

    #[test]
    fn test_box_filter_sums_to_one() {
        let k = Kernel::box_filter(2);
        assert_eq!(k.side(), 5);
        assert_eq!(k.radius(), 2);
        assert!((k.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_separable_binomial() {
        let k = Kernel::separable(&[1.0, 4.0, 6.0, 4.0, 1.0], 256.0).unwrap();
        assert_eq!(k.weight(2, 2), 36.0 / 256.0);
        assert_eq!(k.weight(0, 1), 4.0 / 256.0);
        assert!((k.sum() - 1.0).abs() < 1e-12);
    }
}
