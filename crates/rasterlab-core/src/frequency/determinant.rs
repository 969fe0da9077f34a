//! 3×3 local determinant response.
//!
//! Treats each interior pixel's neighborhood as a 3×3 matrix and maps
//! `|det| / scale` into `[0, 255]`. A crude structure indicator: flat or
//! linearly varying neighborhoods have rank below 3 and give 0. It is not a
//! calibrated corner detector.

use crate::error::EngineResult;
use crate::grayscale::to_gray_scaled;
use crate::image::{ColorLayout, PixelGrid};
use crate::params::DeterminantOptions;

/// Response map with the default cap (512) and scale (100).
pub fn determinant_response(grid: &PixelGrid) -> EngineResult<PixelGrid> {
    determinant_response_with(grid, &DeterminantOptions::default())
}

/// Response map: `min(255, floor(|det| / scale))` per interior pixel, 0 on
/// the one-pixel border.
pub fn determinant_response_with(
    grid: &PixelGrid,
    options: &DeterminantOptions,
) -> EngineResult<PixelGrid> {
    options.validate()?;
    let gray = to_gray_scaled(grid, options.max_side)?;
    let w = gray.width() as usize;
    let h = gray.height() as usize;
    let src = gray.as_raw();
    let mut out = vec![0u8; w * h];

    tracing::debug!("determinant response on {w}x{h}, scale {}", options.scale);

    if w >= 3 && h >= 3 {
        for y in 1..h - 1 {
            for x in 1..w - 1 {
                let mut m = [[0.0_f64; 3]; 3];
                for (j, row) in m.iter_mut().enumerate() {
                    let base = (y + j - 1) * w + x - 1;
                    for (i, cell) in row.iter_mut().enumerate() {
                        *cell = src[base + i] as f64;
                    }
                }
                let det = determinant3(&m);
                out[y * w + x] = (det.abs() / options.scale).min(255.0) as u8;
            }
        }
    }

    Ok(PixelGrid::from_parts(
        gray.width(),
        gray.height(),
        ColorLayout::Gray,
        out,
    ))
}

/// Determinant by cofactor expansion along the first row.
pub fn determinant3(m: &[[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cofactor_expansion() {
        assert_eq!(determinant3(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]), 1.0);
        assert_eq!(determinant3(&[[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 2.0]]), 6.0);
        assert_eq!(determinant3(&[[5.0; 3]; 3]), 0.0);
    }

    #[test]
    fn test_constant_neighborhood_gives_zero() {
        let grid = PixelGrid::filled(3, 3, ColorLayout::Gray, 200);
        let out = determinant_response(&grid).unwrap();
        assert_eq!(out.sample(1, 1, 0), 0);
    }

    #[test]
    fn test_linear_ramp_gives_zero() {
        let grid = PixelGrid::from_gray_fn(6, 6, |x, y| (x * 10 + y * 20) as u8);
        let out = determinant_response(&grid).unwrap();
        assert!(out.as_raw().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_diagonal_neighborhood_scales_and_saturates() {
        // Identity-like patch: det = 100³ → saturates.
        let grid = PixelGrid::from_gray_fn(3, 3, |x, y| if x == y { 100 } else { 0 });
        assert_eq!(determinant_response(&grid).unwrap().sample(1, 1, 0), 255);

        // det = 10 × 10 × 50 = 5000 → 50.
        let grid = PixelGrid::from_gray_fn(3, 3, |x, y| match (x, y) {
            (0, 0) | (1, 1) => 10,
            (2, 2) => 50,
            _ => 0,
        });
        assert_eq!(determinant_response(&grid).unwrap().sample(1, 1, 0), 50);
    }

    #[test]
    fn test_border_is_zero() {
        let grid = PixelGrid::from_gray_fn(4, 4, |x, y| if x == y { 250 } else { 0 });
        let out = determinant_response(&grid).unwrap();
        for i in 0..4 {
            assert_eq!(out.sample(i, 0, 0), 0);
            assert_eq!(out.sample(0, i, 0), 0);
        }
    }

    #[test]
    fn test_custom_scale() {
        let grid = PixelGrid::from_gray_fn(3, 3, |x, y| match (x, y) {
            (0, 0) | (1, 1) => 10,
            (2, 2) => 50,
            _ => 0,
        });
        let opts = DeterminantOptions { scale: 1000.0, ..Default::default() };
        assert_eq!(determinant_response_with(&grid, &opts).unwrap().sample(1, 1, 0), 5);
    }
}
