//! Threshold-only approximation of the Canny detector.
//!
//! Gaussian blur → Sobel magnitude → one global cutoff at a fraction of the
//! strongest response. There is no non-maximum suppression, no direction
//! quantization and no hysteresis; edges come out several pixels thick.

use crate::edges::sobel::sobel;
use crate::error::EngineResult;
use crate::filters::gaussian::gaussian_blur;
use crate::image::{ColorLayout, PixelGrid};
use crate::params::CannyOptions;

/// Binary edge map with the default threshold ratio.
pub fn approximate_canny(grid: &PixelGrid) -> EngineResult<PixelGrid> {
    approximate_canny_with(grid, &CannyOptions::default())
}

/// Binary edge map: 255 where the blurred gradient reaches
/// `threshold_ratio × max`, else 0.
///
/// An image without any gradient has `max = 0`, so every pixel passes the
/// cutoff and the map is all 255.
pub fn approximate_canny_with(grid: &PixelGrid, options: &CannyOptions) -> EngineResult<PixelGrid> {
    options.validate()?;
    let magnitude = sobel(&gaussian_blur(grid)?)?;
    Ok(threshold(&magnitude, options.threshold_ratio))
}

/// Keep samples at or above `ratio × max` of a single-channel magnitude map.
fn threshold(magnitude: &PixelGrid, ratio: f64) -> PixelGrid {
    let max = magnitude.as_raw().iter().copied().max().unwrap_or(0);
    let cutoff = ratio * max as f64;
    tracing::debug!("canny: max gradient {max}, threshold {cutoff:.2}");

    let data = magnitude
        .as_raw()
        .iter()
        .map(|&v| if v as f64 >= cutoff { 255 } else { 0 })
        .collect();
    PixelGrid::from_parts(
        magnitude.width(),
        magnitude.height(),
        ColorLayout::Gray,
        data,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    fn square(size: u32) -> PixelGrid {
        let lo = size / 3;
        let hi = 2 * size / 3;
        PixelGrid::from_gray_fn(size, size, |x, y| {
            if (lo..hi).contains(&x) && (lo..hi).contains(&y) { 220 } else { 20 }
        })
    }

    #[test]
    fn test_output_is_binary() {
        let out = approximate_canny(&square(30)).unwrap();
        assert!(out.as_raw().iter().all(|&v| v == 0 || v == 255));
        assert!(out.as_raw().contains(&255));
    }

    #[test]
    fn test_edges_follow_the_square_outline() {
        let out = approximate_canny(&square(30)).unwrap();
        // On the left boundary of the square, far from its center.
        assert_eq!(out.sample(10, 15, 0), 255);
        assert_eq!(out.sample(15, 15, 0), 0);
        assert_eq!(out.sample(3, 3, 0), 0);
    }

    #[test]
    fn test_flat_image_passes_zero_cutoff() {
        let grid = PixelGrid::filled(12, 12, ColorLayout::Gray, 99);
        let out = approximate_canny(&grid).unwrap();
        assert!(out.as_raw().iter().all(|&v| v == 255));
    }

    #[test]
    fn test_cutoff_is_inclusive() {
        // max = 200, ratio 0.3 → cutoff exactly 60.
        let magnitude = PixelGrid::gray(4, 1, vec![200, 60, 59, 0]).unwrap();
        assert_eq!(threshold(&magnitude, 0.3).as_raw(), &[255, 255, 0, 0]);

        // max = 100, ratio 0.5 → cutoff exactly 50.
        let magnitude = PixelGrid::gray(3, 1, vec![100, 50, 49]).unwrap();
        assert_eq!(threshold(&magnitude, 0.5).as_raw(), &[255, 255, 0]);
    }

    #[test]
    fn test_higher_ratio_keeps_fewer_pixels() {
        let grid = square(30);
        let count = |ratio: f64| {
            let opts = CannyOptions { threshold_ratio: ratio };
            let out = approximate_canny_with(&grid, &opts).unwrap();
            out.as_raw().iter().filter(|&&v| v == 255).count()
        };
        assert!(count(0.9) <= count(0.3));
        assert!(count(0.3) <= count(0.1));
    }

    #[test]
    fn test_invalid_ratio_is_rejected() {
        let opts = CannyOptions { threshold_ratio: 1.5 };
        assert!(matches!(
            approximate_canny_with(&square(9), &opts),
            Err(EngineError::InvalidParameter { .. })
        ));
    }
}
