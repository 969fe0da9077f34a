//! Cross-operator properties checked through the public API.
//!
//! Run with: `cargo test -p rasterlab-core`

use rasterlab_core::frequency::{dct_magnitude_with, dft_magnitude_with};
use rasterlab_core::{
    ColorLayout, EngineError, Histogram, PixelGrid, SpectrumOptions, approximate_canny, blur,
    determinant_response, dft_magnitude, enhance, equalize, gaussian_blur, histogram, render,
    sharpen, sobel, stretch, to_gray,
};

/// A small RGB test image with a gradient and a bright square.
fn create_test_scene(width: u32, height: u32) -> PixelGrid {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            let inside = x > width / 4 && x < 3 * width / 4 && y > height / 4 && y < 3 * height / 4;
            let r = if inside { 240 } else { (x * 255 / width.max(1)) as u8 };
            let g = if inside { 230 } else { (y * 255 / height.max(1)) as u8 };
            let b = 60;
            data.extend_from_slice(&[r, g, b]);
        }
    }
    PixelGrid::new(width, height, ColorLayout::Rgb, data).expect("valid scene")
}

fn all_operators(grid: &PixelGrid) -> Vec<(&'static str, PixelGrid)> {
    let small = SpectrumOptions { max_side: 12 };
    vec![
        ("gray", to_gray(grid).unwrap()),
        ("blur", blur(grid, 2).unwrap()),
        ("sharpen", sharpen(grid, 3.0).unwrap()),
        ("gaussian", gaussian_blur(grid).unwrap()),
        ("enhance", enhance(grid, 1.8, 30.0).unwrap()),
        ("sobel", sobel(grid).unwrap()),
        ("canny", approximate_canny(grid).unwrap()),
        ("equalize", equalize(grid).unwrap()),
        ("stretch", stretch(grid).unwrap()),
        ("dft", dft_magnitude_with(grid, &small).unwrap()),
        ("dct", dct_magnitude_with(grid, &small).unwrap()),
        ("determinant", determinant_response(grid).unwrap()),
        ("render", render(&histogram(grid).unwrap())),
    ]
}

#[test]
fn test_operators_never_mutate_their_input() {
    let scene = create_test_scene(24, 18);
    let before = scene.clone();
    let _ = all_operators(&scene);
    assert_eq!(scene, before);
}

#[test]
fn test_spatial_operators_keep_dimensions() {
    let scene = create_test_scene(24, 18);
    for (name, out) in all_operators(&scene) {
        match name {
            "dft" | "dct" => assert_eq!((out.width(), out.height()), (12, 9), "{name}"),
            "render" => assert_eq!((out.width(), out.height()), (512, 200), "{name}"),
            _ => assert_eq!((out.width(), out.height()), (24, 18), "{name}"),
        }
    }
}

#[test]
fn test_analysis_operators_return_grayscale() {
    let scene = create_test_scene(16, 16);
    for (name, out) in all_operators(&scene) {
        let expected = match name {
            "blur" | "sharpen" | "enhance" | "render" => ColorLayout::Rgb,
            _ => ColorLayout::Gray,
        };
        assert_eq!(out.layout(), expected, "{name}");
    }
}

#[test]
fn test_every_operator_rejects_empty_grids() {
    let empty = PixelGrid::new(0, 4, ColorLayout::Rgb, vec![]).unwrap();
    assert!(matches!(to_gray(&empty), Err(EngineError::EmptyGrid { .. })));
    assert!(blur(&empty, 3).is_err());
    assert!(sharpen(&empty, 1.0).is_err());
    assert!(enhance(&empty, 1.0, 0.0).is_err());
    assert!(sobel(&empty).is_err());
    assert!(approximate_canny(&empty).is_err());
    assert!(histogram(&empty).is_err());
    assert!(equalize(&empty).is_err());
    assert!(stretch(&empty).is_err());
    assert!(dft_magnitude(&empty).is_err());
    assert!(determinant_response(&empty).is_err());
    assert!(matches!(
        determinant_response(&empty),
        Err(EngineError::EmptyGrid { width: 0, height: 4 })
    ));
}

#[test]
fn test_constant_image_invariants() {
    let flat = PixelGrid::filled(11, 9, ColorLayout::Gray, 137);
    for radius in 0..5 {
        assert_eq!(blur(&flat, radius).unwrap(), flat);
    }
    assert_eq!(sharpen(&flat, 1.0).unwrap(), flat);
    assert!(sobel(&flat).unwrap().as_raw().iter().all(|&v| v == 0));
    assert!(determinant_response(&flat).unwrap().as_raw().iter().all(|&v| v == 0));
    assert_eq!(stretch(&flat).unwrap(), flat);
}

#[test]
fn test_equalized_histogram_is_cumulative_and_stable() {
    let scene = create_test_scene(32, 20);
    let once = equalize(&scene).unwrap();
    let hist = Histogram::compute(&once).unwrap();
    let cdf = hist.cumulative();
    assert_eq!(cdf.len(), 256);
    assert!(cdf.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*cdf.last().unwrap(), 32 * 20);

    // A second pass moves no value by more than rounding slack.
    let twice = equalize(&once).unwrap();
    let drift = once
        .as_raw()
        .iter()
        .zip(twice.as_raw())
        .map(|(&a, &b)| (a as i32 - b as i32).abs())
        .max()
        .unwrap();
    assert!(drift <= 1, "equalize drifted by {drift}");
}

#[test]
fn test_equalize_two_level_scenario() {
    let grid = PixelGrid::gray(2, 2, vec![0, 0, 255, 255]).unwrap();
    let hist = histogram(&grid).unwrap();
    assert_eq!(hist.count(0), 2);
    assert_eq!(hist.count(255), 2);
    assert_eq!(hist.total(), 4);
    assert_eq!(equalize(&grid).unwrap().as_raw(), &[127, 127, 255, 255]);
}

#[test]
fn test_dft_of_constant_grid_peaks_at_origin() {
    let flat = PixelGrid::filled(10, 10, ColorLayout::Gray, 50);
    let out = dft_magnitude(&flat).unwrap();
    assert_eq!(out.sample(0, 0, 0), 255);
    assert_eq!(out.as_raw().iter().filter(|&&v| v > 0).count(), 1);
}

#[test]
fn test_canny_on_flat_image_marks_everything() {
    let flat = PixelGrid::filled(9, 7, ColorLayout::Rgb, 140);
    let edges = approximate_canny(&flat).unwrap();
    assert!(edges.as_raw().iter().all(|&v| v == 255));
}

#[test]
fn test_oversized_blur_radius_is_a_copy() {
    let scene = create_test_scene(10, 6);
    assert_eq!(blur(&scene, 1_000_000).unwrap(), scene);
}

#[test]
fn test_canny_marks_the_square() {
    let scene = create_test_scene(40, 40);
    let edges = approximate_canny(&scene).unwrap();
    assert!(edges.as_raw().iter().all(|&v| v == 0 || v == 255));
    assert!(edges.as_raw().iter().any(|&v| v == 255));
}
