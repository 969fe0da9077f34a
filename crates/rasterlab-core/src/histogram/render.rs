//! Bar-chart rendering of a histogram.

use crate::histogram::{BINS, Histogram};
use crate::image::{ColorLayout, PixelGrid};

/// Canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 512;
/// Canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 200;
/// Vertical space not used by bars (half above, half below).
const MARGIN: u32 = 20;
/// Canvas background.
const BACKGROUND: [u8; 3] = [255, 255, 255];
/// Bar color.
const BAR: [u8; 3] = [64, 64, 64];

/// Draw `histogram` as a 512×200 RGB bar chart.
///
/// Bar heights are scaled so the tallest bin spans `200 - 20` rows. Bars sit
/// on a baseline 10 rows above the bottom edge. An all-zero histogram gives
/// a blank canvas.
pub fn render(histogram: &Histogram) -> PixelGrid {
    let w = CANVAS_WIDTH as usize;
    let h = CANVAS_HEIGHT as usize;
    let mut data = BACKGROUND.repeat(w * h);

    let peak = histogram.peak();
    if peak == 0 {
        return PixelGrid::from_parts(CANVAS_WIDTH, CANVAS_HEIGHT, ColorLayout::Rgb, data);
    }

    let usable = (CANVAS_HEIGHT - MARGIN) as f64;
    let step = CANVAS_WIDTH as f64 / BINS as f64;
    let bar_width = step.ceil() as usize;
    let baseline = h - (MARGIN / 2) as usize;

    for (i, &count) in histogram.bins().iter().enumerate() {
        let bar_height = (count as f64 / peak as f64 * usable).round() as usize;
        let x0 = (i as f64 * step).round() as usize;
        for y in baseline - bar_height..baseline {
            for x in x0..(x0 + bar_width).min(w) {
                let idx = (y * w + x) * 3;
                data[idx..idx + 3].copy_from_slice(&BAR);
            }
        }
    }

    PixelGrid::from_parts(CANVAS_WIDTH, CANVAS_HEIGHT, ColorLayout::Rgb, data)
}
