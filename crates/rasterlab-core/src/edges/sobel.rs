//! Sobel gradient magnitude.
//!
//! - Reduces the input to grayscale.
//! - Correlates each interior pixel's 3×3 neighborhood with the `X` and `Y`
//!   Sobel kernels.
//! - Writes `min(255, floor(sqrt(gx² + gy²)))`; the outer one-pixel border
//!   stays 0.
//!
//! Complexity: O(W·H).

use crate::error::EngineResult;
use crate::grayscale::to_gray;
use crate::image::{ColorLayout, PixelGrid};

type Kernel3 = [[i32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Gradient magnitude map of `grid`.
pub fn sobel(grid: &PixelGrid) -> EngineResult<PixelGrid> {
    let gray = to_gray(grid)?;
    tracing::debug!("sobel on {}x{}", gray.width(), gray.height());
    Ok(magnitude(&gray))
}

fn magnitude(gray: &PixelGrid) -> PixelGrid {
    let w = gray.width() as usize;
    let h = gray.height() as usize;
    let src = gray.as_raw();
    let mut out = vec![0u8; w * h];

    if w < 3 || h < 3 {
        return PixelGrid::from_parts(gray.width(), gray.height(), ColorLayout::Gray, out);
    }

    for y in 1..h - 1 {
        let rows = [
            &src[(y - 1) * w..y * w],
            &src[y * w..(y + 1) * w],
            &src[(y + 1) * w..(y + 2) * w],
        ];
        for x in 1..w - 1 {
            let mut sum_x = 0_i32;
            let mut sum_y = 0_i32;
            for (ky, row) in rows.iter().enumerate() {
                for kx in 0..3 {
                    let v = row[x + kx - 1] as i32;
                    sum_x += SOBEL_KERNEL_X[ky][kx] * v;
                    sum_y += SOBEL_KERNEL_Y[ky][kx] * v;
                }
            }
            let mag = (sum_x as f64).hypot(sum_y as f64);
            out[y * w + x] = mag.min(255.0) as u8;
        }
    }

    PixelGrid::from_parts(gray.width(), gray.height(), ColorLayout::Gray, out)
}
