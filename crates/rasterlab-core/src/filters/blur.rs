//! Box blur.

use crate::convolve::convolve;
use crate::error::EngineResult;
use crate::image::PixelGrid;
use crate::kernel::Kernel;

/// Average every channel over a `(2r+1)²` window.
///
/// `radius <= 0` returns an identical copy. Border pixels within `radius` of
/// an edge are left as they were, so a window that does not fit inside the
/// grid also returns a copy.
pub fn blur(grid: &PixelGrid, radius: i32) -> EngineResult<PixelGrid> {
    grid.ensure_non_empty()?;
    if radius <= 0 {
        return Ok(grid.clone());
    }
    let shortest = grid.width().min(grid.height()) as u64;
    if 2 * radius as u64 >= shortest {
        tracing::debug!(
            "box blur r={radius} exceeds {}x{}, copying",
            grid.width(),
            grid.height()
        );
        return Ok(grid.clone());
    }

    tracing::debug!("box blur r={radius} on {}x{}", grid.width(), grid.height());
    convolve(grid, &Kernel::box_filter(radius as usize))
}
