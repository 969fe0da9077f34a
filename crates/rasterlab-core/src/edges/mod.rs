//! Edge detection: Sobel magnitude and the approximate Canny pipeline.

pub mod canny;
pub mod sobel;

pub use canny::{approximate_canny, approximate_canny_with};
pub use sobel::sobel;
