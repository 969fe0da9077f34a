//! Rasterlab Core: pure raster transform engine.
//!
//! Spatial filters, edge detection, histogram tone mapping, and direct
//! frequency-domain views over in-memory pixel grids. Every operator is a
//! pure function returning a new grid; nothing here touches the filesystem
//! or holds state between calls.

pub mod convolve;
pub mod edges;
pub mod error;
pub mod filters;
pub mod frequency;
pub mod grayscale;
pub mod histogram;
pub mod image;
pub mod kernel;
pub mod params;

// Re-exports for convenience.
pub use convolve::convolve;
pub use edges::{approximate_canny, approximate_canny_with, sobel};
pub use error::{EngineError, EngineResult};
pub use filters::{blur, enhance, gaussian_blur, sharpen};
pub use frequency::{
    SpectralTransform, dct_magnitude, determinant_response, dft_magnitude, spectrum,
};
pub use grayscale::{to_gray, to_gray_scaled};
pub use histogram::{Histogram, equalize, histogram, render, stretch};
pub use crate::image::{ColorLayout, PixelGrid};
pub use kernel::Kernel;
pub use params::{CannyOptions, DeterminantOptions, EngineConfig, SpectrumOptions};
