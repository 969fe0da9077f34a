//! Spatial filters built on the convolution engine.

pub mod blur;
pub mod enhance;
pub mod gaussian;
pub mod sharpen;

pub use blur::blur;
pub use enhance::enhance;
pub use gaussian::gaussian_blur;
pub use sharpen::sharpen;
