//! Rasterlab Codec: the byte boundary of the transform engine.
//!
//! Decodes encoded images into [`PixelGrid`]s and encodes results back,
//! entirely in memory. The path helpers are thin wrappers for callers that
//! own files; the engine itself never touches storage.

pub mod decode;
pub mod encode;
pub mod error;

pub use decode::{decode, from_dynamic, load};
pub use encode::{OutputFormat, encode, recompress, save};
pub use error::CodecError;

pub use rasterlab_core::PixelGrid;
