//! Engine error type.

/// Errors reported by the transform engine.
///
/// Every variant describes input the engine refuses to process. Flat or
/// otherwise degenerate images are not errors; the operators handle them
/// with explicit identity or zero results.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("grid has zero area ({width}x{height})")]
    EmptyGrid { width: u32, height: u32 },
    #[error("pixel buffer holds {actual} samples, expected {expected}")]
    BufferLength { expected: usize, actual: usize },
    #[error("unsupported channel count: {0}")]
    UnsupportedChannels(usize),
    #[error("invalid kernel: {0}")]
    InvalidKernel(&'static str),
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Result alias used throughout the engine.
pub type EngineResult<T> = Result<T, EngineError>;
