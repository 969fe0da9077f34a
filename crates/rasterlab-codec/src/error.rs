use rasterlab_core::EngineError;

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("empty input buffer")]
    EmptyInput,
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("failed to encode {format}: {source}")]
    Encode {
        format: &'static str,
        source: image::ImageError,
    },
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Engine(#[from] EngineError),
}
