use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThumbError {
    #[error("failed to decode image: {0}")]
    DecodeError(String),

    #[error("unsupported image format")]
    UnsupportedFormat,

    #[error("image dimensions are zero")]
    ZeroDimensions,

    #[error("side length must be > 0")]
    InvalidSideLength,
}
