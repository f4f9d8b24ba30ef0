//! Error types shared by the codec, the algorithms and the session.

use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading or writing a raster file.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("not a P5 (binary) or P2 (ascii) PGM file")]
    BadMagic,

    #[error("invalid PGM dimensions")]
    BadDimensions,

    #[error("invalid PGM max value")]
    BadMaxVal,

    #[error("pixel data truncated: expected {expected} samples, read {read}")]
    TruncatedData { expected: usize, read: usize },

    #[error("failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Main error type for image processing operations.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("no image loaded; load an image first")]
    NoImageLoaded,

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("dimensions {width}x{height} must be divisible by {factor} for shrinking")]
    Dimension {
        width: usize,
        height: usize,
        factor: usize,
    },

    #[error("unsupported selection: {0}")]
    UnsupportedFactor(String),

    #[error("failed to allocate {bytes} bytes for {what}")]
    Allocation { what: &'static str, bytes: usize },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for processing operations.
pub type Result<T> = std::result::Result<T, ProcessError>;
