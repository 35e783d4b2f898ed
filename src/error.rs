use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the undo/redo history
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HistoryError {
    /// Undo or redo was requested with nothing on the matching stack
    #[error("history is empty")]
    EmptyHistory,
}

/// Errors crossing the image codec boundary
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("image codec failure: {0}")]
    Image(#[from] image::ImageError),

    #[error("surface has zero extent ({width}x{height})")]
    ZeroDimensions { width: u32, height: u32 },
}

/// Errors that can occur while saving or loading a surface
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Errors that can occur while reading the canvas configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
