use thiserror::Error;

/// Errors raised by the editing core.
///
/// The core never performs I/O, so every variant describes a bad input rather
/// than a transient failure. Nothing here is worth retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("pixel ({x}, {y}) is outside a {width}x{height} picture")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("invalid picture dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("malformed action: {0}")]
    MalformedAction(String),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

/// Errors from the file boundary (import, export, settings files).
#[derive(Error, Debug)]
pub enum FileError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid settings file: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Editor(#[from] EditorError),
}

pub type FileResult<T> = Result<T, FileError>;
