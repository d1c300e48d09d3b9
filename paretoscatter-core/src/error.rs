//! Error types for paretoscatter

use thiserror::Error;

/// Main error type for paretoscatter operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Index {index} out of bounds for {len} columns")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Render error: {0}")]
    Render(String),
}

/// Result type alias for paretoscatter operations
pub type Result<T> = std::result::Result<T, Error>;

impl From<ndarray::ShapeError> for Error {
    fn from(e: ndarray::ShapeError) -> Self {
        Error::ShapeMismatch(e.to_string())
    }
}
