use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Unsupported file type: {}. Only .json files are supported", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Invalid content in {path}: {reason}")]
    CorruptStore { path: String, reason: String },

    #[error("{0}")]
    InvalidInput(String),

    #[error("No book with ID {0}")]
    NotFound(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShelfError>;
