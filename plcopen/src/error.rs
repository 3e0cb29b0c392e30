use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing a project.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Serialization failed: {0}")]
    Serialize(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid output path: {}", .0.display())]
    InvalidPath(PathBuf),
}
