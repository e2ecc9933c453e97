use std::path::PathBuf;

use thiserror::Error;

/// Errors of the tooling around the lexer. Tokenizing itself never fails.
#[derive(Error, Debug)]
pub enum RmsError {
    #[error("IOError: {0}")]
    Io(#[from] std::io::Error),

    #[error("FileNotFoundError: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Expected {} to be a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("No .rms files found in: {}", .0.display())]
    NoMaps(PathBuf),

    #[error("Style sheet not found: {}", .0.display())]
    MissingStyle(PathBuf),

    #[error("JSONError: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{failed} of {total} maps could not be rendered")]
    RenderFailed { failed: usize, total: usize },
}
