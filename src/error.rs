//! Error types for verificar
//!
//! Input, decoding, and parse failures are hard failures: there is one unit
//! of work per invocation and no recovery path.

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for check operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub enum CliError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Not a file (e.g., directory)
    #[error("Not a file: {0}")]
    NotAFile(PathBuf),

    /// Score buffer shorter than the fixed decode window
    #[error("Score buffer too short: need {needed} bytes, got {actual}")]
    BufferTooShort { needed: usize, actual: usize },

    /// Expected-label text is not a base-10 integer
    #[error("Invalid expected label {0:?}: not a base-10 integer")]
    InvalidLabel(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failed
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Get exit code for this error.
    ///
    /// Every input, decoding, and parse failure exits 2, keeping it
    /// distinguishable from a confirmed mismatch (exit 1) and a confirmed
    /// match (exit 0).
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(2)
    }
}
