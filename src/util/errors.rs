//! Error types for descriptor generation.

use std::path::PathBuf;

use thiserror::Error;

/// Filesystem failure during generation. Every variant is fatal.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to read directory: {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write descriptor: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid source pattern `{pattern}`")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

pub type Result<T> = std::result::Result<T, GenerateError>;
