// Rust guideline compliant 2026-02-06

//! Error types for the mdmerge core library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for merge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for merge operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A candidate file's bytes are not valid UTF-8 text.
    #[error("File {} is not valid UTF-8", .path.display())]
    Decode {
        /// Path of the file that failed to decode.
        path: PathBuf,
        /// Underlying UTF-8 error.
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Invalid configuration value.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
