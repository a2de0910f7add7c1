//! Batch I/O error types.

use thiserror::Error;

/// Errors that can occur while reading or writing message batches.
#[derive(Debug, Error)]
pub enum BatchError {
    /// Failed to read or write a file.
    #[error("Failed to access file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to decode or encode JSON.
    #[error("Invalid message batch in '{path}': {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
