//! Error types for option validation and output.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for tool option operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The output path cannot receive a document.
    #[error("Invalid output path '{}': {reason}", path.display())]
    InvalidOutput {
        /// The rejected path
        path: PathBuf,
        /// Reason for invalidity
        reason: &'static str,
    },

    /// Failed to create the output file.
    #[error("Failed to create output file '{}': {source}", path.display())]
    FileCreate {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
