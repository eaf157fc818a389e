//! Error types for flag registration.

use thiserror::Error;

/// Error type for flag set operations.
///
/// Any of these aborts documentation generation; no partial tree is
/// produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlagError {
    /// A flag with the same name is already registered.
    #[error("Flag redefined: {name}")]
    Duplicate {
        /// The conflicting flag name
        name: String,
    },

    /// No flag with the given name exists.
    #[error("No such flag: {name}")]
    Unknown {
        /// The requested flag name
        name: String,
    },
}
