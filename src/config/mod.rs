//! Option layer for doctool.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`FormatArg`])
//! - Validated options ([`ValidatedOptions`], [`OutputTarget`])
//! - Default values ([`defaults`])
//!
//! # Output Streams
//!
//! The text tree goes to standard output. The structured document goes to
//! standard error unless `--output` names a file, so the two can be
//! redirected independently.

mod cli;
pub mod defaults;
mod error;
mod validated;

#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, FormatArg};
pub use error::ConfigError;
pub use validated::{OutputTarget, ValidatedOptions};
