//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use doctool::config::ConfigError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Documentation error (exit code 1) - invalid args, flag conflicts, bad block registry.
    pub const DOC_ERROR: ExitCode = ExitCode::FAILURE;

    /// Output error (exit code 2) - encoding failure, unwritable destination.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn output_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common option errors.
pub fn print_output_hint(error: &ConfigError) {
    if let ConfigError::InvalidOutput { .. } = error {
        eprintln!("\nPass a file path to --output, or omit it to write the document to stderr.");
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr at `warn` by default so they stay out of the text tree.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
