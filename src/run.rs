//! Application execution logic.
//!
//! This module documents the bundled service configuration and writes the
//! text tree and the structured document to their destinations.

use std::io::{self, Write};

use thiserror::Error;

use doctool::config::{ConfigError, ValidatedOptions};
use doctool::docs::{DocError, Documentation, generate};
use doctool::render::RenderError;
use doctool::sample;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Documentation generation failed.
    #[error("Failed to document configuration: {0}")]
    Docs(#[source] DocError),

    /// The output destination could not be opened.
    #[error(transparent)]
    Output(ConfigError),

    /// Writing the tree or the document failed.
    #[error("Failed to write output: {0}")]
    Render(#[source] RenderError),
}

impl RunError {
    /// Whether the failure happened while producing output rather than
    /// while documenting the configuration.
    #[must_use]
    pub const fn is_output_failure(&self) -> bool {
        matches!(self, Self::Output(_) | Self::Render(_))
    }
}

/// Documents the bundled service configuration.
///
/// # Errors
///
/// Returns [`RunError::Docs`] if the registry is invalid or flag
/// registration fails.
pub fn document() -> Result<Documentation, RunError> {
    let registry = sample::blocks().map_err(|e| RunError::Docs(e.into()))?;
    let mut config = sample::Config::default();
    generate(&mut config, &registry).map_err(RunError::Docs)
}

/// Executes one documentation run with the given options.
///
/// # Errors
///
/// Returns an error if documenting or writing fails.
pub fn execute(options: &ValidatedOptions) -> Result<(), RunError> {
    let docs = document()?;
    let stdout = io::stdout().lock();
    let output = options.open_output().map_err(RunError::Output)?;
    emit(&docs, options, stdout, output)
}

/// Writes the text tree to `tree_out` (when enabled) and the structured
/// document to `doc_out`.
fn emit<T: Write, D: Write>(
    docs: &Documentation,
    options: &ValidatedOptions,
    mut tree_out: T,
    doc_out: D,
) -> Result<(), RunError> {
    if options.print_tree {
        writeln!(tree_out, "{}", docs.text)
            .and_then(|()| tree_out.flush())
            .map_err(|e| RunError::Render(RenderError::Io(e)))?;
    }

    docs.document
        .write_to(options.format, doc_out)
        .map_err(RunError::Render)?;
    tracing::debug!(format = %options.format, output = %options.output, "Wrote document");
    Ok(())
}
