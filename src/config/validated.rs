//! Validated tool options.
//!
//! Resolves CLI arguments against built-in defaults. All validation is
//! performed during construction.

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::render::DocumentFormat;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;

/// Destination of the structured document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Standard error, the default.
    Stderr,
    /// A file, created or truncated.
    File(PathBuf),
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stderr => write!(f, "stderr"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fully validated options ready for use by the application.
#[derive(Debug, Clone)]
pub struct ValidatedOptions {
    /// Encoding of the structured document
    pub format: DocumentFormat,

    /// Destination of the structured document
    pub output: OutputTarget,

    /// Whether to print the text tree to standard output
    pub print_tree: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Options {{ format: {}, output: {}, print_tree: {} }}",
            self.format, self.output, self.print_tree,
        )
    }
}

impl ValidatedOptions {
    /// Creates validated options from CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the output path is empty or a directory.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        Ok(Self {
            format: cli.format.map_or(defaults::FORMAT, DocumentFormat::from),
            output: Self::resolve_output(cli)?,
            print_tree: defaults::PRINT_TREE && !cli.no_tree,
            verbose: cli.verbose,
        })
    }

    fn resolve_output(cli: &Cli) -> Result<OutputTarget, ConfigError> {
        let Some(path) = &cli.output else {
            return Ok(OutputTarget::Stderr);
        };

        if path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidOutput {
                path: path.clone(),
                reason: "path is empty",
            });
        }
        if path.is_dir() {
            return Err(ConfigError::InvalidOutput {
                path: path.clone(),
                reason: "path is a directory",
            });
        }

        Ok(OutputTarget::File(path.clone()))
    }

    /// Opens the document destination for writing.
    ///
    /// # Errors
    ///
    /// Returns an error if the output file cannot be created.
    pub fn open_output(&self) -> Result<Box<dyn Write>, ConfigError> {
        match &self.output {
            OutputTarget::Stderr => Ok(Box::new(io::stderr().lock())),
            OutputTarget::File(path) => {
                let file = File::create(path).map_err(|source| ConfigError::FileCreate {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(io::BufWriter::new(file)))
            }
        }
    }
}
