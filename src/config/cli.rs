//! CLI argument parsing using clap.
//!
//! Defines the command-line interface of the documentation tool.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::render::DocumentFormat;

/// doctool: configuration reference generator
///
/// Prints the configuration tree of the bundled service with the flag
/// controlling each field, and writes a structured document describing
/// every field and configuration block.
#[derive(Debug, Parser)]
#[command(name = "doctool")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Encoding of the structured document
    #[arg(long, short, value_enum)]
    pub format: Option<FormatArg>,

    /// Write the structured document to this file instead of standard error
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Do not print the text tree to standard output
    #[arg(long = "no-tree")]
    pub no_tree: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Document format argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// YAML document
    #[value(name = "yaml")]
    Yaml,
    /// Pretty-printed JSON document
    #[value(name = "json")]
    Json,
    /// TOML document
    #[value(name = "toml")]
    Toml,
}

impl From<FormatArg> for DocumentFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Yaml => Self::Yaml,
            FormatArg::Json => Self::Json,
            FormatArg::Toml => Self::Toml,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
