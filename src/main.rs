//! doctool: configuration reference generator
//!
//! Entry point for the doctool application.

use doctool::config::{Cli, ValidatedOptions};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, print_output_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let options = match ValidatedOptions::from_cli(&cli) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_output_hint(&e);
            return exit_code::DOC_ERROR;
        }
    };

    setup_tracing(options.verbose);
    tracing::debug!("{options}");

    match run::execute(&options) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) if e.is_output_failure() => {
            tracing::error!("{e}");
            exit_code::output_error()
        }
        Err(e) => {
            tracing::error!("{e}");
            exit_code::DOC_ERROR
        }
    }
}
