//! Tests for validated options.

use std::io::Write;

use tempfile::tempdir;

use super::ConfigError;
use super::cli::Cli;
use super::validated::{OutputTarget, ValidatedOptions};
use crate::render::DocumentFormat;

/// Helper to create CLI args from a slice
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["doctool"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

mod defaults {
    use super::*;

    #[test]
    fn no_args_uses_defaults() {
        let options = ValidatedOptions::from_cli(&cli(&[])).unwrap();

        assert_eq!(options.format, DocumentFormat::Yaml);
        assert_eq!(options.output, OutputTarget::Stderr);
        assert!(options.print_tree);
        assert!(!options.verbose);
    }

    #[test]
    fn cli_overrides_defaults() {
        let options = ValidatedOptions::from_cli(&cli(&["--format", "json", "--no-tree", "-v"]))
            .unwrap();

        assert_eq!(options.format, DocumentFormat::Json);
        assert!(!options.print_tree);
        assert!(options.verbose);
    }

    #[test]
    fn display_summarizes_options() {
        let options = ValidatedOptions::from_cli(&cli(&["--format", "toml"])).unwrap();

        let display = options.to_string();

        assert!(display.contains("format: toml"));
        assert!(display.contains("output: stderr"));
    }
}

mod output {
    use super::*;

    #[test]
    fn file_path_is_accepted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reference.yaml");
        let options =
            ValidatedOptions::from_cli(&cli(&["--output", path.to_str().unwrap()])).unwrap();

        assert_eq!(options.output, OutputTarget::File(path));
    }

    #[test]
    fn directory_path_is_rejected() {
        let dir = tempdir().unwrap();
        let result = ValidatedOptions::from_cli(&cli(&["--output", dir.path().to_str().unwrap()]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidOutput { reason: "path is a directory", .. })
        ));
    }

    #[test]
    fn empty_path_is_rejected() {
        let result = ValidatedOptions::from_cli(&cli(&["--output", ""]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidOutput { reason: "path is empty", .. })
        ));
    }

    #[test]
    fn open_output_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reference.json");
        let options =
            ValidatedOptions::from_cli(&cli(&["--output", path.to_str().unwrap()])).unwrap();

        {
            let mut writer = options.open_output().unwrap();
            writer.write_all(b"{}\n").unwrap();
            writer.flush().unwrap();
        }

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}\n");
    }

    #[test]
    fn open_output_in_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("reference.yaml");
        let options =
            ValidatedOptions::from_cli(&cli(&["--output", path.to_str().unwrap()])).unwrap();

        let result = options.open_output();

        assert!(matches!(result, Err(ConfigError::FileCreate { .. })));
    }
}
