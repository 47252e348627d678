//! Configuration handling for the CLI.
//!
//! This module converts CLI arguments into a validated configuration and
//! defines the application exit codes.

use crate::cli::Args;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration and file access.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// Failed to read the BOM file.
    #[error("failed to read BOM file '{}': {source}", path.display())]
    ReadBom {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Application exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// The report was produced successfully.
    Success = 0,
    /// Application startup failed (wrong configuration or unreadable file).
    StartupFailure = 1,
    /// The BOM file could not be parsed.
    ParseFailed = 2,
}

impl From<ExitCode> for u8 {
    fn from(code: ExitCode) -> Self {
        code as u8
    }
}

/// Validated and processed configuration for running the reporter.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Path to the BOM file.
    pub bom_path: PathBuf,
    /// Optional override of the top-N count from the file header.
    pub limit_override: Option<usize>,
    /// Whether to output JSON.
    pub json_output: bool,
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let bom_path = args.bom_file.canonicalize().map_err(|e| {
            ConfigError::Invalid(format!(
                "BOM file path '{}' is invalid: {}",
                args.bom_file.display(),
                e
            ))
        })?;

        if !bom_path.is_file() {
            return Err(ConfigError::Invalid(format!(
                "BOM file path '{}' is not a file",
                bom_path.display()
            )));
        }

        Ok(Self {
            bom_path,
            limit_override: args.top,
            json_output: args.json,
        })
    }

    /// Reads the BOM file contents.
    pub fn read_bom(&self) -> Result<String, ConfigError> {
        std::fs::read_to_string(&self.bom_path).map_err(|source| ConfigError::ReadBom {
            path: self.bom_path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn write_bom(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("example.bom");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(u8::from(ExitCode::Success), 0);
        assert_eq!(u8::from(ExitCode::StartupFailure), 1);
        assert_eq!(u8::from(ExitCode::ParseFailed), 2);
    }

    #[test]
    fn test_validated_config_from_args() {
        let dir = TempDir::new().unwrap();
        let path = write_bom(&dir, "1\nZ1;40001;Keystone\n");

        let args = Args::parse_from(["bomtop", path.to_str().unwrap()]);
        let config = ValidatedConfig::from_args(&args).unwrap();

        assert!(config.bom_path.ends_with("example.bom"));
        assert_eq!(config.limit_override, None);
        assert!(!config.json_output);
    }

    #[test]
    fn test_validated_config_missing_file() {
        let args = Args::parse_from(["bomtop", "/nonexistent/example.bom"]);
        let result = ValidatedConfig::from_args(&args);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("invalid"));
    }

    #[test]
    fn test_validated_config_directory_is_not_a_file() {
        let dir = TempDir::new().unwrap();
        let args = Args::parse_from(["bomtop", dir.path().to_str().unwrap()]);
        let result = ValidatedConfig::from_args(&args);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a file"));
    }

    #[test]
    fn test_validated_config_top_override() {
        let dir = TempDir::new().unwrap();
        let path = write_bom(&dir, "1\nZ1;40001;Keystone\n");

        let args = Args::parse_from(["bomtop", "--top", "5", path.to_str().unwrap()]);
        let config = ValidatedConfig::from_args(&args).unwrap();
        assert_eq!(config.limit_override, Some(5));
    }

    #[test]
    fn test_read_bom() {
        let dir = TempDir::new().unwrap();
        let path = write_bom(&dir, "1\nZ1;40001;Keystone\n");

        let args = Args::parse_from(["bomtop", path.to_str().unwrap()]);
        let config = ValidatedConfig::from_args(&args).unwrap();
        assert_eq!(config.read_bom().unwrap(), "1\nZ1;40001;Keystone\n");
    }
}
