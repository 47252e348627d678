//! CLI module for the BOM top-N reporter.
//!
//! This module provides command-line argument parsing using Clap with
//! environment variable support.

pub mod config;
pub mod output;

use clap::Parser;
use std::path::PathBuf;

/// BOM top-N reporter - reports the most used parts in a BOM file.
///
/// Reads a text BOM file whose header line gives the top-N count and whose
/// remaining lines each describe a part, then prints the N parts with the
/// most reference designator occurrences. Supports both human-readable and
/// JSON output formats.
#[derive(Parser, Debug)]
#[command(name = "bomtop")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the BOM file to read.
    pub bom_file: PathBuf,

    /// Override the top-N count from the file header.
    #[arg(long, short = 't', env = "BOMTOP_TOP")]
    pub top: Option<usize>,

    /// Output the report as JSON instead of human-readable format.
    #[arg(long, short = 'j')]
    pub json: bool,

    /// Increase verbosity level (-v for info, -vv for debug, -vvv for trace).
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_parse_minimal() {
        let args = Args::parse_from(["bomtop", "example.bom"]);
        assert_eq!(args.bom_file, PathBuf::from("example.bom"));
        assert_eq!(args.top, None);
        assert!(!args.json);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn args_parse_flags() {
        let args = Args::parse_from(["bomtop", "--top", "3", "--json", "-vv", "example.bom"]);
        assert_eq!(args.top, Some(3));
        assert!(args.json);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn args_require_bom_file() {
        assert!(Args::try_parse_from(["bomtop"]).is_err());
    }
}
