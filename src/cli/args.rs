//! CLI argument definitions using clap
//!
//! Usage:
//! - rowseek <input_path> <target>
//! - rowseek <input_path> <target> --clear-cache

use clap::Parser;
use std::path::PathBuf;

/// rowseek - look up an arbitrary row in a line-oriented text file
///
/// The first lookup against a file builds a sparse index and metadata
/// sidecar next to it; later lookups reuse them.
#[derive(Parser, Debug)]
#[command(name = "rowseek")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the input text file
    pub input_path: PathBuf,

    /// Zero-based row number to look up
    pub target: u64,

    /// Delete cached index and metadata artifacts in the input file's
    /// directory before running
    #[arg(long)]
    pub clear_cache: bool,

    /// Emit INFO-level progress events
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_arguments() {
        let cli = Cli::try_parse_from(["rowseek", "data/sample.txt", "3"]).unwrap();
        assert_eq!(cli.input_path, PathBuf::from("data/sample.txt"));
        assert_eq!(cli.target, 3);
        assert!(!cli.clear_cache);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_clear_cache_flag() {
        let cli = Cli::try_parse_from(["rowseek", "data/sample.txt", "0", "--clear-cache"]).unwrap();
        assert!(cli.clear_cache);
    }

    #[test]
    fn test_negative_target_rejected() {
        assert!(Cli::try_parse_from(["rowseek", "data/sample.txt", "-1"]).is_err());
    }

    #[test]
    fn test_missing_target_rejected() {
        assert!(Cli::try_parse_from(["rowseek", "data/sample.txt"]).is_err());
    }
}
