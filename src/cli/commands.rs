//! CLI command implementation
//!
//! One command: resolve a row of the input file and print it. The
//! `--clear-cache` toggle deletes all sidecar artifacts in the input
//! file's directory first, forcing a rebuild.

use std::path::Path;

use crate::cache::clear_artifacts;
use crate::observability::{Logger, Severity};
use crate::session::Session;

use super::args::Cli;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the lookup
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(&cli)
}

/// Run the lookup described by already-parsed arguments
pub fn run_command(cli: &Cli) -> CliResult<()> {
    let logger = if cli.verbose {
        Logger::new(Severity::Info)
    } else {
        Logger::new(Severity::Warn)
    };

    if cli.clear_cache {
        let directory = artifact_directory(&cli.input_path);
        clear_artifacts(directory, &logger).map_err(CliError::cache_clear_failed)?;
    }

    let session = Session::open(&cli.input_path, logger)?;
    let line = session.resolve(cli.target)?;
    println!("{}", line);

    Ok(())
}

/// The directory holding a file's sidecar artifacts.
///
/// A bare filename has an empty parent; artifacts then live in the
/// current directory.
fn artifact_directory(input_path: &Path) -> &Path {
    match input_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
