//! CLI module for rowseek
//!
//! Provides the command-line interface: look up one row of one input
//! file, optionally clearing cached sidecar artifacts first.

mod args;
mod commands;
mod errors;

pub use args::Cli;
pub use commands::{run, run_command};
pub use errors::{CliError, CliResult};
