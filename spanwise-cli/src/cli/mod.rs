//! Command-line interface for solving dataset files.
//!
//! `run` processes a single dataset file; `batch` scans a directory for
//! dataset files and processes each in name order.

mod commands;

pub use commands::{
    BatchCommand, Cli, CliError, Command, ExecutionSummary, OutputFormat, RunCommand,
    render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
