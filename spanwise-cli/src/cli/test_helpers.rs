//! Small helpers shared across CLI tests.

use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, run_cli};

/// A small dataset: one valid four-vertex graph, one with a self-loop, and
/// one disconnected graph.
pub(super) const MIXED_DATASET: &str = r#"{
  "graphs": [
    {"id": 1, "vertices": [1, 2, 3, 4], "edges": [
      {"u": 1, "v": 2, "w": 1}, {"u": 2, "v": 3, "w": 2},
      {"u": 1, "v": 3, "w": 3}, {"u": 3, "v": 4, "w": 4}
    ]},
    {"id": "loop", "n": 2, "edges": [{"u": 1, "v": 1, "w": 1}]},
    {"n": 4, "edges": [{"u": 0, "v": 1, "w": 2.5}, {"u": 2, "v": 3, "w": 1}]}
  ]
}"#;

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
