//! Directory scanning and per-file processing.
//!
//! Each dataset file yields a [`DatasetFileReport`]. A graph that cannot be
//! built is recorded as a failure and the remaining graphs still run.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use spanwise_core::{Graph, MstError, kruskal, prim};
use tracing::{Span, field, info, instrument, warn};

use crate::cli::CliError;
use crate::dataset::{GraphSpec, VertexId, load_dataset};
use crate::report::{DatasetFileReport, EngineReport, GraphFailure, GraphReport, write_csv, write_json};

/// File-name prefix selecting dataset files when none is given.
pub const DEFAULT_INPUT_PREFIX: &str = "assign_3_input_";

/// Paths written for one processed dataset file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutputPaths {
    /// Pretty JSON report.
    pub json: PathBuf,
    /// CSV summary.
    pub csv: PathBuf,
}

impl OutputPaths {
    /// Derives output paths beside `input` by replacing `input` with
    /// `output` in the file name and dropping the `.json` extension.
    ///
    /// # Examples
    /// ```
    /// use std::path::Path;
    /// use spanwise_cli::batch::OutputPaths;
    ///
    /// let paths = OutputPaths::for_input(Path::new("data/assign_3_input_small.json"));
    /// assert_eq!(paths.json, Path::new("data/assign_3_output_small.json"));
    /// assert_eq!(paths.csv, Path::new("data/assign_3_output_small_summary.csv"));
    /// ```
    #[must_use]
    pub fn for_input(input: &Path) -> Self {
        let file_name = input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let base = file_name.replace("input", "output").replace(".json", "");
        let parent = input.parent().unwrap_or_else(|| Path::new(""));
        Self {
            json: parent.join(format!("{base}.json")),
            csv: parent.join(format!("{base}_summary.csv")),
        }
    }
}

/// The outcome of processing one dataset file.
#[derive(Clone, Debug, Serialize)]
pub struct FileOutcome {
    /// The dataset file that was read.
    pub input: PathBuf,
    /// Where the reports were written, if they were.
    pub outputs: Option<OutputPaths>,
    /// Per-graph results and failures.
    pub report: DatasetFileReport,
}

/// Lists the `.json` files in `dir` whose names start with `prefix`, sorted
/// by path.
///
/// # Errors
/// Returns [`CliError::Io`] when the directory cannot be read.
pub fn discover_inputs(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>, CliError> {
    let io_error = |source| CliError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut inputs = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        let matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(prefix) && name.ends_with(".json"));
        if matches && path.is_file() {
            inputs.push(path);
        }
    }
    inputs.sort();
    Ok(inputs)
}

/// Runs both engines on `graph` and validates their output.
///
/// # Errors
/// Returns [`MstError`] when Kruskal's disjoint-set is asked about a vertex
/// the graph never registered.
pub fn analyse_graph(name: String, graph: &Graph<VertexId>) -> Result<GraphReport, MstError> {
    let tree = prim(graph);
    let forest = kruskal(graph)?;
    Ok(GraphReport {
        name,
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        prim: EngineReport::from_result(graph, &tree),
        kruskal: EngineReport::from_result(graph, &forest),
    })
}

/// Builds and solves every graph in `specs`.
///
/// A graph that fails construction is recorded as a failure and skipped.
///
/// # Errors
/// Returns [`MstError`] when an engine fails on a graph that was built
/// successfully; the remaining graphs are not attempted.
pub fn analyse_specs(specs: &[GraphSpec]) -> Result<DatasetFileReport, MstError> {
    let mut report = DatasetFileReport::default();
    for spec in specs {
        let name = spec.name();
        match spec.build() {
            Ok(graph) => {
                let solved = analyse_graph(name, &graph)?;
                info!(
                    name = solved.name.as_str(),
                    vertices = solved.vertex_count,
                    edges = solved.edge_count,
                    prim_cost = solved.prim.total_cost,
                    kruskal_cost = solved.kruskal.total_cost,
                    "graph solved"
                );
                report.datasets.push(solved);
            }
            Err(error) => {
                warn!(
                    name = name.as_str(),
                    %error,
                    code = %error.code(),
                    "skipping malformed graph"
                );
                report.failures.push(GraphFailure::new(name, &error));
            }
        }
    }
    Ok(report)
}

/// Loads, solves, and optionally writes reports for one dataset file.
///
/// # Errors
/// Returns [`CliError`] when the file cannot be read or parsed, when an
/// engine fails ([`CliError::Core`]), or when the reports cannot be written.
#[instrument(
    name = "cli.process_file",
    err,
    fields(path = %input.display(), graphs = field::Empty, failures = field::Empty),
)]
pub fn process_file(input: &Path, write_outputs: bool) -> Result<FileOutcome, CliError> {
    let specs = load_dataset(input)?;
    let report = analyse_specs(&specs)?;

    let span = Span::current();
    span.record("graphs", report.datasets.len());
    span.record("failures", report.failures.len());

    let outputs = if write_outputs {
        let paths = OutputPaths::for_input(input);
        write_report(&paths.json, |writer| write_json(&report, writer))?;
        write_report(&paths.csv, |writer| write_csv(&report, writer))?;
        info!(json = %paths.json.display(), csv = %paths.csv.display(), "reports written");
        Some(paths)
    } else {
        None
    };

    Ok(FileOutcome {
        input: input.to_path_buf(),
        outputs,
        report,
    })
}

/// Processes every matching dataset file in `dir`.
///
/// An empty directory is not an error; it yields no outcomes.
///
/// # Errors
/// Returns the first [`CliError`] raised while scanning or processing.
#[instrument(name = "cli.batch", err, fields(dir = %dir.display(), files = field::Empty))]
pub fn run_batch(dir: &Path, prefix: &str, write_outputs: bool) -> Result<Vec<FileOutcome>, CliError> {
    let inputs = discover_inputs(dir, prefix)?;
    Span::current().record("files", inputs.len());
    if inputs.is_empty() {
        warn!(prefix, "no dataset files found");
    }
    inputs
        .iter()
        .map(|input| process_file(input, write_outputs))
        .collect()
}

fn write_report(
    path: &Path,
    render: impl FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
) -> Result<(), CliError> {
    let io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    render(&mut writer).map_err(io_error)?;
    writer.flush().map_err(io_error)
}
