//! Argument parsing, command dispatch, and summary rendering.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use spanwise_core::{MstError, MstErrorCode};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use crate::batch::{DEFAULT_INPUT_PREFIX, FileOutcome, process_file, run_batch};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spanwise",
    about = "Compute and cross-check minimum spanning trees with Kruskal and Prim."
)]
pub struct Cli {
    /// Format of the summary printed to stdout.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Solve every graph in one dataset file.
    Run(RunCommand),
    /// Solve every dataset file in a directory.
    Batch(BatchCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Dataset file to read.
    pub path: PathBuf,

    /// Skip writing the JSON report and CSV summary.
    #[arg(long)]
    pub no_write: bool,
}

/// Options accepted by the `batch` command.
#[derive(Debug, Args, Clone)]
pub struct BatchCommand {
    /// Directory holding dataset files.
    #[arg(default_value = "data")]
    pub dir: PathBuf,

    /// File-name prefix selecting dataset files.
    #[arg(long, default_value = DEFAULT_INPUT_PREFIX)]
    pub pattern_prefix: String,

    /// Skip writing the JSON report and CSV summary.
    #[arg(long)]
    pub no_write: bool,
}

/// Summary formats for stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per graph.
    #[default]
    Human,
    /// The per-file reports as a JSON array.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading or writing a file failed.
    #[error("I/O failed for `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A dataset file was not valid JSON or had an unsupported layout.
    #[error("failed to parse `{path}`: {source}")]
    Json {
        /// Dataset file being parsed.
        path: PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
    /// An engine reported an internal inconsistency.
    #[error(transparent)]
    Core(#[from] MstError),
}

impl CliError {
    /// Returns the stable engine error code when the failure came from the
    /// core library.
    #[must_use]
    pub fn core_code(&self) -> Option<MstErrorCode> {
        match self {
            Self::Core(core) => Some(core.code()),
            Self::Io { .. } | Self::Json { .. } => None,
        }
    }
}

/// Outcome of a CLI command, ready to render.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Requested stdout format.
    pub format: OutputFormat,
    /// One outcome per processed dataset file.
    pub files: Vec<FileOutcome>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when a dataset file cannot be read or parsed, when an
/// engine fails, or when reports cannot be written.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanwise_cli::cli::{Cli, Command, OutputFormat, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), r#"[{"id": 1, "n": 2, "edges": [{"u": 0, "v": 1, "w": 4}]}]"#)?;
/// let cli = Cli {
///     format: OutputFormat::Human,
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         no_write: true,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.files[0].report.datasets[0].kruskal.total_cost, 4.0);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    let files = match cli.command {
        Command::Run(run) => {
            span.record("command", field::display("run"));
            vec![process_file(&run.path, !run.no_write)?]
        }
        Command::Batch(batch) => {
            span.record("command", field::display("batch"));
            run_batch(&batch.dir, &batch.pattern_prefix, !batch.no_write)?
        }
    };

    info!(
        files = files.len(),
        graphs = files.iter().map(|file| file.report.datasets.len()).sum::<usize>(),
        failures = files.iter().map(|file| file.report.failures.len()).sum::<usize>(),
        "command completed"
    );
    Ok(ExecutionSummary {
        format: cli.format,
        files,
    })
}

/// Renders `summary` to `writer` in the requested format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &summary.files).map_err(io::Error::from)?;
            writeln!(writer)
        }
        OutputFormat::Human => render_human(&summary.files, writer),
    }
}

fn render_human(files: &[FileOutcome], mut writer: impl Write) -> io::Result<()> {
    if files.is_empty() {
        return writeln!(writer, "no dataset files found");
    }
    for file in files {
        writeln!(writer, "{}", file.input.display())?;
        for graph in &file.report.datasets {
            writeln!(
                writer,
                "  {}: V={} E={} prim={:.2} kruskal={:.2} valid={}/{}",
                graph.name,
                graph.vertex_count,
                graph.edge_count,
                graph.prim.total_cost,
                graph.kruskal.total_cost,
                graph.prim.valid,
                graph.kruskal.valid,
            )?;
        }
        for failure in &file.report.failures {
            writeln!(
                writer,
                "  {}: skipped [{}] {}",
                failure.name, failure.code, failure.message
            )?;
        }
        if let Some(outputs) = &file.outputs {
            writeln!(
                writer,
                "  wrote {} and {}",
                outputs.json.display(),
                outputs.csv.display()
            )?;
        }
    }
    Ok(())
}
