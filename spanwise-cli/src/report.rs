//! Batch reports: the JSON document written per dataset file and the CSV
//! summary beside it.

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;
use spanwise_core::{Graph, GraphError, MstResult, validate};

use crate::dataset::VertexId;

/// Header row of the CSV summary.
pub const CSV_HEADER: [&str; 9] = [
    "name",
    "V",
    "E",
    "prim_cost",
    "kruskal_cost",
    "prim_time_ms",
    "kruskal_time_ms",
    "prim_ops",
    "kr_ops",
];

/// Report for one dataset file.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DatasetFileReport {
    /// One entry per graph that was built and solved.
    pub datasets: Vec<GraphReport>,
    /// Graphs skipped because they could not be built.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<GraphFailure>,
}

/// Both engine outcomes for one graph.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphReport {
    /// `graph_<id>` or `unnamed`.
    pub name: String,
    /// Vertex count.
    #[serde(rename = "V")]
    pub vertex_count: usize,
    /// Edge count.
    #[serde(rename = "E")]
    pub edge_count: usize,
    /// Prim outcome.
    pub prim: EngineReport,
    /// Kruskal outcome.
    pub kruskal: EngineReport,
}

/// One engine's outcome in serialisable form.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EngineReport {
    /// Selected edges as `[u, v, w]` triples in selection order.
    pub mst_edges: Vec<(VertexId, VertexId, f64)>,
    /// Sum of the selected weights.
    pub total_cost: f64,
    /// Operation counters by name.
    pub ops: BTreeMap<String, u64>,
    /// Time spent in the algorithm, in milliseconds.
    pub time_ms: f64,
    /// Whether the selected edges form a spanning tree of the graph.
    pub valid: bool,
}

/// A graph that failed construction.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphFailure {
    /// `graph_<id>` or `unnamed`.
    pub name: String,
    /// Stable error code.
    pub code: &'static str,
    /// Human-readable error message.
    pub message: String,
}

impl GraphFailure {
    /// Records a construction failure for the graph called `name`.
    #[must_use]
    pub fn new(name: String, error: &GraphError) -> Self {
        Self {
            name,
            code: error.code().as_str(),
            message: error.to_string(),
        }
    }
}

impl EngineReport {
    /// Captures `result` and validates it against `graph`.
    #[must_use]
    pub fn from_result(graph: &Graph<VertexId>, result: &MstResult<VertexId>) -> Self {
        Self {
            mst_edges: result
                .edges()
                .iter()
                .map(|edge| (*edge.u(), *edge.v(), edge.weight()))
                .collect(),
            total_cost: result.total_cost(),
            ops: result
                .operations()
                .iter()
                .map(|(name, count)| (name.to_owned(), count))
                .collect(),
            time_ms: result.elapsed_ms(),
            valid: validate(graph, result.edges()),
        }
    }

    fn ops_json(&self) -> String {
        serde_json::to_string(&self.ops).unwrap_or_default()
    }
}

impl GraphReport {
    /// Returns the CSV summary row for this graph.
    #[must_use]
    pub fn csv_row(&self) -> [String; 9] {
        [
            self.name.clone(),
            self.vertex_count.to_string(),
            self.edge_count.to_string(),
            format!("{:?}", self.prim.total_cost),
            format!("{:?}", self.kruskal.total_cost),
            format!("{:.3}", self.prim.time_ms),
            format!("{:.3}", self.kruskal.time_ms),
            self.prim.ops_json(),
            self.kruskal.ops_json(),
        ]
    }
}

/// Writes the pretty-printed JSON report.
///
/// # Errors
/// Returns [`io::Error`] when writing fails.
pub fn write_json(report: &DatasetFileReport, writer: impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(writer, report).map_err(io::Error::from)
}

/// Writes the CSV summary, one row per solved graph after the header.
///
/// # Errors
/// Returns [`io::Error`] when writing fails.
///
/// # Examples
/// ```
/// use spanwise_cli::report::{DatasetFileReport, write_csv};
///
/// let mut out = Vec::new();
/// write_csv(&DatasetFileReport::default(), &mut out)?;
/// assert_eq!(
///     String::from_utf8_lossy(&out),
///     "name,V,E,prim_cost,kruskal_cost,prim_time_ms,kruskal_time_ms,prim_ops,kr_ops\n",
/// );
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn write_csv(report: &DatasetFileReport, mut writer: impl Write) -> io::Result<()> {
    write_csv_row(&mut writer, CSV_HEADER.iter().copied())?;
    for graph in &report.datasets {
        write_csv_row(&mut writer, graph.csv_row().iter().map(String::as_str))?;
    }
    Ok(())
}

fn write_csv_row<'a>(writer: &mut impl Write, fields: impl Iterator<Item = &'a str>) -> io::Result<()> {
    let line: Vec<String> = fields.map(csv_field).collect();
    writeln!(writer, "{}", line.join(","))
}

/// Quotes `field` when it contains a comma, quote, or newline, doubling
/// embedded quotes.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}
