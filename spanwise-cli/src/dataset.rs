//! JSON dataset files.
//!
//! A dataset file holds one or more graphs, either wrapped as
//! `{"graphs": [...]}` or as a bare array. Each graph names its vertices with
//! `vertices` (explicit integers) or `n` (vertices `0..n`) and lists edges as
//! `{"u": .., "v": .., "w": ..}` objects.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use spanwise_core::{Edge, Graph, GraphError};

use crate::cli::CliError;

/// Vertex identifier used for every graph loaded from a dataset.
pub type VertexId = i64;

/// Top-level layout of a dataset file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DatasetLayout {
    Wrapped { graphs: Vec<GraphSpec> },
    Bare(Vec<GraphSpec>),
}

/// One graph as written in a dataset file.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GraphSpec {
    /// Optional identifier, a number or a string.
    #[serde(default)]
    pub id: Option<Value>,
    /// Explicit vertex identifiers, in order.
    #[serde(default)]
    pub vertices: Option<Vec<VertexId>>,
    /// Vertex count when `vertices` is absent.
    #[serde(default)]
    pub n: Option<u32>,
    /// Undirected weighted edges.
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

/// One edge as written in a dataset file.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct EdgeSpec {
    /// First endpoint.
    pub u: VertexId,
    /// Second endpoint.
    pub v: VertexId,
    /// Edge weight.
    pub w: f64,
}

impl GraphSpec {
    /// Returns `graph_<id>` when an identifier is present, `unnamed`
    /// otherwise.
    ///
    /// # Examples
    /// ```
    /// use spanwise_cli::dataset::GraphSpec;
    ///
    /// let spec: GraphSpec = serde_json::from_str(r#"{"id": 3, "n": 1}"#)?;
    /// assert_eq!(spec.name(), "graph_3");
    /// # Ok::<(), serde_json::Error>(())
    /// ```
    #[must_use]
    pub fn name(&self) -> String {
        match &self.id {
            None | Some(Value::Null) => "unnamed".to_owned(),
            Some(Value::String(id)) => format!("graph_{id}"),
            Some(other) => format!("graph_{other}"),
        }
    }

    /// Returns the vertex sequence: `vertices` when given, else `0..n`, else
    /// empty.
    #[must_use]
    pub fn vertex_ids(&self) -> Vec<VertexId> {
        match (&self.vertices, self.n) {
            (Some(vertices), _) => vertices.clone(),
            (None, Some(n)) => (0..VertexId::from(n)).collect(),
            (None, None) => Vec::new(),
        }
    }

    /// Builds the graph described by this spec.
    ///
    /// # Errors
    /// Returns [`GraphError`] when the vertices or edges are malformed.
    pub fn build(&self) -> Result<Graph<VertexId>, GraphError> {
        Graph::new(
            self.vertex_ids(),
            self.edges
                .iter()
                .map(|edge| Edge::new(edge.u, edge.v, edge.w)),
        )
    }
}

/// Parses the graphs in a dataset document.
///
/// # Errors
/// Returns [`serde_json::Error`] when the document is not valid JSON or
/// matches neither layout.
pub fn parse_dataset(json: &str) -> Result<Vec<GraphSpec>, serde_json::Error> {
    let layout: DatasetLayout = serde_json::from_str(json)?;
    Ok(match layout {
        DatasetLayout::Wrapped { graphs } | DatasetLayout::Bare(graphs) => graphs,
    })
}

/// Reads and parses the dataset file at `path`.
///
/// # Errors
/// Returns [`CliError::Io`] when the file cannot be read and
/// [`CliError::Json`] when it cannot be parsed.
pub fn load_dataset(path: &Path) -> Result<Vec<GraphSpec>, CliError> {
    let json = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_dataset(&json).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}
