//! Structural validation of engine output.
//!
//! Validation is independent of cost: it catches edge sets that add up to the
//! right weight but are cyclic or undersized.

use std::{fmt::Debug, hash::Hash};

use tracing::debug;

use crate::{Edge, Graph};

/// Detailed outcome of [`validate_detailed`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Validation {
    expected_edges: usize,
    actual_edges: usize,
    acyclic: bool,
}

impl Validation {
    /// Returns the edge count a spanning tree of the graph must have.
    #[must_use]
    #[rustfmt::skip]
    pub const fn expected_edges(&self) -> usize { self.expected_edges }

    /// Returns the number of edges supplied for validation.
    #[must_use]
    #[rustfmt::skip]
    pub const fn actual_edges(&self) -> usize { self.actual_edges }

    /// Returns `true` when the supplied edges, placed over the graph's
    /// vertices, contain no cycle.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_acyclic(&self) -> bool { self.acyclic }

    /// Returns `true` when the edges form a spanning tree of the graph.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.acyclic && self.expected_edges == self.actual_edges
    }
}

/// Returns `true` when `edges` is a spanning tree of `graph`: exactly
/// `max(0, V - 1)` edges with no cycle over the graph's vertices.
///
/// # Examples
/// ```
/// use spanwise_core::{Graph, validate};
///
/// let graph: Graph<&str> = Graph::new(["X", "Y", "Z"], Vec::new())?;
/// assert!(!validate(&graph, &[]));
/// # Ok::<(), spanwise_core::GraphError>(())
/// ```
#[must_use]
pub fn validate<V>(graph: &Graph<V>, edges: &[Edge<V>]) -> bool
where
    V: Clone + Eq + Hash + Debug,
{
    validate_detailed(graph, edges).is_valid()
}

/// Validates `edges` against `graph` and reports each criterion separately.
///
/// The edges are rebuilt into a graph over `graph`'s vertices; when that
/// rebuild fails (for example because an edge names a foreign vertex) the
/// edge set counts as cyclic.
#[must_use]
pub fn validate_detailed<V>(graph: &Graph<V>, edges: &[Edge<V>]) -> Validation
where
    V: Clone + Eq + Hash + Debug,
{
    let acyclic = match Graph::new(graph.vertices().iter().cloned(), edges.iter().cloned()) {
        Ok(rebuilt) => !rebuilt.has_cycle(),
        Err(error) => {
            debug!(%error, code = %error.code(), "result edges do not form a graph");
            false
        }
    };

    Validation {
        expected_edges: graph.vertex_count().saturating_sub(1),
        actual_edges: edges.len(),
        acyclic,
    }
}
