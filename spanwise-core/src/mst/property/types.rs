//! Fixture types for the MST property suite.

use crate::{Edge, Graph};

/// How edge weights are drawn for a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightShape {
    /// Weights drawn from a wide integer range, rarely colliding.
    Distinct,
    /// Weights drawn from a pool of one to three values.
    Tied,
    /// Weights spanning zero, including negatives.
    Signed,
    /// A random spanning tree plus roughly `n / 2` to `n` extra edges.
    Sparse,
    /// Edge probability between 0.7 and 0.95.
    Dense,
    /// Two to five components with no edges between them.
    Disconnected,
}

/// A generated graph with the parameters that produced it.
///
/// Weights are integral so sums are exact regardless of summation order.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    pub vertex_count: usize,
    pub edges: Vec<(usize, usize, f64)>,
    pub shape: WeightShape,
    pub seed: u64,
}

impl GraphFixture {
    /// Builds the graph over vertices `0..vertex_count`.
    pub(super) fn graph(&self) -> Graph<usize> {
        Graph::new(
            0..self.vertex_count,
            self.edges
                .iter()
                .map(|&(u, v, weight)| Edge::new(u, v, weight)),
        )
        .expect("generated fixtures contain only valid edges")
    }

    /// Summarises the fixture for failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "shape={:?}, seed={}, vertices={}, edges={}",
            self.shape,
            self.seed,
            self.vertex_count,
            self.edges.len(),
        )
    }
}
