//! Minimum spanning tree (MST) construction and validation.
//!
//! Two independent engines build a minimum spanning tree over a [`Graph`]:
//!
//! - [`kruskal`] sorts the edges by weight and merges components through a
//!   [`crate::DisjointSet`]. On a disconnected graph it returns a minimum
//!   spanning forest with `V - k` edges for `k` components.
//! - [`prim`] grows a single tree from the first vertex using a binary heap
//!   with lazy deletion. On a disconnected graph it spans only the start
//!   vertex's component.
//!
//! Both return an [`MstResult`] carrying the selected edges, their total
//! cost, per-run operation counters, and the time spent in the algorithm.
//! [`validate`] checks a produced edge set independently of its cost.

mod kruskal;
mod prim;
mod validate;

use std::{collections::BTreeMap, fmt, time::Duration};

use crate::{Edge, Graph};

pub use self::kruskal::kruskal;
pub use self::prim::{prim, prim_from};
pub use self::validate::{Validation, validate, validate_detailed};

/// Names of the operation counters recorded by the engines.
pub mod counters {
    /// Kruskal: edges inspected before the engine stopped.
    pub const EDGE_CONSIDERED: &str = "edge_considered";
    /// Kruskal: root lookups issued against the disjoint-set.
    pub const FIND_CALLS: &str = "find_calls";
    /// Kruskal: unions that merged two components.
    pub const UNIONS: &str = "unions";
    /// Prim: adjacency edges examined while expanding the tree.
    pub const EDGE_EXAMINATIONS: &str = "edge_examinations";
    /// Prim: entries pushed onto the frontier heap.
    pub const HEAP_PUSHES: &str = "heap_pushes";
    /// Prim: entries popped from the frontier heap, stale ones included.
    pub const HEAP_POPS: &str = "heap_pops";
}

/// Identifies which engine produced a result.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// Edge sorting with disjoint-set merging.
    Kruskal,
    /// Frontier growth with a priority queue.
    Prim,
}

impl Algorithm {
    /// Returns the lowercase label used in logs and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kruskal => "kruskal",
            Self::Prim => "prim",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named operation counters collected during a single engine run.
///
/// Iteration yields counters in name order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OperationCounts {
    counts: BTreeMap<&'static str, u64>,
}

impl OperationCounts {
    /// Returns the value of the named counter, if it was recorded.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<u64> {
        self.counts.get(name).copied()
    }

    /// Iterates over `(name, count)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        self.counts.iter().map(|(&name, &count)| (name, count))
    }

    /// Returns the number of recorded counters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` when no counters were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<const N: usize> From<[(&'static str, u64); N]> for OperationCounts {
    fn from(entries: [(&'static str, u64); N]) -> Self {
        Self {
            counts: BTreeMap::from(entries),
        }
    }
}

/// The outcome of one MST engine run.
///
/// When the graph is connected the edges form a spanning tree; otherwise they
/// form a forest (Kruskal) or a tree over the start component (Prim).
#[derive(Clone, Debug)]
pub struct MstResult<V> {
    algorithm: Algorithm,
    edges: Vec<Edge<V>>,
    total_cost: f64,
    operations: OperationCounts,
    elapsed: Duration,
}

impl<V> MstResult<V> {
    pub(crate) fn new(
        algorithm: Algorithm,
        edges: Vec<Edge<V>>,
        operations: OperationCounts,
        elapsed: Duration,
    ) -> Self {
        let total_cost = edges.iter().map(Edge::weight).sum();
        Self {
            algorithm,
            edges,
            total_cost,
            operations,
            elapsed,
        }
    }

    /// Returns the engine that produced this result.
    #[must_use]
    #[rustfmt::skip]
    pub const fn algorithm(&self) -> Algorithm { self.algorithm }

    /// Returns the selected edges in selection order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<V>] { &self.edges }

    /// Consumes the result and returns the selected edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge<V>> {
        self.edges
    }

    /// Returns the number of selected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the sum of the selected edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_cost(&self) -> f64 { self.total_cost }

    /// Returns the operation counters recorded during the run.
    #[must_use]
    #[rustfmt::skip]
    pub const fn operations(&self) -> &OperationCounts { &self.operations }

    /// Returns the time spent inside the algorithm.
    #[must_use]
    #[rustfmt::skip]
    pub const fn elapsed(&self) -> Duration { self.elapsed }

    /// Returns the time spent inside the algorithm in fractional milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }

    /// Returns `true` when the edges span every vertex of `graph`.
    #[must_use]
    pub fn spans(&self, graph: &Graph<V>) -> bool {
        self.edges.len() == graph.vertex_count().saturating_sub(1)
    }
}

#[cfg(feature = "metrics")]
fn record_run_metrics<V>(result: &MstResult<V>) {
    let label = result.algorithm.as_str();
    metrics::counter!("mst_runs_total", "algorithm" => label).increment(1);
    metrics::histogram!("mst_run_duration_seconds", "algorithm" => label)
        .record(result.elapsed.as_secs_f64());
}

#[cfg(not(feature = "metrics"))]
fn record_run_metrics<V>(_result: &MstResult<V>) {}


#[cfg(test)]
mod property;
