//! Sequential Kruskal engine.

use std::{fmt::Debug, hash::Hash, time::Instant};

use tracing::{Span, field, instrument};

use crate::{DisjointSet, Edge, Graph, error::Result};

use super::{Algorithm, MstResult, OperationCounts, counters, record_run_metrics};

/// Computes a minimum spanning tree (or forest) with Kruskal's algorithm.
///
/// Edges are sorted by weight with a stable sort, so equal weights keep their
/// input order and the choice between equal-cost trees is reproducible. The
/// scan stops right after the edge that brings the selection to `V - 1`, and
/// `edge_considered` counts every edge inspected up to that point.
///
/// Records the `edge_considered`, `find_calls`, and `unions` counters.
///
/// # Errors
/// Returns [`crate::MstError::UnknownVertex`] if the disjoint-set is asked
/// about a vertex the graph did not register, which a graph built through
/// [`Graph::new`] rules out.
///
/// # Examples
/// ```
/// use spanwise_core::{Edge, Graph, kruskal};
///
/// let graph = Graph::new(
///     [1, 2, 3, 4],
///     [
///         Edge::new(1, 2, 1.0),
///         Edge::new(2, 3, 2.0),
///         Edge::new(1, 3, 3.0),
///         Edge::new(3, 4, 4.0),
///     ],
/// )?;
/// let result = kruskal(&graph)?;
/// assert_eq!(result.edge_count(), 3);
/// assert_eq!(result.total_cost(), 7.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "core.kruskal",
    level = "debug",
    err,
    skip(graph),
    fields(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        selected = field::Empty,
        total_cost = field::Empty,
    ),
)]
pub fn kruskal<V>(graph: &Graph<V>) -> Result<MstResult<V>>
where
    V: Clone + Eq + Hash + Debug,
{
    let started = Instant::now();

    let mut sorted: Vec<&Edge<V>> = graph.edges().iter().collect();
    sorted.sort_by(|left, right| left.weight().total_cmp(&right.weight()));

    let mut sets = DisjointSet::new(graph.vertices().iter().cloned());
    let target = graph.vertex_count().saturating_sub(1);
    let mut selected = Vec::with_capacity(target);
    let mut considered: u64 = 0;

    for edge in sorted {
        considered += 1;
        let left_root = sets.find(edge.u())?;
        let right_root = sets.find(edge.v())?;
        if left_root != right_root && sets.union(&left_root, &right_root)? {
            selected.push(edge.clone());
        }
        if selected.len() == target {
            break;
        }
    }

    let operations = OperationCounts::from([
        (counters::EDGE_CONSIDERED, considered),
        (counters::FIND_CALLS, sets.find_calls()),
        (counters::UNIONS, sets.unions()),
    ]);
    let result = MstResult::new(Algorithm::Kruskal, selected, operations, started.elapsed());

    let span = Span::current();
    span.record("selected", result.edge_count());
    span.record("total_cost", result.total_cost());
    record_run_metrics(&result);
    Ok(result)
}
