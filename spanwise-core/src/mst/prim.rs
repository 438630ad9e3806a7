//! Lazy-deletion Prim engine.
//!
//! The frontier is a binary heap of `(edge, target)` entries. Entries are never
//! removed or re-keyed when a cheaper route to their target appears; a popped
//! entry whose target is already in the tree is simply discarded.

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
    fmt::Debug,
    hash::Hash,
    time::{Duration, Instant},
};

use tracing::{Span, field, instrument};

use crate::{Edge, Graph, MstError, error::Result};

use super::{Algorithm, MstResult, OperationCounts, counters, record_run_metrics};

/// Computes a minimum spanning tree with Prim's algorithm, starting from the
/// first vertex in the graph's ordering.
///
/// Each selected edge is oriented from the vertex already in the tree to the
/// vertex it adds. An empty graph yields an empty result. On a disconnected graph the tree
/// covers only the start vertex's component, so fewer than `V - 1` edges are
/// returned; the engine does not restart in other components.
///
/// Records the `edge_examinations`, `heap_pushes`, and `heap_pops` counters.
///
/// # Examples
/// ```
/// use spanwise_core::{Edge, Graph, prim};
///
/// let graph = Graph::new(["A", "B"], [Edge::new("A", "B", 5.0)])?;
/// let result = prim(&graph);
/// assert_eq!(result.edge_count(), 1);
/// assert_eq!(result.total_cost(), 5.0);
/// # Ok::<(), spanwise_core::GraphError>(())
/// ```
#[must_use]
pub fn prim<V>(graph: &Graph<V>) -> MstResult<V>
where
    V: Clone + Debug,
{
    if graph.vertex_count() == 0 {
        return MstResult::new(
            Algorithm::Prim,
            Vec::new(),
            prim_counts(0, 0, 0),
            Duration::ZERO,
        );
    }
    grow(graph, 0)
}

/// Computes a minimum spanning tree with Prim's algorithm from `start`.
///
/// # Errors
/// Returns [`MstError::UnknownVertex`] when `start` is not a vertex of
/// `graph`.
pub fn prim_from<V>(graph: &Graph<V>, start: &V) -> Result<MstResult<V>>
where
    V: Clone + Eq + Hash + Debug,
{
    let position = graph
        .position_of(start)
        .ok_or_else(|| MstError::unknown_vertex(start))?;
    Ok(grow(graph, position))
}

#[instrument(
    name = "core.prim",
    level = "debug",
    skip(graph),
    fields(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        selected = field::Empty,
        total_cost = field::Empty,
    ),
)]
fn grow<V>(graph: &Graph<V>, start: usize) -> MstResult<V>
where
    V: Clone + Debug,
{
    let started = Instant::now();
    let vertex_count = graph.vertex_count();

    let mut visited = vec![false; vertex_count];
    visited[start] = true;
    let mut visited_count = 1;

    let mut frontier = Frontier::default();
    for &edge_index in graph.incident_edges(start) {
        frontier.push(graph, edge_index, start);
    }

    let mut selected = Vec::with_capacity(vertex_count.saturating_sub(1));
    let mut examinations: u64 = 0;

    while visited_count < vertex_count {
        let Some(entry) = frontier.pop() else {
            break;
        };
        if visited[entry.target] {
            continue;
        }
        visited[entry.target] = true;
        visited_count += 1;
        selected.push(oriented(graph, &entry));

        for &edge_index in graph.incident_edges(entry.target) {
            examinations += 1;
            let far = opposite(graph, edge_index, entry.target);
            if !visited[far] {
                frontier.push(graph, edge_index, entry.target);
            }
        }
    }

    let operations = prim_counts(examinations, frontier.pushes, frontier.pops);
    let result = MstResult::new(Algorithm::Prim, selected, operations, started.elapsed());

    let span = Span::current();
    span.record("selected", result.edge_count());
    span.record("total_cost", result.total_cost());
    record_run_metrics(&result);
    result
}

fn prim_counts(examinations: u64, pushes: u64, pops: u64) -> OperationCounts {
    OperationCounts::from([
        (counters::EDGE_EXAMINATIONS, examinations),
        (counters::HEAP_PUSHES, pushes),
        (counters::HEAP_POPS, pops),
    ])
}

/// Rebuilds the entry's edge as tree vertex first, newly reached vertex
/// second.
fn oriented<V: Clone>(graph: &Graph<V>, entry: &FrontierEntry) -> Edge<V> {
    let vertices = graph.vertices();
    Edge::new(
        vertices[entry.source].clone(),
        vertices[entry.target].clone(),
        entry.weight,
    )
}

fn opposite<V>(graph: &Graph<V>, edge_index: usize, from: usize) -> usize {
    let (left, right) = graph.endpoint_positions(edge_index);
    if left == from { right } else { left }
}

/// A candidate edge reaching `target` from `source`, a tree vertex.
#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    weight: f64,
    order: u64,
    source: usize,
    target: usize,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.order.cmp(&other.order))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap of frontier entries; equal weights pop in push order.
#[derive(Default)]
struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    pushes: u64,
    pops: u64,
}

impl Frontier {
    fn push<V>(&mut self, graph: &Graph<V>, edge_index: usize, from: usize) {
        let entry = FrontierEntry {
            weight: graph.edges()[edge_index].weight(),
            order: self.pushes,
            source: from,
            target: opposite(graph, edge_index, from),
        };
        self.heap.push(Reverse(entry));
        self.pushes += 1;
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        let Reverse(entry) = self.heap.pop()?;
        self.pops += 1;
        Some(entry)
    }
}
