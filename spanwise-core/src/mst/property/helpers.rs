//! Graph oracles shared by the property modules.

use std::collections::VecDeque;

use crate::Edge;

/// Labels each vertex in `0..vertex_count` with a component id by breadth
/// first search over `edges`.
pub(super) fn component_labels(vertex_count: usize, edges: &[Edge<usize>]) -> Vec<usize> {
    let adjacency = adjacency(vertex_count, edges);
    let mut labels = vec![usize::MAX; vertex_count];
    let mut next = 0;
    for seed in 0..vertex_count {
        if labels[seed] != usize::MAX {
            continue;
        }
        labels[seed] = next;
        let mut queue = VecDeque::from([seed]);
        while let Some(vertex) = queue.pop_front() {
            for &(neighbour, _) in &adjacency[vertex] {
                if labels[neighbour] == usize::MAX {
                    labels[neighbour] = next;
                    queue.push_back(neighbour);
                }
            }
        }
        next += 1;
    }
    labels
}

/// Returns the heaviest weight on the unique path between `from` and `to`
/// in the forest `tree`, or `None` when they are not connected.
pub(super) fn heaviest_on_path(
    vertex_count: usize,
    tree: &[Edge<usize>],
    from: usize,
    to: usize,
) -> Option<f64> {
    let adjacency = adjacency(vertex_count, tree);
    let mut best: Vec<Option<f64>> = vec![None; vertex_count];
    let mut seen = vec![false; vertex_count];
    seen[from] = true;
    best[from] = Some(f64::NEG_INFINITY);
    let mut queue = VecDeque::from([from]);
    while let Some(vertex) = queue.pop_front() {
        let so_far = best[vertex].unwrap_or(f64::NEG_INFINITY);
        for &(neighbour, weight) in &adjacency[vertex] {
            if !seen[neighbour] {
                seen[neighbour] = true;
                best[neighbour] = Some(so_far.max(weight));
                queue.push_back(neighbour);
            }
        }
    }
    best[to]
}

fn adjacency(vertex_count: usize, edges: &[Edge<usize>]) -> Vec<Vec<(usize, f64)>> {
    let mut adjacency = vec![Vec::new(); vertex_count];
    for edge in edges {
        adjacency[*edge.u()].push((*edge.v(), edge.weight()));
        adjacency[*edge.v()].push((*edge.u(), edge.weight()));
    }
    adjacency
}
