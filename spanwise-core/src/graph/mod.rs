//! Immutable weighted undirected graphs.
//!
//! A [`Graph`] owns an ordered vertex sequence and an edge list. The vertex
//! order fixes iteration order and the default start vertex for Prim's engine.
//! Adjacency lists are derived once at construction and keep edges in
//! insertion order.

mod edge;

use std::{
    collections::{HashMap, VecDeque},
    fmt::Debug,
    hash::Hash,
};

pub use self::edge::Edge;

use crate::{
    DisjointSet,
    error::{GraphError, render_vertex},
};

/// An immutable weighted undirected graph.
///
/// Construction guarantees that every vertex identifier is unique, every edge
/// joins two distinct registered vertices, and no weight is NaN.
#[derive(Clone, Debug)]
pub struct Graph<V> {
    vertices: Vec<V>,
    edges: Vec<Edge<V>>,
    index: HashMap<V, usize>,
    endpoints: Vec<(usize, usize)>,
    incident: Vec<Vec<usize>>,
}

impl<V> Graph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Builds a graph from an ordered vertex sequence and an edge list.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidEdge`] when an edge names a vertex missing
    /// from `vertices`, [`GraphError::DuplicateVertex`] when a vertex repeats,
    /// [`GraphError::SelfLoop`] when an edge joins a vertex to itself, and
    /// [`GraphError::NonFiniteWeight`] when a weight is NaN.
    ///
    /// # Examples
    /// ```
    /// use spanwise_core::{Edge, Graph, GraphError};
    ///
    /// let graph = Graph::new(["a", "b"], [Edge::new("a", "b", 5.0)])?;
    /// assert_eq!(graph.vertex_count(), 2);
    /// assert!(graph.is_connected());
    ///
    /// let err = Graph::new(["a"], [Edge::new("a", "z", 1.0)]).unwrap_err();
    /// assert!(matches!(err, GraphError::InvalidEdge { edge_index: 0, .. }));
    /// # Ok::<(), GraphError>(())
    /// ```
    pub fn new(
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = Edge<V>>,
    ) -> Result<Self, GraphError> {
        let vertices: Vec<V> = vertices.into_iter().collect();
        let mut index = HashMap::with_capacity(vertices.len());
        for (position, vertex) in vertices.iter().enumerate() {
            if index.insert(vertex.clone(), position).is_some() {
                return Err(GraphError::DuplicateVertex {
                    vertex: render_vertex(vertex),
                });
            }
        }

        let edges: Vec<Edge<V>> = edges.into_iter().collect();
        let mut endpoints = Vec::with_capacity(edges.len());
        let mut incident = vec![Vec::new(); vertices.len()];
        for (edge_index, edge) in edges.iter().enumerate() {
            let (left, right) = resolve_endpoints(&index, edge, edge_index)?;
            endpoints.push((left, right));
            incident[left].push(edge_index);
            incident[right].push(edge_index);
        }

        Ok(Self {
            vertices,
            edges,
            index,
            endpoints,
            incident,
        })
    }

    /// Returns every edge incident to `vertex` in insertion order.
    ///
    /// An unknown vertex yields an empty sequence.
    pub fn adjacency<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a Edge<V>> + use<'a, V> {
        let slots = match self.index.get(vertex) {
            Some(&position) => self.incident[position].as_slice(),
            None => &[],
        };
        slots.iter().map(|&edge_index| &self.edges[edge_index])
    }

    /// Returns `true` when `vertex` belongs to the graph.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Returns `true` when a traversal from the first vertex reaches every
    /// vertex. The empty graph is connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        if self.vertices.is_empty() {
            return true;
        }
        self.reachable_from(0).iter().all(|&seen| seen)
    }

    /// Returns `true` when the edge set contains a cycle.
    ///
    /// Parallel edges between the same two vertices form a cycle.
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        let mut sets = DisjointSet::new(self.vertices.iter().cloned());
        // Construction registered both endpoints of every edge, so a union
        // only ever reports whether it merged two sets.
        self.edges
            .iter()
            .any(|edge| !matches!(sets.union(edge.u(), edge.v()), Ok(true)))
    }

    /// Returns the number of connected components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        let mut seen = vec![false; self.vertices.len()];
        let mut components = 0;
        for start in 0..self.vertices.len() {
            if seen[start] {
                continue;
            }
            components += 1;
            self.mark_reachable(start, &mut seen);
        }
        components
    }
}

impl<V> Graph<V> {
    /// Returns the vertices in construction order.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> &[V] { &self.vertices }

    /// Returns the edges in construction order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<V>] { &self.edges }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the indices of the edges incident to the vertex at `position`.
    pub(crate) fn incident_edges(&self, position: usize) -> &[usize] {
        &self.incident[position]
    }

    /// Returns the vertex positions joined by the edge at `edge_index`.
    pub(crate) fn endpoint_positions(&self, edge_index: usize) -> (usize, usize) {
        self.endpoints[edge_index]
    }

    fn reachable_from(&self, start: usize) -> Vec<bool> {
        let mut seen = vec![false; self.vertices.len()];
        self.mark_reachable(start, &mut seen);
        seen
    }

    fn mark_reachable(&self, start: usize, seen: &mut [bool]) {
        let mut queue = VecDeque::from([start]);
        seen[start] = true;
        while let Some(position) = queue.pop_front() {
            for &edge_index in &self.incident[position] {
                let (left, right) = self.endpoints[edge_index];
                let next = if left == position { right } else { left };
                if !seen[next] {
                    seen[next] = true;
                    queue.push_back(next);
                }
            }
        }
    }
}

impl<V> Graph<V>
where
    V: Eq + Hash,
{
    /// Returns the position of `vertex` in the vertex sequence.
    pub(crate) fn position_of(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }
}

fn resolve_endpoints<V>(
    index: &HashMap<V, usize>,
    edge: &Edge<V>,
    edge_index: usize,
) -> Result<(usize, usize), GraphError>
where
    V: Eq + Hash + Debug,
{
    if edge.weight().is_nan() {
        return Err(GraphError::NonFiniteWeight { edge_index });
    }

    let locate = |vertex: &V| {
        index
            .get(vertex)
            .copied()
            .ok_or_else(|| GraphError::InvalidEdge {
                vertex: render_vertex(vertex),
                edge_index,
            })
    };
    let left = locate(edge.u())?;
    let right = locate(edge.v())?;

    if left == right {
        return Err(GraphError::SelfLoop {
            vertex: render_vertex(edge.u()),
            edge_index,
        });
    }
    Ok((left, right))
}
