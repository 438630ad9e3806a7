//! Union-find (disjoint set union) keyed by vertex identifiers.
//!
//! Kruskal's engine and the graph's cycle query merge components through this
//! structure. It combines union by rank with full path compression, so any
//! sequence of operations runs in amortized inverse-Ackermann time per call.
//! Each instance keeps its own operation counters; nothing is shared between
//! instances, so independent runs may proceed on separate threads.

use std::{collections::HashMap, fmt::Debug, hash::Hash};

use crate::error::{MstError, Result};

/// A partition of a fixed vertex set into disjoint components.
///
/// Vertices are registered once at construction. Looking up a vertex that was
/// never registered fails with [`MstError::UnknownVertex`].
#[derive(Clone, Debug)]
pub struct DisjointSet<V> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
    find_calls: u64,
    unions: u64,
}

impl<V> DisjointSet<V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Creates a forest where every vertex is the root of its own set.
    ///
    /// Repeated identifiers are registered once.
    ///
    /// # Examples
    /// ```
    /// use spanwise_core::DisjointSet;
    ///
    /// let mut sets = DisjointSet::new(["a", "b", "c"]);
    /// assert_eq!(sets.set_count(), 3);
    /// assert!(sets.union(&"a", &"b")?);
    /// assert!(!sets.union(&"b", &"a")?);
    /// assert_eq!(sets.find(&"b")?, sets.find(&"a")?);
    /// assert_eq!(sets.set_count(), 2);
    /// # Ok::<(), spanwise_core::MstError>(())
    /// ```
    pub fn new(vertices: impl IntoIterator<Item = V>) -> Self {
        let mut registered = Vec::new();
        let mut index = HashMap::new();
        for vertex in vertices {
            if index.contains_key(&vertex) {
                continue;
            }
            index.insert(vertex.clone(), registered.len());
            registered.push(vertex);
        }

        let count = registered.len();
        Self {
            vertices: registered,
            index,
            parent: (0..count).collect(),
            rank: vec![0; count],
            sets: count,
            find_calls: 0,
            unions: 0,
        }
    }

    /// Returns the representative of the set containing `vertex`.
    ///
    /// Every node visited on the way to the root is re-pointed directly at the
    /// root before returning.
    ///
    /// # Errors
    /// Returns [`MstError::UnknownVertex`] when `vertex` was not registered.
    pub fn find(&mut self, vertex: &V) -> Result<V> {
        let node = self.index_of(vertex)?;
        let root = self.find_root(node);
        Ok(self.vertices[root].clone())
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` without changing anything when both already share a
    /// root. Otherwise the lower-rank root is attached beneath the higher-rank
    /// root; on equal ranks the root of `left` survives and its rank grows.
    ///
    /// # Errors
    /// Returns [`MstError::UnknownVertex`] when either vertex was not
    /// registered.
    pub fn union(&mut self, left: &V, right: &V) -> Result<bool> {
        let left_node = self.index_of(left)?;
        let right_node = self.index_of(right)?;
        let mut survivor = self.find_root(left_node);
        let mut absorbed = self.find_root(right_node);
        if survivor == absorbed {
            return Ok(false);
        }

        let survivor_rank = self.rank[survivor];
        let absorbed_rank = self.rank[absorbed];
        if survivor_rank < absorbed_rank {
            std::mem::swap(&mut survivor, &mut absorbed);
        }
        self.parent[absorbed] = survivor;
        if survivor_rank == absorbed_rank {
            self.rank[survivor] = survivor_rank.saturating_add(1);
        }

        self.sets -= 1;
        self.unions += 1;
        Ok(true)
    }

    /// Returns `true` when `left` and `right` belong to the same set.
    ///
    /// # Errors
    /// Returns [`MstError::UnknownVertex`] when either vertex was not
    /// registered.
    pub fn connected(&mut self, left: &V, right: &V) -> Result<bool> {
        let left_node = self.index_of(left)?;
        let right_node = self.index_of(right)?;
        Ok(self.find_root(left_node) == self.find_root(right_node))
    }

    /// Returns `true` when `vertex` was registered at construction.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    fn index_of(&self, vertex: &V) -> Result<usize> {
        self.index
            .get(vertex)
            .copied()
            .ok_or_else(|| MstError::unknown_vertex(vertex))
    }
}

impl<V> DisjointSet<V> {
    /// Returns the number of registered vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when no vertices are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the current number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub fn set_count(&self) -> usize { self.sets }

    /// Returns how many root lookups have been performed, including those
    /// issued internally by [`DisjointSet::union`] and
    /// [`DisjointSet::connected`].
    #[must_use]
    #[rustfmt::skip]
    pub fn find_calls(&self) -> u64 { self.find_calls }

    /// Returns how many unions actually merged two sets.
    #[must_use]
    #[rustfmt::skip]
    pub fn unions(&self) -> u64 { self.unions }

    fn find_root(&mut self, mut node: usize) -> usize {
        self.find_calls += 1;

        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    #[cfg(test)]
    pub(crate) fn rank_of_root(&mut self, node: usize) -> u8 {
        let root = self.find_root(node);
        self.rank[root]
    }

    #[cfg(test)]
    pub(crate) fn parent_of(&self, node: usize) -> usize {
        self.parent[node]
    }
}
