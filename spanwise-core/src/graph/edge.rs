//! Undirected weighted edges.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// An undirected weighted edge between two distinct vertices.
///
/// Equality and hashing ignore endpoint order: `Edge::new(a, b, w)` equals
/// `Edge::new(b, a, w)`. Weights compare by bit pattern so that `Eq` and
/// `Hash` stay consistent for every `f64`, including negative zero.
#[derive(Clone, Debug)]
pub struct Edge<V> {
    u: V,
    v: V,
    weight: f64,
}

impl<V> Edge<V> {
    /// Creates an edge joining `u` and `v` with the given weight.
    ///
    /// Endpoint validity (distinct, known vertices) is checked when the edge
    /// is placed into a [`crate::Graph`].
    #[must_use]
    pub const fn new(u: V, v: V, weight: f64) -> Self {
        Self { u, v, weight }
    }

    /// Returns the endpoint listed first at construction.
    #[must_use]
    #[rustfmt::skip]
    pub const fn u(&self) -> &V { &self.u }

    /// Returns the endpoint listed second at construction.
    #[must_use]
    #[rustfmt::skip]
    pub const fn v(&self) -> &V { &self.v }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }
}

impl<V: PartialEq> Edge<V> {
    /// Returns the endpoint opposite `vertex`, or `None` when `vertex` is not
    /// incident to this edge.
    #[must_use]
    pub fn other(&self, vertex: &V) -> Option<&V> {
        if self.u == *vertex {
            Some(&self.v)
        } else if self.v == *vertex {
            Some(&self.u)
        } else {
            None
        }
    }

    /// Returns `true` when `vertex` is one of the endpoints.
    #[must_use]
    pub fn touches(&self, vertex: &V) -> bool {
        self.u == *vertex || self.v == *vertex
    }
}

impl<V: PartialEq> PartialEq for Edge<V> {
    fn eq(&self, other: &Self) -> bool {
        let same_endpoints = (self.u == other.u && self.v == other.v)
            || (self.u == other.v && self.v == other.u);
        same_endpoints && self.weight.to_bits() == other.weight.to_bits()
    }
}

impl<V: Eq> Eq for Edge<V> {}

impl<V: Hash + Ord> Hash for Edge<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (low, high) = if self.u <= self.v {
            (&self.u, &self.v)
        } else {
            (&self.v, &self.u)
        };
        low.hash(state);
        high.hash(state);
        self.weight.to_bits().hash(state);
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} - {} : {:.3})", self.u, self.v, self.weight)
    }
}
