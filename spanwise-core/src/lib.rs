//! spanwise core library.
//!
//! Computes minimum spanning trees of weighted undirected graphs with two
//! independent engines and cross-checks their output:
//!
//! - [`Graph`] holds an ordered vertex sequence and an edge list, and answers
//!   connectivity and cycle queries.
//! - [`DisjointSet`] is a union-by-rank, path-compressed union-find with
//!   per-instance operation counters.
//! - [`kruskal`] and [`prim`] build a tree and report an [`MstResult`] with
//!   operation counters and elapsed time.
//! - [`validate`] confirms an edge set is an acyclic, correctly sized
//!   spanning tree.
//!
//! Everything is single-threaded and owns its state, so independent graphs may
//! be processed on separate threads.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled each engine run emits:
//!
//! - `mst_runs_total` (counter, labelled by `algorithm`)
//! - `mst_run_duration_seconds` (histogram, labelled by `algorithm`)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod disjoint_set;
mod error;
mod graph;
mod mst;

#[cfg(test)]
mod test_utils;

pub use crate::{
    disjoint_set::DisjointSet,
    error::{GraphError, GraphErrorCode, MstError, MstErrorCode, Result},
    graph::{Edge, Graph},
    mst::{
        Algorithm, MstResult, OperationCounts, Validation, counters, kruskal, prim, prim_from,
        validate, validate_detailed,
    },
};
