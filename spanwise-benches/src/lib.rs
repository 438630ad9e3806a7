//! Benchmark support crate for spanwise.
//!
//! Generates seeded random graphs for the Criterion benchmarks comparing the
//! Kruskal and Prim engines.

pub mod error;
pub mod generate;
pub mod params;
