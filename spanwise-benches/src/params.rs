//! Benchmark parameter types.

use std::fmt;

/// Parameters for one MST benchmark case.
#[derive(Clone, Copy, Debug)]
pub struct MstBenchParams {
    /// Number of vertices.
    pub vertex_count: u32,
    /// Random edges drawn per vertex on top of the spanning path.
    pub edges_per_vertex: u32,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.vertex_count, self.edges_per_vertex)
    }
}
