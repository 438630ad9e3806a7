//! Seeded random graph generation.
//!
//! Graphs are made connected by linking a shuffled vertex order into a path,
//! then receive `edges_per_vertex * vertex_count` extra random edges. Weights
//! are integers in `1..=1000`, so engine costs compare exactly.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use spanwise_core::{Edge, Graph};

use crate::error::BenchSetupError;

const MAX_WEIGHT: u32 = 1_000;

/// Configuration for [`random_connected_graph`].
#[derive(Clone, Copy, Debug)]
pub struct RandomGraphConfig {
    /// Number of vertices, labelled `0..vertex_count`.
    pub vertex_count: u32,
    /// Extra random edges per vertex.
    pub edges_per_vertex: u32,
    /// Seed for the generator.
    pub seed: u64,
}

/// Generates a connected random graph.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `vertex_count` is zero.
///
/// # Examples
/// ```
/// use spanwise_benches::generate::{RandomGraphConfig, random_connected_graph};
///
/// let graph = random_connected_graph(&RandomGraphConfig {
///     vertex_count: 50,
///     edges_per_vertex: 2,
///     seed: 42,
/// })?;
/// assert!(graph.is_connected());
/// # Ok::<(), spanwise_benches::error::BenchSetupError>(())
/// ```
pub fn random_connected_graph(config: &RandomGraphConfig) -> Result<Graph<u32>, BenchSetupError> {
    if config.vertex_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "vertex_count",
        });
    }
    let mut rng = SmallRng::seed_from_u64(config.seed);

    let mut order: Vec<u32> = (0..config.vertex_count).collect();
    order.shuffle(&mut rng);
    let mut edges: Vec<Edge<u32>> = order
        .windows(2)
        .filter_map(|pair| match *pair {
            [u, v] => Some(Edge::new(u, v, random_weight(&mut rng))),
            _ => None,
        })
        .collect();

    let extra = config.vertex_count.saturating_mul(config.edges_per_vertex);
    for _ in 0..extra {
        let u = rng.gen_range(0..config.vertex_count);
        let v = rng.gen_range(0..config.vertex_count);
        if u != v {
            edges.push(Edge::new(u, v, random_weight(&mut rng)));
        }
    }

    Ok(Graph::new(0..config.vertex_count, edges)?)
}

fn random_weight(rng: &mut SmallRng) -> f64 {
    f64::from(rng.gen_range(1..=MAX_WEIGHT))
}
