//! Graph generators for the MST property suite.
//!
//! Every generator is driven by a seeded [`SmallRng`], so a failing seed
//! reproduces the same graph in the parameterised rstest cases.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{GraphFixture, WeightShape};

const MIN_VERTICES: usize = 2;
const MAX_VERTICES: usize = 48;
/// Dense graphs stay small to bound the quadratic edge count.
const DENSE_MAX_VERTICES: usize = 24;

/// Samples a weight shape and seed, then generates the matching fixture.
pub(super) fn fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    let shapes = prop_oneof![
        2 => Just(WeightShape::Distinct),
        3 => Just(WeightShape::Tied),
        2 => Just(WeightShape::Signed),
        2 => Just(WeightShape::Sparse),
        1 => Just(WeightShape::Dense),
        2 => Just(WeightShape::Disconnected),
    ];
    (shapes, any::<u64>()).prop_map(|(shape, seed)| generate_fixture(shape, seed))
}

/// Generates the fixture for `shape` from `seed`.
pub(super) fn generate_fixture(shape: WeightShape, seed: u64) -> GraphFixture {
    let mut rng = SmallRng::seed_from_u64(seed);
    let (vertex_count, edges) = match shape {
        WeightShape::Distinct => random_graph(&mut rng, MAX_VERTICES, (0.15, 0.5), |r| {
            f64::from(r.gen_range(1_i32..=100_000))
        }),
        WeightShape::Tied => {
            let pool: Vec<f64> = (0..rng.gen_range(1..=3))
                .map(|_| f64::from(rng.gen_range(1_i32..=10)))
                .collect();
            random_graph(&mut rng, MAX_VERTICES, (0.2, 0.6), move |r| {
                pool[r.gen_range(0..pool.len())]
            })
        }
        WeightShape::Signed => random_graph(&mut rng, MAX_VERTICES, (0.15, 0.5), |r| {
            f64::from(r.gen_range(-50_i32..=50))
        }),
        WeightShape::Sparse => sparse_graph(&mut rng),
        WeightShape::Dense => random_graph(&mut rng, DENSE_MAX_VERTICES, (0.7, 0.95), |r| {
            f64::from(r.gen_range(1_i32..=1_000))
        }),
        WeightShape::Disconnected => disconnected_graph(&mut rng),
    };
    GraphFixture {
        vertex_count,
        edges,
        shape,
        seed,
    }
}

/// Adds each unordered pair independently with a sampled probability.
fn random_graph(
    rng: &mut SmallRng,
    max_vertices: usize,
    probability: (f64, f64),
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> (usize, Vec<(usize, usize, f64)>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=max_vertices);
    let p = rng.gen_range(probability.0..=probability.1);
    let mut edges = Vec::new();
    for u in 0..vertex_count {
        for v in (u + 1)..vertex_count {
            if rng.gen_bool(p) {
                edges.push((u, v, weight(rng)));
            }
        }
    }
    (vertex_count, edges)
}

/// Links a shuffled vertex order into a path, then adds random chords which
/// may duplicate existing pairs.
fn sparse_graph(rng: &mut SmallRng) -> (usize, Vec<(usize, usize, f64)>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut order, rng);

    let mut edges: Vec<(usize, usize, f64)> = order
        .windows(2)
        .map(|pair| (pair[0], pair[1], f64::from(rng.gen_range(1_i32..=100))))
        .collect();

    let extra = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra {
        let u = rng.gen_range(0..vertex_count);
        let v = rng.gen_range(0..vertex_count);
        if u != v {
            edges.push((u, v, f64::from(rng.gen_range(1_i32..=100))));
        }
    }
    (vertex_count, edges)
}

/// Builds two to five internally random components, then shuffles the edge
/// list so components interleave in input order.
fn disconnected_graph(rng: &mut SmallRng) -> (usize, Vec<(usize, usize, f64)>) {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(1..=10))
        .collect();
    let mut edges = Vec::new();
    let mut offset = 0;
    for size in sizes {
        let p = rng.gen_range(0.3..=0.9);
        for u in offset..offset + size {
            for v in (u + 1)..offset + size {
                if rng.gen_bool(p) {
                    edges.push((u, v, f64::from(rng.gen_range(1_i32..=20))));
                }
            }
        }
        offset += size;
    }
    shuffle(&mut edges, rng);
    (offset, edges)
}

/// Fisher-Yates shuffle.
pub(super) fn shuffle<T>(items: &mut [T], rng: &mut SmallRng) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
