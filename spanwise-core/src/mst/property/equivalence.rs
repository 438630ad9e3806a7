//! Cost agreement and optimality.
//!
//! Kruskal and Prim must agree on the cost of the tree spanning any
//! component, whichever vertex Prim starts from. Independently, Kruskal's
//! forest must satisfy the cycle optimality condition: no graph edge is
//! lighter than the heaviest forest edge on the path it would close.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::mst::{kruskal, prim_from};

use super::helpers::{component_labels, heaviest_on_path};
use super::types::GraphFixture;

const TOLERANCE: f64 = 1e-9;

/// Compares Prim's cost from several start vertices against the cost of
/// the matching component of Kruskal's forest.
pub(super) fn run_cost_agreement_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let forest = kruskal(&graph)
        .map_err(|err| TestCaseError::fail(format!("kruskal failed: {err} ({})", fixture.describe())))?;
    let labels = component_labels(fixture.vertex_count, graph.edges());

    let starts = [0, fixture.vertex_count / 2, fixture.vertex_count - 1];
    for start in starts {
        let tree = prim_from(&graph, &start).map_err(|err| {
            TestCaseError::fail(format!("prim_from({start}) failed: {err} ({})", fixture.describe()))
        })?;
        let component = labels[start];
        let expected: f64 = forest
            .edges()
            .iter()
            .filter(|edge| labels[*edge.u()] == component)
            .map(|edge| edge.weight())
            .sum();
        let size = labels.iter().filter(|&&label| label == component).count();

        if tree.edge_count() != size - 1 {
            return Err(TestCaseError::fail(format!(
                "prim from {start} selected {} edges for a component of {size} vertices ({})",
                tree.edge_count(),
                fixture.describe(),
            )));
        }
        if (tree.total_cost() - expected).abs() > TOLERANCE {
            return Err(TestCaseError::fail(format!(
                "cost mismatch from {start}: prim={}, kruskal component={expected} ({})",
                tree.total_cost(),
                fixture.describe(),
            )));
        }
    }
    Ok(())
}

/// Checks every graph edge against the forest path it would close.
pub(super) fn run_cycle_optimality_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let forest = kruskal(&graph)
        .map_err(|err| TestCaseError::fail(format!("kruskal failed: {err} ({})", fixture.describe())))?;

    for edge in graph.edges() {
        let Some(heaviest) =
            heaviest_on_path(fixture.vertex_count, forest.edges(), *edge.u(), *edge.v())
        else {
            return Err(TestCaseError::fail(format!(
                "forest leaves {edge} unconnected ({})",
                fixture.describe(),
            )));
        };
        if edge.weight() < heaviest {
            return Err(TestCaseError::fail(format!(
                "{edge} is lighter than the forest path maximum {heaviest} ({})",
                fixture.describe(),
            )));
        }
    }
    Ok(())
}
