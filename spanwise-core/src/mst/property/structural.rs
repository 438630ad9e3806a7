//! Structural invariants of engine output.
//!
//! For both engines on any generated graph:
//!
//! - the selected edges are drawn from the graph and contain no cycle;
//! - Kruskal selects `V - k` edges for `k` components;
//! - [`crate::validate`] accepts the output exactly when the graph is
//!   connected;
//! - the operation counters stay within the bounds the algorithms imply.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::mst::{MstResult, counters, kruskal, prim, validate};
use crate::{DisjointSet, Graph};

use super::types::GraphFixture;

/// Runs the structural checks against both engines.
pub(super) fn run_structural_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let forest = kruskal(&graph)
        .map_err(|err| TestCaseError::fail(format!("kruskal failed: {err} ({})", fixture.describe())))?;
    let tree = prim(&graph);

    for result in [&forest, &tree] {
        check_edges_come_from_graph(fixture, &graph, result)?;
        check_acyclic(fixture, result)?;
        check_validation(fixture, &graph, result)?;
    }

    let components = graph.component_count();
    if forest.edge_count() != fixture.vertex_count - components {
        return Err(TestCaseError::fail(format!(
            "kruskal selected {} edges for {components} components ({})",
            forest.edge_count(),
            fixture.describe(),
        )));
    }

    check_kruskal_counters(fixture, &graph, &forest)?;
    check_prim_counters(fixture, &graph, &tree)
}

/// Each union must shrink the set count by exactly one.
pub(super) fn run_union_accounting_property(fixture: &GraphFixture) -> TestCaseResult {
    let mut sets = DisjointSet::new(0..fixture.vertex_count);
    for &(u, v, _) in &fixture.edges {
        let before = sets.set_count();
        let merged = sets
            .union(&u, &v)
            .map_err(|err| TestCaseError::fail(format!("union failed: {err}")))?;
        let expected = if merged { before - 1 } else { before };
        if sets.set_count() != expected {
            return Err(TestCaseError::fail(format!(
                "union({u}, {v}) merged={merged} moved set count {before} -> {} ({})",
                sets.set_count(),
                fixture.describe(),
            )));
        }
        let connected = sets
            .connected(&u, &v)
            .map_err(|err| TestCaseError::fail(format!("connected failed: {err}")))?;
        if !connected {
            return Err(TestCaseError::fail(format!("{u} and {v} disjoint after union")));
        }
    }
    let components = fixture.graph().component_count();
    if sets.set_count() != components {
        return Err(TestCaseError::fail(format!(
            "{} sets after all unions but the graph has {components} components ({})",
            sets.set_count(),
            fixture.describe(),
        )));
    }
    Ok(())
}

fn check_edges_come_from_graph(
    fixture: &GraphFixture,
    graph: &Graph<usize>,
    result: &MstResult<usize>,
) -> TestCaseResult {
    match result.edges().iter().find(|edge| !graph.edges().contains(edge)) {
        Some(edge) => Err(TestCaseError::fail(format!(
            "{} selected {edge}, which is not a graph edge ({})",
            result.algorithm(),
            fixture.describe(),
        ))),
        None => Ok(()),
    }
}

fn check_acyclic(fixture: &GraphFixture, result: &MstResult<usize>) -> TestCaseResult {
    let rebuilt = Graph::new(0..fixture.vertex_count, result.edges().to_vec())
        .map_err(|err| TestCaseError::fail(format!("rebuild failed: {err}")))?;
    if rebuilt.has_cycle() {
        return Err(TestCaseError::fail(format!(
            "{} output contains a cycle ({})",
            result.algorithm(),
            fixture.describe(),
        )));
    }
    Ok(())
}

fn check_validation(
    fixture: &GraphFixture,
    graph: &Graph<usize>,
    result: &MstResult<usize>,
) -> TestCaseResult {
    let valid = validate(graph, result.edges());
    if valid != graph.is_connected() {
        return Err(TestCaseError::fail(format!(
            "{} output valid={valid} but connected={} ({})",
            result.algorithm(),
            graph.is_connected(),
            fixture.describe(),
        )));
    }
    Ok(())
}

fn counter(result: &MstResult<usize>, name: &str) -> Result<u64, TestCaseError> {
    result
        .operations()
        .get(name)
        .ok_or_else(|| TestCaseError::fail(format!("{} did not record {name}", result.algorithm())))
}

fn check_kruskal_counters(
    fixture: &GraphFixture,
    graph: &Graph<usize>,
    result: &MstResult<usize>,
) -> TestCaseResult {
    let considered = counter(result, counters::EDGE_CONSIDERED)?;
    let finds = counter(result, counters::FIND_CALLS)?;
    let unions = counter(result, counters::UNIONS)?;

    let selected = result.edge_count() as u64;
    let bounded = considered <= graph.edge_count() as u64
        && considered >= selected
        && unions == selected
        && finds == 2 * considered + 2 * unions;
    if !bounded {
        return Err(TestCaseError::fail(format!(
            "kruskal counters out of bounds: considered={considered}, finds={finds}, \
             unions={unions}, selected={selected} ({})",
            fixture.describe(),
        )));
    }
    Ok(())
}

fn check_prim_counters(
    fixture: &GraphFixture,
    graph: &Graph<usize>,
    result: &MstResult<usize>,
) -> TestCaseResult {
    let examinations = counter(result, counters::EDGE_EXAMINATIONS)?;
    let pushes = counter(result, counters::HEAP_PUSHES)?;
    let pops = counter(result, counters::HEAP_POPS)?;

    let edge_count = graph.edge_count() as u64;
    let bounded = pops <= pushes
        && pops >= result.edge_count() as u64
        && pushes <= edge_count
        && examinations <= 2 * edge_count;
    if !bounded {
        return Err(TestCaseError::fail(format!(
            "prim counters out of bounds: examinations={examinations}, pushes={pushes}, \
             pops={pops} ({})",
            fixture.describe(),
        )));
    }
    Ok(())
}
