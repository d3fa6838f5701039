//! Property runners for the Kruskal driver.

use std::collections::HashMap;

use proptest::prelude::*;
use proptest::test_runner::TestCaseResult;

use crate::disjoint_set::DisjointSet;
use crate::error::DisjointSetError;

use super::oracle::prim_forest;
use super::types::MstFixture;

/// Total weight and edge count must match the Prim oracle.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = fixture
        .compute()
        .map_err(|err| TestCaseError::fail(format!("compute_mst failed: {err}")))?;
    let oracle = prim_forest(fixture.node_count, &fixture.edges);

    prop_assert_eq!(
        forest.edges().len(),
        oracle.edge_count,
        "edge count differs for {:?}",
        fixture.distribution
    );
    let tolerance = 1e-9 * oracle.total_weight.abs().max(1.0);
    prop_assert!(
        (forest.total_weight() - oracle.total_weight).abs() <= tolerance,
        "total weight {} differs from oracle {} for {:?}",
        forest.total_weight(),
        oracle.total_weight,
        fixture.distribution
    );
    Ok(())
}

/// Checks acyclicity, the size bound, metadata pass-through and idempotent
/// root queries on the produced forest.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = fixture
        .compute()
        .map_err(|err| TestCaseError::fail(format!("compute_mst failed: {err}")))?;
    let edges = forest.edges();

    prop_assert!(edges.len() <= fixture.node_count.saturating_sub(1));
    let expected_edges = fixture.touched_node_count() - input_component_count(fixture);
    prop_assert_eq!(edges.len(), expected_edges);

    let mut available: HashMap<(usize, usize, u64, u64), usize> = HashMap::new();
    for edge in &fixture.edges {
        let key = (
            edge.source,
            edge.target,
            edge.weight.to_bits(),
            edge.bearing.to_bits(),
        );
        *available.entry(key).or_default() += 1;
    }
    for edge in edges {
        let key = (
            *edge.v1(),
            *edge.v2(),
            edge.weight().to_bits(),
            edge.bearing().to_bits(),
        );
        let remaining = available.get_mut(&key);
        prop_assert!(
            remaining.as_ref().is_some_and(|count| **count > 0),
            "forest edge {:?} not present in the input",
            edge
        );
        if let Some(count) = remaining {
            *count -= 1;
        }
    }

    let mut sets = DisjointSet::new(0..fixture.node_count);
    for edge in edges {
        let left = *sets.find(edge.v1()).map_err(fail)?;
        let right = *sets.find(edge.v2()).map_err(fail)?;
        prop_assert_ne!(left, right, "edge {:?} closes a cycle", edge);
        sets.union(&left, &right).map_err(fail)?;
    }

    for node in 0..fixture.node_count {
        let root = *sets.find(&node).map_err(fail)?;
        prop_assert_eq!(*sets.find(&node).map_err(fail)?, root);
        prop_assert_eq!(*sets.find(&root).map_err(fail)?, root);
    }
    Ok(())
}

/// Distinct weights must produce identical forests on every run.
pub(super) fn run_determinism_property(fixture: &MstFixture) -> TestCaseResult {
    if !fixture.has_distinct_weights() {
        return Ok(());
    }
    let first = fixture
        .compute()
        .map_err(|err| TestCaseError::fail(format!("compute_mst failed: {err}")))?;
    for _ in 0..3 {
        let again = fixture
            .compute()
            .map_err(|err| TestCaseError::fail(format!("compute_mst failed: {err}")))?;
        prop_assert_eq!(&again, &first);
    }
    Ok(())
}

fn fail(err: DisjointSetError) -> TestCaseError {
    TestCaseError::fail(err.to_string())
}

/// Components among touched nodes, computed by flood fill over the input.
fn input_component_count(fixture: &MstFixture) -> usize {
    let mut adjacency = vec![Vec::new(); fixture.node_count];
    let mut touched = vec![false; fixture.node_count];
    for edge in &fixture.edges {
        adjacency[edge.source].push(edge.target);
        adjacency[edge.target].push(edge.source);
        touched[edge.source] = true;
        touched[edge.target] = true;
    }

    let mut visited = vec![false; fixture.node_count];
    let mut components = 0;
    for start in 0..fixture.node_count {
        if !touched[start] || visited[start] {
            continue;
        }
        components += 1;
        let mut stack = vec![start];
        visited[start] = true;
        while let Some(node) = stack.pop() {
            for &next in &adjacency[node] {
                if !visited[next] {
                    visited[next] = true;
                    stack.push(next);
                }
            }
        }
    }
    components
}
