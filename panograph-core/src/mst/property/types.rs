//! Fixture types for MST property tests.

use crate::error::MstError;
use crate::mst::{MinimumSpanningForest, compute_mst};

/// Weight and topology profile of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Each edge has a distinct weight drawn from a continuous range.
    Unique,
    /// Large groups of edges share identical weights.
    ManyIdentical,
    /// Random spanning tree plus roughly `0.5n` to `n` extra edges.
    Sparse,
    /// Edge probability between 0.7 and 0.95.
    Dense,
    /// Several components with no edges between them.
    Disconnected,
}

/// One generated candidate edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct FixtureEdge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
    pub bearing: f64,
}

/// A generated graph together with the profile that produced it.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Declared node count; ids range over `0..node_count`.
    pub node_count: usize,
    pub edges: Vec<FixtureEdge>,
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Feeds the fixture to [`compute_mst`] as parallel arrays.
    pub(super) fn compute(&self) -> Result<MinimumSpanningForest<usize>, MstError> {
        let from: Vec<usize> = self.edges.iter().map(|edge| edge.source).collect();
        let to: Vec<usize> = self.edges.iter().map(|edge| edge.target).collect();
        let weights: Vec<f64> = self.edges.iter().map(|edge| edge.weight).collect();
        let bearings: Vec<f64> = self.edges.iter().map(|edge| edge.bearing).collect();
        compute_mst(
            self.node_count,
            self.edges.len(),
            &from,
            &to,
            &weights,
            &bearings,
        )
    }

    /// Returns `true` when no two edges share a weight.
    pub(super) fn has_distinct_weights(&self) -> bool {
        let mut weights: Vec<f64> = self.edges.iter().map(|edge| edge.weight).collect();
        weights.sort_unstable_by(f64::total_cmp);
        weights.windows(2).all(|pair| pair[0] != pair[1])
    }

    /// Number of nodes touched by at least one edge.
    pub(super) fn touched_node_count(&self) -> usize {
        let mut touched = vec![false; self.node_count];
        for edge in &self.edges {
            touched[edge.source] = true;
            touched[edge.target] = true;
        }
        touched.into_iter().filter(|&hit| hit).count()
    }
}
