//! Graph generators for MST property tests.
//!
//! Each generator is driven by a seeded [`SmallRng`] so rstest cases can pin
//! a distribution and seed while proptest samples both.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::types::{FixtureEdge, MstFixture, WeightDistribution};

const MIN_NODES: usize = 6;
const MAX_NODES: usize = 48;
/// Dense graphs stay smaller to bound the quadratic edge count.
const DENSE_MAX_NODES: usize = 24;

/// Samples a distribution and a seed, then generates the fixture.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (distribution_strategy(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

fn distribution_strategy() -> impl Strategy<Value = WeightDistribution> {
    prop_oneof![
        2 => Just(WeightDistribution::Unique),
        3 => Just(WeightDistribution::ManyIdentical),
        2 => Just(WeightDistribution::Sparse),
        2 => Just(WeightDistribution::Dense),
        2 => Just(WeightDistribution::Disconnected),
    ]
}

/// Generates a fixture for one distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => random_graph(rng, MAX_NODES, (0.2, 0.6), distribution, |r| {
            r.gen_range(0.1..100.0)
        }),
        WeightDistribution::ManyIdentical => {
            let pool: Vec<f64> = (0..rng.gen_range(1..=3))
                .map(|_| f64::from(rng.gen_range(1_u8..=10)))
                .collect();
            random_graph(rng, MAX_NODES, (0.3, 0.7), distribution, move |r| {
                pool[r.gen_range(0..pool.len())]
            })
        }
        WeightDistribution::Sparse => sparse_graph(rng),
        WeightDistribution::Dense => {
            random_graph(rng, DENSE_MAX_NODES, (0.7, 0.95), distribution, |r| {
                r.gen_range(0.1..100.0)
            })
        }
        WeightDistribution::Disconnected => disconnected_graph(rng),
    }
}

#[derive(Default)]
struct EdgeList(Vec<FixtureEdge>);

impl EdgeList {
    fn push(&mut self, rng: &mut SmallRng, source: usize, target: usize, weight: f64) {
        let bearing = rng.gen_range(0.0..360.0);
        self.0.push(FixtureEdge {
            source,
            target,
            weight,
            bearing,
        });
    }
}

/// Adds each unordered pair with a probability drawn from `edge_prob`.
fn random_graph(
    rng: &mut SmallRng,
    max_nodes: usize,
    edge_prob: (f64, f64),
    distribution: WeightDistribution,
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=max_nodes);
    let probability = rng.gen_range(edge_prob.0..=edge_prob.1);
    let mut edges = EdgeList::default();

    for source in 0..node_count {
        for target in (source + 1)..node_count {
            if rng.gen_bool(probability) {
                let w = weight(rng);
                // Alternate orientation so bearings are not always low->high.
                if rng.gen_bool(0.5) {
                    edges.push(rng, source, target, w);
                } else {
                    edges.push(rng, target, source, w);
                }
            }
        }
    }

    if edges.0.is_empty() {
        let w = weight(rng);
        edges.push(rng, 0, 1, w);
    }

    MstFixture {
        node_count,
        edges: edges.0,
        distribution,
    }
}

/// Builds a random spanning path, then sprinkles extra edges.
fn sparse_graph(rng: &mut SmallRng) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut order: Vec<usize> = (0..node_count).collect();
    order.shuffle(rng);

    let mut edges = EdgeList::default();
    for pair in order.windows(2) {
        let w = rng.gen_range(0.1..100.0);
        edges.push(rng, pair[0], pair[1], w);
    }

    let extra = rng.gen_range(node_count / 2..=node_count);
    for _ in 0..extra {
        let source = rng.gen_range(0..node_count);
        let target = rng.gen_range(0..node_count);
        if source != target {
            let w = rng.gen_range(0.1..100.0);
            edges.push(rng, source, target, w);
        }
    }

    MstFixture {
        node_count,
        edges: edges.0,
        distribution: WeightDistribution::Sparse,
    }
}

/// Builds 2-5 components of 3-12 nodes with no edges between them.
fn disconnected_graph(rng: &mut SmallRng) -> MstFixture {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(3..=12))
        .collect();
    let node_count = sizes.iter().sum();
    let mut edges = EdgeList::default();
    let mut offset = 0;

    for size in sizes {
        let probability = rng.gen_range(0.3..=0.8);
        // A path first keeps each component connected internally.
        for node in offset + 1..offset + size {
            let w = rng.gen_range(0.1..100.0);
            edges.push(rng, node - 1, node, w);
        }
        for source in offset..offset + size {
            for target in source + 2..offset + size {
                if rng.gen_bool(probability) {
                    let w = rng.gen_range(0.1..100.0);
                    edges.push(rng, source, target, w);
                }
            }
        }
        offset += size;
    }

    MstFixture {
        node_count,
        edges: edges.0,
        distribution: WeightDistribution::Disconnected,
    }
}
