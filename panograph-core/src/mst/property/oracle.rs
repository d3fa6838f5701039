//! Prim oracle for cross-checking Kruskal forests.
//!
//! A dense O(n²) Prim over the lightest edge per node pair, restarted from
//! every unvisited node so disconnected inputs yield a spanning forest.

use super::types::FixtureEdge;

/// Total weight and size of the oracle's minimum spanning forest.
#[derive(Clone, Copy, Debug)]
pub(super) struct OracleForest {
    pub total_weight: f64,
    pub edge_count: usize,
}

/// Computes a minimum spanning forest with Prim's algorithm.
pub(super) fn prim_forest(node_count: usize, edges: &[FixtureEdge]) -> OracleForest {
    let mut lightest = vec![vec![None::<f64>; node_count]; node_count];
    for edge in edges {
        if edge.source == edge.target {
            continue;
        }
        for (a, b) in [(edge.source, edge.target), (edge.target, edge.source)] {
            let slot = &mut lightest[a][b];
            if slot.is_none_or(|current| edge.weight < current) {
                *slot = Some(edge.weight);
            }
        }
    }

    let mut in_tree = vec![false; node_count];
    let mut total_weight = 0.0;
    let mut edge_count = 0;

    for start in 0..node_count {
        if in_tree[start] {
            continue;
        }
        let mut best: Vec<Option<f64>> = vec![None; node_count];
        let mut current = start;
        loop {
            in_tree[current] = true;
            for (node, weight) in lightest[current].iter().enumerate() {
                if in_tree[node] {
                    continue;
                }
                if let Some(weight) = *weight
                    && best[node].is_none_or(|known| weight < known)
                {
                    best[node] = Some(weight);
                }
            }

            let next = best
                .iter()
                .enumerate()
                .filter(|(node, _)| !in_tree[*node])
                .filter_map(|(node, weight)| weight.map(|w| (node, w)))
                .min_by(|left, right| left.1.total_cmp(&right.1));
            let Some((node, weight)) = next else {
                break;
            };
            total_weight += weight;
            edge_count += 1;
            current = node;
        }
    }

    OracleForest {
        total_weight,
        edge_count,
    }
}
