//! Minimum spanning tree (MST) construction.
//!
//! A sequential Kruskal driver: candidate edges are sorted by weight and
//! accepted greedily unless the [`DisjointSet`] reports that both endpoints
//! already share a component. Accepted edges keep the weight and bearing
//! they were supplied with.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, info, instrument};

use crate::disjoint_set::DisjointSet;
use crate::error::{EdgeArray, MstError};
use crate::graph::{Edge, Graph};

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimumSpanningForest<N> {
    edges: Vec<Edge<N>>,
    node_count: usize,
}

impl<N> MinimumSpanningForest<N> {
    /// Returns the accepted edges in acceptance (ascending weight) order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<N>] { &self.edges }

    /// Consumes the forest, returning its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge<N>> {
        self.edges
    }

    /// Returns the node count the forest spans.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Returns the number of connected components in the forest, counting
    /// every declared node that no accepted edge touches as its own
    /// component.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.node_count.saturating_sub(self.edges.len())
    }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count() == 1
    }

    /// Sums the weights of the accepted edges.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(Edge::weight).sum()
    }
}

/// Computes a minimum spanning forest from parallel per-edge arrays.
///
/// Edge `i` runs from `from_nodes[i]` to `to_nodes[i]` with `weights[i]` and
/// `bearings[i]`. The returned edges are a spanning forest when the input is
/// disconnected; count them against `node_count - 1` to tell the cases apart.
///
/// Equal weights are ordered by an unstable sort, so which of several
/// equal-weight edges is accepted first is unspecified.
///
/// # Examples
/// ```
/// use panograph_core::compute_mst;
///
/// let forest = compute_mst(
///     3,
///     3,
///     &["a", "b", "a"],
///     &["b", "c", "c"],
///     &[1.0, 2.0, 5.0],
///     &[0.0, 90.0, 45.0],
/// )?;
/// assert_eq!(forest.edges().len(), 2);
/// assert_eq!(forest.total_weight(), 3.0);
/// # Ok::<(), panograph_core::MstError>(())
/// ```
///
/// # Errors
///
/// Returns an error, before any spanning-tree work starts, when:
/// - any per-edge array length differs from `edge_count`
/// - the edges reference more than `node_count` distinct nodes
/// - a weight is NaN or infinite
#[instrument(
    name = "mst.compute",
    err,
    skip_all,
    fields(node_count = node_count, edge_count = edge_count),
)]
pub fn compute_mst<N>(
    node_count: usize,
    edge_count: usize,
    from_nodes: &[N],
    to_nodes: &[N],
    weights: &[f64],
    bearings: &[f64],
) -> Result<MinimumSpanningForest<N>, MstError>
where
    N: Clone + Debug + Eq + Hash,
{
    check_length(EdgeArray::FromNodes, edge_count, from_nodes.len())?;
    check_length(EdgeArray::ToNodes, edge_count, to_nodes.len())?;
    check_length(EdgeArray::Weights, edge_count, weights.len())?;
    check_length(EdgeArray::Bearings, edge_count, bearings.len())?;

    if let Some(index) = weights.iter().position(|weight| !weight.is_finite()) {
        return Err(MstError::NonFiniteWeight { index });
    }

    let mut graph = Graph::with_capacity(edge_count);
    for (((v1, v2), &weight), &bearing) in from_nodes.iter().zip(to_nodes).zip(weights).zip(bearings)
    {
        graph.add_edge(Edge::new(v1.clone(), v2.clone(), weight, bearing));
    }

    if graph.node_count() > node_count {
        return Err(MstError::NodeCountExceeded {
            declared: node_count,
            distinct: graph.node_count(),
        });
    }

    kruskal_over(&graph, node_count)
}

/// Runs Kruskal's algorithm over an already populated [`Graph`].
///
/// The forest spans exactly the nodes the graph has seen.
///
/// # Errors
///
/// Returns [`MstError::UnknownNode`] if the disjoint set is asked about a
/// node the graph never registered, which indicates a logic error.
pub fn kruskal<N>(graph: &Graph<N>) -> Result<MinimumSpanningForest<N>, MstError>
where
    N: Clone + Debug + Eq + Hash,
{
    kruskal_over(graph, graph.node_count())
}

fn check_length(array: EdgeArray, expected: usize, actual: usize) -> Result<(), MstError> {
    if actual == expected {
        Ok(())
    } else {
        Err(MstError::LengthMismatch {
            array,
            expected,
            actual,
        })
    }
}

#[instrument(
    name = "mst.kruskal",
    err,
    skip_all,
    fields(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        node_count = node_count,
    ),
)]
fn kruskal_over<N>(graph: &Graph<N>, node_count: usize) -> Result<MinimumSpanningForest<N>, MstError>
where
    N: Clone + Debug + Eq + Hash,
{
    let mut order: Vec<&Edge<N>> = graph.edges().iter().collect();
    order.sort_unstable_by(|left, right| left.weight().total_cmp(&right.weight()));

    let mut sets = DisjointSet::new(graph.nodes().iter().cloned());
    debug!(nodes = sets.len(), "disjoint set initialised");

    let limit = node_count.saturating_sub(1);
    let mut accepted = Vec::with_capacity(limit.min(order.len()));
    let mut rejected = 0_usize;

    for edge in order {
        if accepted.len() >= limit {
            break;
        }
        let root1 = sets.root_of(edge.v1())?;
        let root2 = sets.root_of(edge.v2())?;
        if root1 == root2 {
            rejected += 1;
            continue;
        }
        sets.link_roots(root1, root2);
        accepted.push(edge.clone());
    }

    let forest = MinimumSpanningForest {
        edges: accepted,
        node_count,
    };
    info!(
        accepted = forest.edges.len(),
        rejected = rejected,
        components = forest.component_count(),
        "minimum spanning forest computed"
    );
    Ok(forest)
}

#[cfg(test)]
mod property;
