//! Candidate edge list and the node set derived from it.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// A weighted link between two panoramas.
///
/// Connectivity treats the edge as undirected; `bearing` keeps the direction
/// from `v1` toward `v2` exactly as supplied.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<N> {
    v1: N,
    v2: N,
    weight: f64,
    bearing: f64,
}

impl<N> Edge<N> {
    /// Creates an edge.
    #[must_use]
    pub const fn new(v1: N, v2: N, weight: f64, bearing: f64) -> Self {
        Self {
            v1,
            v2,
            weight,
            bearing,
        }
    }

    /// Returns the endpoint the bearing is measured from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn v1(&self) -> &N { &self.v1 }

    /// Returns the endpoint the bearing points toward.
    #[must_use]
    #[rustfmt::skip]
    pub const fn v2(&self) -> &N { &self.v2 }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns the bearing in degrees from `v1` toward `v2`.
    #[must_use]
    #[rustfmt::skip]
    pub const fn bearing(&self) -> f64 { self.bearing }
}

/// Accumulates edges and records each endpoint the first time it appears.
///
/// A node without an incident edge never enters the graph.
///
/// # Examples
/// ```
/// use panograph_core::{Edge, Graph};
///
/// let mut graph = Graph::new();
/// graph.add_edge(Edge::new("b", "a", 1.0, 0.0));
/// graph.add_edge(Edge::new("a", "c", 2.0, 90.0));
/// assert_eq!(graph.nodes(), ["b", "a", "c"]);
/// assert_eq!(graph.edges().len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Graph<N> {
    edges: Vec<Edge<N>>,
    nodes: Vec<N>,
    seen: HashSet<N>,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self {
            edges: Vec::new(),
            nodes: Vec::new(),
            seen: HashSet::new(),
        }
    }
}

impl<N> Graph<N>
where
    N: Clone + Debug + Eq + Hash,
{
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `edges` edges.
    #[must_use]
    pub fn with_capacity(edges: usize) -> Self {
        Self {
            edges: Vec::with_capacity(edges),
            nodes: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Appends `edge`, registering either endpoint not seen before.
    pub fn add_edge(&mut self, edge: Edge<N>) {
        self.register(&edge.v1);
        self.register(&edge.v2);
        self.edges.push(edge);
    }

    /// Returns the edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge<N>] {
        &self.edges
    }

    /// Returns the distinct nodes in first-seen order.
    #[must_use]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Number of distinct nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn register(&mut self, node: &N) {
        if self.seen.insert(node.clone()) {
            self.nodes.push(node.clone());
        }
    }
}

impl<N> Extend<Edge<N>> for Graph<N>
where
    N: Clone + Debug + Eq + Hash,
{
    fn extend<I: IntoIterator<Item = Edge<N>>>(&mut self, iter: I) {
        for edge in iter {
            self.add_edge(edge);
        }
    }
}

impl<N> FromIterator<Edge<N>> for Graph<N>
where
    N: Clone + Debug + Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = Edge<N>>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}
