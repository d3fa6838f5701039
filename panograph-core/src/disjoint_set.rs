//! Union-find (disjoint set union) keyed by node identity.
//!
//! Subset records are created once, from the node list handed to
//! [`DisjointSet::new`]. Queries about any other node fail with
//! [`DisjointSetError::UnknownNode`] rather than growing the partition.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::DisjointSetError;

/// A partition of nodes into disjoint components with path compression and
/// union by rank.
///
/// # Examples
/// ```
/// use panograph_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(["a", "b", "c"]);
/// sets.union(&"a", &"b")?;
/// let a_root = *sets.find(&"a")?;
/// let b_root = *sets.find(&"b")?;
/// assert_eq!(a_root, b_root);
/// assert_ne!(sets.find(&"c")?, &a_root);
/// # Ok::<(), panograph_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet<N> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl<N> DisjointSet<N>
where
    N: Clone + Debug + Eq + Hash,
{
    /// Creates one singleton subset per node with `parent = self` and
    /// `rank = 0`. Repeated nodes share the first record.
    pub fn new(nodes: impl IntoIterator<Item = N>) -> Self {
        let mut set = Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            parent: Vec::new(),
            rank: Vec::new(),
        };
        for node in nodes {
            if set.index.contains_key(&node) {
                continue;
            }
            let id = set.nodes.len();
            set.index.insert(node.clone(), id);
            set.nodes.push(node);
            set.parent.push(id);
            set.rank.push(0);
        }
        set
    }

    /// Number of registered nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when no nodes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` when `node` has a subset record.
    #[must_use]
    pub fn contains(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Returns the root of `node`'s component, compressing the path walked.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownNode`] when `node` was not supplied
    /// at construction.
    pub fn find(&mut self, node: &N) -> Result<&N, DisjointSetError> {
        let root = self.root_of(node)?;
        Ok(&self.nodes[root])
    }

    /// Merges the components of `x` and `y`.
    ///
    /// The lower-rank root is attached beneath the higher-rank root. On a tie
    /// `y`'s root goes under `x`'s root, whose rank then grows by one. Merging
    /// two members of the same component is a no-op; compare [`find`] results
    /// beforehand to detect that case.
    ///
    /// [`find`]: Self::find
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownNode`] when either node was not
    /// supplied at construction.
    pub fn union(&mut self, x: &N, y: &N) -> Result<(), DisjointSetError> {
        let x_root = self.root_of(x)?;
        let y_root = self.root_of(y)?;
        self.link_roots(x_root, y_root);
        Ok(())
    }

    /// Counts the current components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(id, &parent)| id == parent)
            .count()
    }

    pub(crate) fn root_of(&mut self, node: &N) -> Result<usize, DisjointSetError> {
        let id = *self
            .index
            .get(node)
            .ok_or_else(|| DisjointSetError::UnknownNode {
                node: format!("{node:?}"),
            })?;
        Ok(self.find_root(id))
    }

    /// Attaches one root beneath the other. Both arguments must be roots.
    pub(crate) fn link_roots(&mut self, x_root: usize, y_root: usize) {
        if x_root == y_root {
            return;
        }
        let x_rank = self.rank[x_root];
        let y_rank = self.rank[y_root];
        if x_rank < y_rank {
            self.parent[x_root] = y_root;
        } else {
            self.parent[y_root] = x_root;
            if x_rank == y_rank {
                self.rank[x_root] = x_rank.saturating_add(1);
            }
        }
    }

    fn find_root(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    #[cfg(test)]
    fn parent_of(&self, node: &N) -> Option<&N> {
        let id = *self.index.get(node)?;
        self.nodes.get(self.parent[id])
    }

    #[cfg(test)]
    fn rank_of(&self, node: &N) -> Option<u32> {
        self.index.get(node).map(|&id| self.rank[id])
    }
}
