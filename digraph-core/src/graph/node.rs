//! Graph Nodes
//!
//! This module defines the node index type and the node record stored in the
//! graph.

use std::fmt;

use smallvec::SmallVec;

/// Outgoing neighbour list. Most nodes have a handful of successors, so the
/// first few are stored inline.
pub type Outgoing = SmallVec<[NodeIndex; 4]>;

/// Position of a node in the graph's dense `[0, N)` range.
///
/// An index is only meaningful for the graph state it was read from: removing
/// a node shifts every higher index down by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// Wrap a raw position.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw position.
    pub const fn index(self) -> usize {
        self.0
    }

    /// Rewrite this reference after `removed` has been deleted from the graph.
    ///
    /// Must not be called with `self == removed`; those references are
    /// dropped before renumbering.
    pub(crate) fn shift_past(&mut self, removed: NodeIndex) {
        debug_assert_ne!(*self, removed);
        if self.0 > removed.0 {
            self.0 -= 1;
        }
    }
}

impl From<usize> for NodeIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<NodeIndex> for usize {
    fn from(index: NodeIndex) -> Self {
        index.0
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A node record: its payload and its outgoing edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Scalar payload.
    value: f64,

    /// Targets of this node's edges, in insertion order.
    /// Duplicates are parallel edges.
    outgoing: Outgoing,
}

impl Node {
    /// Create a node with no outgoing edges.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            outgoing: Outgoing::new(),
        }
    }

    /// Get the node's value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Get the outgoing neighbours in insertion order.
    pub fn outgoing(&self) -> &[NodeIndex] {
        &self.outgoing
    }

    /// Number of outgoing edges, counting duplicates.
    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    /// Number of edges from this node to `target`.
    pub fn multiplicity(&self, target: NodeIndex) -> usize {
        self.outgoing.iter().filter(|&&t| t == target).count()
    }

    pub(crate) fn push_edge(&mut self, target: NodeIndex) {
        self.outgoing.push(target);
    }

    /// Remove the first edge to `target`. Returns false if there is none.
    pub(crate) fn remove_first_edge(&mut self, target: NodeIndex) -> bool {
        match self.outgoing.iter().position(|&t| t == target) {
            Some(pos) => {
                self.outgoing.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Drop every edge to `removed` and renumber the rest.
    ///
    /// Returns `(severed, shifted)`: how many edges were dropped and how many
    /// surviving references were decremented.
    pub(crate) fn forget(&mut self, removed: NodeIndex) -> (usize, usize) {
        let before = self.outgoing.len();
        self.outgoing.retain(|t| *t != removed);
        let severed = before - self.outgoing.len();

        let mut shifted = 0;
        for target in self.outgoing.iter_mut() {
            if *target > removed {
                shifted += 1;
            }
            target.shift_past(removed);
        }
        (severed, shifted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(i: usize) -> NodeIndex {
        NodeIndex::new(i)
    }

    #[test]
    fn new_node_has_no_edges() {
        let node = Node::new(1.5);
        assert_eq!(node.value(), 1.5);
        assert!(node.outgoing().is_empty());
        assert_eq!(node.out_degree(), 0);
    }

    #[test]
    fn edges_keep_insertion_order_and_duplicates() {
        let mut node = Node::new(0.0);
        node.push_edge(idx(2));
        node.push_edge(idx(0));
        node.push_edge(idx(2));

        assert_eq!(node.outgoing(), &[idx(2), idx(0), idx(2)]);
        assert_eq!(node.multiplicity(idx(2)), 2);
        assert_eq!(node.multiplicity(idx(1)), 0);
    }

    #[test]
    fn remove_first_edge_takes_one_occurrence() {
        let mut node = Node::new(0.0);
        node.push_edge(idx(1));
        node.push_edge(idx(3));
        node.push_edge(idx(1));

        assert!(node.remove_first_edge(idx(1)));
        assert_eq!(node.outgoing(), &[idx(3), idx(1)]);

        assert!(!node.remove_first_edge(idx(4)));
        assert_eq!(node.outgoing(), &[idx(3), idx(1)]);
    }

    #[test]
    fn forget_severs_then_renumbers() {
        let mut node = Node::new(0.0);
        for t in [0, 2, 3, 2, 5] {
            node.push_edge(idx(t));
        }

        let (severed, shifted) = node.forget(idx(2));

        assert_eq!(severed, 2);
        assert_eq!(shifted, 2);
        assert_eq!(node.outgoing(), &[idx(0), idx(2), idx(4)]);
    }

    #[test]
    fn shift_past_only_moves_higher_indices() {
        let mut low = idx(1);
        let mut high = idx(4);
        low.shift_past(idx(2));
        high.shift_past(idx(2));
        assert_eq!(low, idx(1));
        assert_eq!(high, idx(3));
    }

    #[test]
    fn index_conversions() {
        let index = NodeIndex::from(7);
        assert_eq!(index.index(), 7);
        assert_eq!(usize::from(index), 7);
        assert_eq!(index.to_string(), "7");
    }
}
