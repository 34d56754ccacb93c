//! Graph Storage
//!
//! The graph owns a dense `Vec` of node records and enforces two invariants
//! between operations:
//!
//! 1. Node indices are exactly `0..len()`.
//! 2. Every index in every outgoing list is `< len()`.
//!
//! # Node Removal
//!
//! Removing node `m` is the only operation that touches more than one record:
//!
//! 1. Remove record `m`, shifting every later record down one position
//! 2. In every remaining outgoing list, drop all occurrences of `m`
//! 3. In the same lists, decrement every reference greater than `m`
//!
//! Step 2 runs before step 3 so that a reference to `m` is never decremented
//! into a reference to `m - 1`. That includes self-loops on `m` and lists that
//! moved down in step 1.

use std::fmt;
use std::slice;

use tracing::{debug, trace};

use super::error::{GraphError, GraphResult};
use super::node::{Node, NodeIndex};

/// A directed graph with `f64` node payloads and dense indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    /// Node records, indexed by position.
    nodes: Vec<Node>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Append a node, optionally drawing an edge to it from `parent`.
    ///
    /// The node is appended even when `parent` is rejected. In that case the
    /// returned `GraphError::InvalidParent` carries the new node's index and no
    /// edge is added. A parent is valid only if it already existed before this
    /// call, so a node can never be its own parent.
    pub fn add_node(&mut self, value: f64, parent: Option<NodeIndex>) -> GraphResult<NodeIndex> {
        let node = NodeIndex::new(self.nodes.len());
        self.nodes.push(Node::new(value));

        match parent {
            None => {
                trace!(%node, value, "added node");
                Ok(node)
            }
            Some(parent) if parent < node => {
                self.nodes[parent.index()].push_edge(node);
                trace!(%node, %parent, value, "added node with parent edge");
                Ok(node)
            }
            Some(parent) => {
                debug!(%node, %parent, "rejected parent for new node");
                Err(GraphError::InvalidParent { parent, node })
            }
        }
    }

    /// Add an edge `from -> to`. Parallel edges and self-loops are allowed.
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) -> GraphResult<()> {
        if !self.contains_node(from) || !self.contains_node(to) {
            debug!(%from, %to, len = self.len(), "rejected edge with missing endpoint");
            return Err(GraphError::InvalidEdge { from, to });
        }

        self.nodes[from.index()].push_edge(to);
        trace!(%from, %to, "added edge");
        Ok(())
    }

    /// Remove one edge `from -> to`, the earliest one inserted.
    ///
    /// `to` is not range-checked: if it is out of range it simply cannot be
    /// found, and the call fails the same way as for a missing edge.
    pub fn remove_edge(&mut self, from: NodeIndex, to: NodeIndex) -> GraphResult<()> {
        let removed = self
            .nodes
            .get_mut(from.index())
            .map(|node| node.remove_first_edge(to))
            .unwrap_or(false);

        if !removed {
            debug!(%from, %to, "no such edge to remove");
            return Err(GraphError::InvalidEdge { from, to });
        }

        trace!(%from, %to, "removed edge");
        Ok(())
    }

    /// Remove a node together with its outgoing and incoming edges.
    ///
    /// Every node above `node` moves down one index and every stored reference
    /// is rewritten to match. The removed record is returned with its outgoing
    /// list in the numbering from before the call.
    pub fn remove_node(&mut self, node: NodeIndex) -> GraphResult<Node> {
        if !self.contains_node(node) {
            debug!(%node, len = self.len(), "rejected removal of missing node");
            return Err(GraphError::InvalidNode {
                node,
                len: self.len(),
            });
        }

        let removed = self.nodes.remove(node.index());

        let mut severed = 0;
        let mut shifted = 0;
        for other in self.nodes.iter_mut() {
            let (s, r) = other.forget(node);
            severed += s;
            shifted += r;
        }

        debug!(%node, severed, shifted, len = self.len(), "removed node");
        Ok(removed)
    }

    /// Remove every node and edge.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Get the total number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::out_degree).sum()
    }

    /// Check whether `node` refers to an existing node.
    pub fn contains_node(&self, node: NodeIndex) -> bool {
        node.index() < self.nodes.len()
    }

    /// Get a reference to a node.
    pub fn node(&self, node: NodeIndex) -> Option<&Node> {
        self.nodes.get(node.index())
    }

    /// Get a node's value.
    pub fn value(&self, node: NodeIndex) -> Option<f64> {
        self.node(node).map(Node::value)
    }

    /// Get a node's outgoing neighbours in insertion order.
    pub fn outgoing(&self, node: NodeIndex) -> Option<&[NodeIndex]> {
        self.node(node).map(Node::outgoing)
    }

    /// Check whether at least one edge `from -> to` exists.
    pub fn has_edge(&self, from: NodeIndex, to: NodeIndex) -> bool {
        self.edge_multiplicity(from, to) > 0
    }

    /// Number of parallel edges `from -> to`.
    pub fn edge_multiplicity(&self, from: NodeIndex, to: NodeIndex) -> usize {
        self.node(from).map_or(0, |n| n.multiplicity(to))
    }

    /// Iterate over nodes in index order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = (NodeIndex, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeIndex::new(i), node))
    }

    /// Iterate over all edges as `(from, to)` pairs, grouped by source in
    /// index order and by insertion order within a source.
    pub fn edges(&self) -> Edges<'_> {
        Edges {
            nodes: self.nodes.iter().enumerate(),
            current: None,
        }
    }
}

/// Iterator over a graph's edges, returned by [`Graph::edges`].
pub struct Edges<'a> {
    nodes: std::iter::Enumerate<slice::Iter<'a, Node>>,
    current: Option<(NodeIndex, slice::Iter<'a, NodeIndex>)>,
}

impl Iterator for Edges<'_> {
    type Item = (NodeIndex, NodeIndex);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((from, targets)) = &mut self.current {
                if let Some(&to) = targets.next() {
                    return Some((*from, to));
                }
            }
            let (i, node) = self.nodes.next()?;
            self.current = Some((NodeIndex::new(i), node.outgoing().iter()));
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph Nodes and Adjacency Lists:")?;
        for (index, node) in self.nodes() {
            write!(f, "Node {} ({}) ->", index, node.value())?;
            for target in node.outgoing() {
                write!(f, " {}", target)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
