//! Directed Graph
//!
//! This module implements the graph container and its mutation protocol.
//!
//! # Overview
//!
//! The graph is a dense sequence of node records where:
//!
//! - Each node holds an `f64` value and an ordered list of outgoing neighbours
//! - An edge `a -> b` is nothing more than an occurrence of `b` in `a`'s list
//!
//! Parallel edges and self-loops are allowed. Two parallel edges cannot be told
//! apart, so removing an edge removes exactly one occurrence.
//!
//! # Indexing
//!
//! Node indices are positions, not identities. Removing node `m` shifts every
//! node above `m` down by one and rewrites every stored reference accordingly,
//! so an index obtained before a `remove_node` call must not be reused after it.
//!
//! # Design Decisions
//!
//! 1. Values and outgoing lists live together in one `Node` record, so the two
//!    can never disagree on length.
//!
//! 2. Outgoing lists are sequences rather than sets because multiplicity and
//!    insertion order decide which occurrence `remove_edge` removes.
//!
//! 3. `add_node` always commits the append, even when the requested parent is
//!    rejected. The error carries the index of the node that was created.

mod error;
mod node;
mod store;

pub use error::{GraphError, GraphResult};
pub use node::{Node, NodeIndex, Outgoing};
pub use store::{Edges, Graph};
