//! Digraph Core
//!
//! This crate provides a small in-memory directed graph whose nodes carry an
//! `f64` payload and whose node indices always form the dense range `[0, N)`.
//! It implements:
//!
//! - Parent-validated node insertion
//! - Edge insertion and single-occurrence edge removal
//! - Node removal with renumbering of every surviving node and edge
//! - A read-only textual and JSON dump of the graph
//!
//! # Architecture
//!
//! The crate is organized into two modules:
//!
//! - `graph`: the node records, index type, error type and the mutation protocol
//! - `dump`: reporting views that read the graph without mutating it
//!
//! # Example
//!
//! ```rust
//! use digraph_core::graph::{Graph, NodeIndex};
//!
//! let mut graph = Graph::new();
//! let root = graph.add_node(1.23, None).unwrap();
//! let child = graph.add_node(4.56, Some(root)).unwrap();
//!
//! assert!(graph.has_edge(root, child));
//!
//! graph.remove_node(root).unwrap();
//! assert_eq!(graph.len(), 1);
//! assert_eq!(graph.value(NodeIndex::new(0)), Some(4.56));
//! ```

pub mod dump;
pub mod graph;

pub use dump::{GraphDump, NodeDump};
pub use graph::{Graph, GraphError, GraphResult, Node, NodeIndex};
