//! Graph Dump
//!
//! Serializable, read-only views of a graph for reporting. The plain text
//! form is the `Display` impl on `Graph`; this module adds a structured form
//! that can be rendered as JSON.

use serde::Serialize;

use crate::graph::Graph;

/// One node in a dump.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeDump {
    /// Node index at the time of the dump
    pub index: usize,
    /// Node value
    pub value: f64,
    /// Outgoing neighbour indices, in insertion order
    pub outgoing: Vec<usize>,
}

/// Snapshot of a whole graph, nodes in index order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphDump {
    pub nodes: Vec<NodeDump>,
}

impl GraphDump {
    /// Capture the current state of `graph`.
    pub fn capture(graph: &Graph) -> Self {
        let nodes = graph
            .nodes()
            .map(|(index, node)| NodeDump {
                index: index.index(),
                value: node.value(),
                outgoing: node.outgoing().iter().map(|t| t.index()).collect(),
            })
            .collect();
        Self { nodes }
    }

    /// Render as a JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Render as indented JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&Graph> for GraphDump {
    fn from(graph: &Graph) -> Self {
        Self::capture(graph)
    }
}
