//! Graph snapshots for renderers
//!
//! A snapshot is the answer to a graph-load request: the node list and the
//! edge list with synthetic edge ids, in the same order the algorithms see
//! them. Node placement is left to the consumer.

use serde::Serialize;

use super::types::{edge_id, Graph};
use crate::trace::format_number;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotNode {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub weight: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSnapshot {
    pub directed: bool,
    pub nodes: Vec<SnapshotNode>,
    pub edges: Vec<SnapshotEdge>,
}

impl GraphSnapshot {
    pub fn from_graph(graph: &Graph) -> Self {
        let nodes = graph
            .nodes()
            .map(|id| SnapshotNode {
                id: id.to_string(),
                label: id.to_string(),
            })
            .collect();

        let edges = graph
            .edges()
            .iter()
            .map(|e| SnapshotEdge {
                id: edge_id(&e.from, &e.to),
                source: e.from.clone(),
                target: e.to.clone(),
                weight: e.weight,
                label: format_number(e.weight),
            })
            .collect();

        GraphSnapshot {
            directed: graph.is_directed(),
            nodes,
            edges,
        }
    }
}

impl Graph {
    /// Snapshot of the graph for a graph-load response
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot::from_graph(self)
    }
}
