use indexmap::IndexMap;
use serde::Serialize;

use crate::trace::Distance;

/// Outcome of a breadth- or depth-first traversal
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraversalResult {
    pub start: String,
    /// Nodes in the order they were visited
    pub visit_order: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Whether the target was visited; set only when a target was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_reached: Option<bool>,
}

/// Outcome of a single-source shortest-path computation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortestPathResult {
    pub source: String,
    /// Distance of every node in insertion order. Nodes the algorithm never
    /// reached are `Distance::Unreached`.
    pub distances: IndexMap<String, Distance>,
    /// Predecessor of every node that received a finite distance
    pub predecessors: IndexMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Source-to-target path, when a target was given and reached
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
    /// Distance of the target; `Unreached` when no path exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_distance: Option<Distance>,
    pub has_negative_cycle: bool,
}

impl ShortestPathResult {
    pub fn distance(&self, node: &str) -> Option<Distance> {
        self.distances.get(node).copied()
    }
}

/// An edge accepted into a spanning tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MstEdge {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// How much of the graph a spanning-tree result covers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MstCoverage {
    /// Every node is connected by the accepted edges
    SpanningTree,
    /// Kruskal on a disconnected graph: a minimum spanning forest
    Forest { components: usize },
    /// Prim on a disconnected graph: only the start's component is spanned
    Partial { unreached: Vec<String> },
}

/// Outcome of a minimum-spanning-tree computation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MstResult {
    /// Accepted edges in acceptance order
    pub edges: Vec<MstEdge>,
    pub total_weight: f64,
    pub coverage: MstCoverage,
}

impl MstResult {
    pub fn is_spanning_tree(&self) -> bool {
        self.coverage == MstCoverage::SpanningTree
    }
}
