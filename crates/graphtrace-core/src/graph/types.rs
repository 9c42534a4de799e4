use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{GraphTraceError, Result};

/// Synthetic id of the edge from `from` to `to`, as used in step targets
pub fn edge_id(from: &str, to: &str) -> String {
    format!("{}-{}", from, to)
}

fn default_weight() -> f64 {
    1.0
}

/// A weighted edge as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    pub fn id(&self) -> String {
        edge_id(&self.from, &self.to)
    }
}

/// One entry of a node's adjacency list
#[derive(Debug, Clone, PartialEq)]
pub struct Adjacent {
    pub node: String,
    pub weight: f64,
}

/// Caller-supplied graph definition (the JSON input format)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSpec {
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// Weighted graph with insertion-ordered adjacency.
///
/// Directedness is fixed at construction. In an undirected graph every edge
/// appears once in [`Graph::edges`] and in the adjacency of both endpoints.
///
/// Parallel edges are kept as supplied, never merged: [`Graph::weight`]
/// reports the first one, shortest-path algorithms relax all of them, and
/// Kruskal considers each one separately (all but the lightest end up
/// rejected as cycle-forming).
///
/// The sum of absolute edge weights is kept finite, so no simple path and no
/// tree total can overflow.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    directed: bool,
    adjacency: IndexMap<String, Vec<Adjacent>>,
    edges: Vec<Edge>,
    weight_bound: f64,
}

impl Graph {
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            adjacency: IndexMap::new(),
            edges: Vec::new(),
            weight_bound: 0.0,
        }
    }

    /// Build a graph from a definition, rejecting edges to unlisted nodes
    pub fn from_spec(spec: &GraphSpec) -> Result<Self> {
        let mut graph = Graph::new(spec.directed);
        for node in &spec.nodes {
            graph.add_node(node.clone());
        }
        for edge in &spec.edges {
            graph.add_edge(&edge.from, &edge.to, edge.weight)?;
        }
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            directed = graph.directed,
            "graph_built"
        );
        Ok(graph)
    }

    /// Build a graph from an edge list, registering endpoints in order of
    /// first appearance
    pub fn from_edges(directed: bool, edges: &[(&str, &str, f64)]) -> Result<Self> {
        let mut graph = Graph::new(directed);
        for (from, to, weight) in edges {
            graph.add_node(*from);
            graph.add_node(*to);
            graph.add_edge(from, to, *weight)?;
        }
        Ok(graph)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Add a node. Returns false if it already existed.
    pub fn add_node(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.adjacency.contains_key(&id) {
            return false;
        }
        self.adjacency.insert(id, Vec::new());
        true
    }

    /// Add an edge between two existing nodes
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<()> {
        if !weight.is_finite() {
            return Err(GraphTraceError::InvalidWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
        }
        for endpoint in [from, to] {
            if !self.adjacency.contains_key(endpoint) {
                return Err(GraphTraceError::InvalidEdge {
                    from: from.to_string(),
                    to: to.to_string(),
                    missing: endpoint.to_string(),
                });
            }
        }

        let weight_bound = self.weight_bound + weight.abs();
        if !weight_bound.is_finite() {
            return Err(GraphTraceError::overflow("edge weights"));
        }

        self.weight_bound = weight_bound;
        self.push_adjacent(from, to, weight);
        if !self.directed && from != to {
            self.push_adjacent(to, from, weight);
        }
        self.edges.push(Edge::new(from, to, weight));
        Ok(())
    }

    fn push_adjacent(&mut self, from: &str, to: &str, weight: f64) {
        if let Some(list) = self.adjacency.get_mut(from) {
            list.push(Adjacent {
                node: to.to_string(),
                weight,
            });
        }
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Node ids in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.adjacency.keys().map(|k| k.as_str())
    }

    /// Sum of the absolute weights of every edge
    pub fn weight_bound(&self) -> f64 {
        self.weight_bound
    }

    /// Edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Adjacency entries of a node in insertion order
    pub fn adjacent(&self, node: &str) -> Result<&[Adjacent]> {
        self.adjacency
            .get(node)
            .map(|list| list.as_slice())
            .ok_or_else(|| GraphTraceError::unknown_node(node))
    }

    /// Neighbor ids of a node in insertion order
    pub fn neighbors(&self, node: &str) -> Result<Vec<&str>> {
        Ok(self
            .adjacent(node)?
            .iter()
            .map(|a| a.node.as_str())
            .collect())
    }

    /// Weight of the (first) edge from `from` to `to`
    pub fn weight(&self, from: &str, to: &str) -> Result<f64> {
        self.adjacent(from)?
            .iter()
            .find(|a| a.node == to)
            .map(|a| a.weight)
            .ok_or_else(|| GraphTraceError::EdgeNotFound {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    /// Every traversable (from, to, weight) arc: each edge once in a directed
    /// graph, both orientations in an undirected one. Ordered by source node
    /// insertion, then adjacency order.
    pub fn arcs(&self) -> impl Iterator<Item = (&str, &str, f64)> + '_ {
        self.adjacency.iter().flat_map(|(from, list)| {
            list.iter()
                .map(move |a| (from.as_str(), a.node.as_str(), a.weight))
        })
    }

    /// Convert back into the definition format
    pub fn to_spec(&self) -> GraphSpec {
        GraphSpec {
            directed: self.directed,
            nodes: self.nodes().map(str::to_string).collect(),
            edges: self.edges.clone(),
        }
    }
}
