use std::collections::HashSet;

use crate::algos::shared::MinQueue;
use crate::algos::types::{MstCoverage, MstEdge, MstResult};
use crate::error::{GraphTraceError, Result};
use crate::graph::{edge_id, Graph};
use crate::trace::{AlgorithmRun, StepData, StepKind, Trace};

const ALGORITHM: &str = "prim";

/// An edge leaving the tree, waiting in the boundary queue
struct Boundary {
    from: String,
    to: String,
    weight: f64,
}

/// State tracked while growing the tree
struct PrimState {
    in_tree: HashSet<String>,
    boundary: MinQueue<Boundary>,
    edges: Vec<MstEdge>,
    total_weight: f64,
    trace: Trace,
}

impl PrimState {
    /// Add a node to the tree and queue every edge to a node outside it
    fn absorb(&mut self, graph: &Graph, node: &str) -> Result<()> {
        self.in_tree.insert(node.to_string());
        for adjacent in graph.adjacent(node)? {
            if self.in_tree.contains(&adjacent.node) {
                continue;
            }
            self.boundary.push(
                adjacent.weight,
                Boundary {
                    from: node.to_string(),
                    to: adjacent.node.clone(),
                    weight: adjacent.weight,
                },
            );
            self.trace.push(
                StepKind::ExploreEdge,
                edge_id(node, &adjacent.node),
                format!(
                    "Candidate edge {} - {} ({})",
                    node, adjacent.node, adjacent.weight
                ),
                StepData::Edge {
                    from: node.to_string(),
                    to: adjacent.node.clone(),
                    weight: adjacent.weight,
                    visited: false,
                },
            );
        }
        Ok(())
    }

    fn tree_edge(&self, edge: &Boundary) -> StepData {
        StepData::TreeEdge {
            from: edge.from.clone(),
            to: edge.to.clone(),
            weight: edge.weight,
            total_weight: self.total_weight,
        }
    }
}

/// Minimum spanning tree grown from `start`.
///
/// Repeatedly takes the lightest queued edge; an edge whose far end is
/// already in the tree is skipped. Stops once every node is in the tree or
/// the queue runs dry. On a disconnected graph only the component of
/// `start` is spanned and the result lists the nodes left out.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn prim(graph: &Graph, start: &str) -> Result<AlgorithmRun<MstResult>> {
    crate::ensure_node!(graph, start);
    if graph.is_directed() {
        return Err(GraphTraceError::undirected_required(ALGORITHM));
    }

    let mut state = PrimState {
        in_tree: HashSet::new(),
        boundary: MinQueue::new(),
        edges: Vec::new(),
        total_weight: 0.0,
        trace: Trace::new(),
    };
    state.trace.push(
        StepKind::Init,
        start,
        format!("Starting Prim from {}", start),
        StepData::None,
    );
    state.absorb(graph, start)?;

    while state.in_tree.len() < graph.node_count() {
        let Some((_, edge)) = state.boundary.pop() else {
            break;
        };
        let id = edge_id(&edge.from, &edge.to);

        if state.in_tree.contains(&edge.to) {
            let data = state.tree_edge(&edge);
            state.trace.push(
                StepKind::SkipEdge,
                id,
                format!("Skipping {} - {}: {} is already in the tree", edge.from, edge.to, edge.to),
                data,
            );
            continue;
        }

        state.total_weight += edge.weight;
        let data = state.tree_edge(&edge);
        state.trace.push(
            StepKind::AddEdge,
            id,
            format!("Adding {} - {} ({})", edge.from, edge.to, edge.weight),
            data,
        );
        state.absorb(graph, &edge.to)?;
        state.edges.push(MstEdge {
            from: edge.from,
            to: edge.to,
            weight: edge.weight,
        });
    }

    let coverage = if state.in_tree.len() == graph.node_count() {
        MstCoverage::SpanningTree
    } else {
        MstCoverage::Partial {
            unreached: graph
                .nodes()
                .filter(|n| !state.in_tree.contains(*n))
                .map(str::to_string)
                .collect(),
        }
    };

    state.trace.push(
        StepKind::Complete,
        "",
        format!(
            "Prim complete, {} edges with total weight {}",
            state.edges.len(),
            state.total_weight
        ),
        StepData::Summary {
            count: state.edges.len(),
            total: Some(state.total_weight),
        },
    );
    tracing::debug!(edges = state.edges.len(), total = state.total_weight, "prim_complete");

    Ok(AlgorithmRun::new(
        MstResult {
            edges: state.edges,
            total_weight: state.total_weight,
            coverage,
        },
        state.trace,
    ))
}
