use std::collections::{HashSet, VecDeque};

use crate::algos::shared::ensure_endpoints;
use crate::algos::types::TraversalResult;
use crate::error::Result;
use crate::graph::{edge_id, Graph};
use crate::trace::{AlgorithmRun, StepData, StepKind, Trace};

/// State tracked during BFS traversal
struct BfsState {
    visited: HashSet<String>,
    queue: VecDeque<(String, usize)>,
    order: Vec<String>,
    trace: Trace,
}

impl BfsState {
    fn new(start: &str) -> Self {
        let mut visited = HashSet::new();
        visited.insert(start.to_string());
        let mut queue = VecDeque::new();
        queue.push_back((start.to_string(), 0));
        Self {
            visited,
            queue,
            order: Vec::new(),
            trace: Trace::new(),
        }
    }
}

/// Breadth-first traversal from `start`.
///
/// A node is marked visited when it is enqueued, so it enters the queue at
/// most once. Neighbors are examined in adjacency insertion order. When a
/// target is given the traversal still covers the whole reachable set and
/// reports whether the target was among it.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), directed = graph.is_directed()))]
pub fn bfs(graph: &Graph, start: &str, target: Option<&str>) -> Result<AlgorithmRun<TraversalResult>> {
    ensure_endpoints(graph, start, target)?;

    let mut state = BfsState::new(start);
    state.trace.push(
        StepKind::Init,
        start,
        format!("Starting BFS from {}", start),
        StepData::Frontier {
            size: 1,
            depth: Some(0),
        },
    );

    while let Some((current, depth)) = state.queue.pop_front() {
        state.order.push(current.clone());
        state.trace.push(
            StepKind::VisitNode,
            current.as_str(),
            format!("Visiting {} at depth {}", current, depth),
            StepData::Frontier {
                size: state.queue.len(),
                depth: Some(depth),
            },
        );

        for adjacent in graph.adjacent(&current)? {
            let seen = state.visited.contains(&adjacent.node);
            state.trace.push(
                StepKind::ExploreEdge,
                edge_id(&current, &adjacent.node),
                format!("Checking neighbor {} of {}", adjacent.node, current),
                StepData::Edge {
                    from: current.clone(),
                    to: adjacent.node.clone(),
                    weight: adjacent.weight,
                    visited: seen,
                },
            );
            if seen {
                continue;
            }

            state.visited.insert(adjacent.node.clone());
            state.queue.push_back((adjacent.node.clone(), depth + 1));
            state.trace.push(
                StepKind::Enqueue,
                adjacent.node.as_str(),
                format!("Adding {} to the queue", adjacent.node),
                StepData::Frontier {
                    size: state.queue.len(),
                    depth: Some(depth + 1),
                },
            );
        }
    }

    let visited = state.order.len();
    state.trace.push(
        StepKind::Complete,
        "",
        format!("BFS complete, visited {} nodes", visited),
        StepData::Summary {
            count: visited,
            total: None,
        },
    );
    tracing::debug!(visited, steps = state.trace.len(), "bfs_complete");

    let target_reached = target.map(|t| state.order.iter().any(|n| n == t));
    Ok(AlgorithmRun::new(
        TraversalResult {
            start: start.to_string(),
            visit_order: state.order,
            target: target.map(str::to_string),
            target_reached,
        },
        state.trace,
    ))
}
