use std::collections::HashSet;

use crate::algos::shared::ensure_endpoints;
use crate::algos::types::TraversalResult;
use crate::error::Result;
use crate::graph::{edge_id, Graph};
use crate::trace::{AlgorithmRun, StepData, StepKind, Trace};

/// Depth-first traversal from `start` with an explicit stack.
///
/// A node is marked visited when it is popped; already-visited pops are
/// dropped without a step. Neighbors are pushed in reverse adjacency order
/// so they are visited in insertion order. The same node may sit on the
/// stack more than once until its first pop.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), directed = graph.is_directed()))]
pub fn dfs(graph: &Graph, start: &str, target: Option<&str>) -> Result<AlgorithmRun<TraversalResult>> {
    ensure_endpoints(graph, start, target)?;

    let mut trace = Trace::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut order: Vec<String> = Vec::new();
    let mut stack: Vec<(String, usize)> = vec![(start.to_string(), 0)];

    trace.push(
        StepKind::Init,
        start,
        format!("Starting DFS from {}", start),
        StepData::Frontier {
            size: 1,
            depth: Some(0),
        },
    );

    while let Some((current, depth)) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }
        order.push(current.clone());
        trace.push(
            StepKind::VisitNode,
            current.as_str(),
            format!("Visiting {} at depth {}", current, depth),
            StepData::Frontier {
                size: stack.len(),
                depth: Some(depth),
            },
        );

        for adjacent in graph.adjacent(&current)?.iter().rev() {
            let seen = visited.contains(&adjacent.node);
            trace.push(
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

            stack.push((adjacent.node.clone(), depth + 1));
            trace.push(
                StepKind::PushStack,
                adjacent.node.as_str(),
                format!("Pushing {} onto the stack", adjacent.node),
                StepData::Frontier {
                    size: stack.len(),
                    depth: Some(depth + 1),
                },
            );
        }
    }

    trace.push(
        StepKind::Complete,
        "",
        format!("DFS complete, visited {} nodes", order.len()),
        StepData::Summary {
            count: order.len(),
            total: None,
        },
    );
    tracing::debug!(visited = order.len(), steps = trace.len(), "dfs_complete");

    let target_reached = target.map(|t| visited.contains(t));
    Ok(AlgorithmRun::new(
        TraversalResult {
            start: start.to_string(),
            visit_order: order,
            target: target.map(str::to_string),
            target_reached,
        },
        trace,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        Graph::from_edges(
            false,
            &[("A", "B", 1.0), ("A", "C", 1.0), ("B", "D", 1.0), ("C", "E", 1.0), ("D", "E", 1.0)],
        )
        .unwrap()
    }

    #[test]
    fn test_dfs_goes_deep_in_insertion_order() {
        let run = dfs(&sample(), "A", None).unwrap();
        assert_eq!(run.result.visit_order, vec!["A", "B", "D", "E", "C"]);
        assert_eq!(run.steps.targets(StepKind::VisitNode), vec!["A", "B", "D", "E", "C"]);
    }

    #[test]
    fn test_dfs_visits_each_node_once() {
        let run = dfs(&sample(), "A", None).unwrap();
        let mut visits = run.steps.targets(StepKind::VisitNode);
        visits.sort_unstable();
        visits.dedup();
        assert_eq!(visits.len(), run.steps.count(StepKind::VisitNode));
        assert_eq!(run.steps.count(StepKind::Init), 1);
        assert_eq!(run.steps.last().map(|s| s.kind), Some(StepKind::Complete));
    }

    #[test]
    fn test_dfs_push_stack_only_for_unvisited_neighbors() {
        let run = dfs(&sample(), "A", None).unwrap();
        // C is pushed from A before it is reached again through E
        assert_eq!(run.steps.targets(StepKind::PushStack), vec!["C", "B", "D", "E", "C"]);
        for step in run.steps.iter().filter(|s| s.kind == StepKind::ExploreEdge) {
            assert!(matches!(step.data, StepData::Edge { .. }));
        }
    }

    #[test]
    fn test_dfs_self_loop_and_target() {
        let mut graph = Graph::from_edges(true, &[("A", "A", 1.0), ("A", "B", 1.0)]).unwrap();
        graph.add_node("C");
        let run = dfs(&graph, "A", Some("C")).unwrap();
        assert_eq!(run.result.visit_order, vec!["A", "B"]);
        assert_eq!(run.result.target_reached, Some(false));
    }

    #[test]
    fn test_dfs_unknown_start() {
        assert!(dfs(&sample(), "Q", None).is_err());
    }
}
