use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;

use crate::algos::shared::{
    describe_path, ensure_endpoints, initial_distances, ordered_predecessors, reconstruct_path,
    MinQueue,
};
use crate::algos::types::ShortestPathResult;
use crate::error::{GraphTraceError, Result};
use crate::graph::{edge_id, Graph};
use crate::trace::{AlgorithmRun, Distance, StepData, StepKind, Trace};

const ALGORITHM: &str = "dijkstra";

/// State tracked during Dijkstra search
struct DijkstraState {
    distances: IndexMap<String, Distance>,
    predecessors: HashMap<String, String>,
    settled: HashSet<String>,
    queue: MinQueue<String>,
    trace: Trace,
}

impl DijkstraState {
    fn new(graph: &Graph, source: &str) -> Self {
        let mut queue = MinQueue::new();
        queue.push(0.0, source.to_string());
        Self {
            distances: initial_distances(graph, source),
            predecessors: HashMap::new(),
            settled: HashSet::new(),
            queue,
            trace: Trace::new(),
        }
    }

    fn distance(&self, node: &str) -> Distance {
        self.distances
            .get(node)
            .copied()
            .unwrap_or(Distance::Unreached)
    }
}

/// Reject the first negative edge, since greedy settling is unsound with them
fn ensure_non_negative(graph: &Graph) -> Result<()> {
    match graph.edges().iter().find(|e| e.weight < 0.0) {
        Some(edge) => Err(GraphTraceError::NegativeWeight {
            algorithm: ALGORITHM.to_string(),
            from: edge.from.clone(),
            to: edge.to.clone(),
            weight: edge.weight,
        }),
        None => Ok(()),
    }
}

/// Relax every edge leaving a freshly settled node
fn relax_neighbors(graph: &Graph, current: &str, state: &mut DijkstraState) -> Result<()> {
    let base = state.distance(current);
    for adjacent in graph.adjacent(current)? {
        let settled = state.settled.contains(&adjacent.node);
        state.trace.push(
            StepKind::ExploreEdge,
            edge_id(current, &adjacent.node),
            format!(
                "Checking edge {} -> {} ({})",
                current, adjacent.node, adjacent.weight
            ),
            StepData::Edge {
                from: current.to_string(),
                to: adjacent.node.clone(),
                weight: adjacent.weight,
                visited: settled,
            },
        );
        if settled {
            continue;
        }

        let candidate = base.extend(adjacent.weight);
        if !candidate.improves_on(&state.distance(&adjacent.node)) {
            continue;
        }

        if let Some(slot) = state.distances.get_mut(&adjacent.node) {
            *slot = candidate;
        }
        state
            .predecessors
            .insert(adjacent.node.clone(), current.to_string());
        if let Some(value) = candidate.value() {
            state.queue.push(value, adjacent.node.clone());
        }
        state.trace.push(
            StepKind::UpdateDistance,
            adjacent.node.as_str(),
            format!(
                "Updated distance of {} to {} via {}",
                adjacent.node, candidate, current
            ),
            StepData::Relaxation {
                node: adjacent.node.clone(),
                distance: candidate,
                previous: Some(current.to_string()),
            },
        );
    }
    Ok(())
}

/// Single-source shortest paths on non-negative weights.
///
/// Nodes are settled in order of distance, equal distances in the order they
/// were queued. Stale queue entries are skipped. When a target is given the
/// search stops as soon as the target is settled; distances of nodes not yet
/// settled at that point are tentative.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn dijkstra(
    graph: &Graph,
    source: &str,
    target: Option<&str>,
) -> Result<AlgorithmRun<ShortestPathResult>> {
    ensure_endpoints(graph, source, target)?;
    ensure_non_negative(graph)?;

    let mut state = DijkstraState::new(graph, source);
    state.trace.push(
        StepKind::Init,
        source,
        format!("Starting Dijkstra from {}", source),
        StepData::Relaxation {
            node: source.to_string(),
            distance: Distance::ZERO,
            previous: None,
        },
    );

    let mut path = None;
    while let Some((key, current)) = state.queue.pop() {
        let distance = state.distance(&current);
        if state.settled.contains(&current) || distance.value() != Some(key) {
            continue;
        }
        state.settled.insert(current.clone());
        state.trace.push(
            StepKind::VisitNode,
            current.as_str(),
            format!("Settled {} at distance {}", current, distance),
            StepData::Settled { distance },
        );

        if target == Some(current.as_str()) {
            path = reconstruct_path(
                &state.predecessors,
                source,
                &current,
                graph.node_count(),
            );
            if let Some(found) = &path {
                state.trace.push(
                    StepKind::FoundPath,
                    current.as_str(),
                    format!("Found path {} ({})", describe_path(found), distance),
                    StepData::Path {
                        path: found.clone(),
                        distance,
                    },
                );
            }
            break;
        }

        relax_neighbors(graph, &current, &mut state)?;
    }

    let settled = state.settled.len();
    state.trace.push(
        StepKind::Complete,
        "",
        format!("Dijkstra complete, settled {} nodes", settled),
        StepData::Summary {
            count: settled,
            total: None,
        },
    );
    tracing::debug!(settled, steps = state.trace.len(), "dijkstra_complete");

    let path_distance = target.map(|t| state.distance(t));
    let result = ShortestPathResult {
        source: source.to_string(),
        predecessors: ordered_predecessors(graph, &state.predecessors),
        distances: state.distances,
        target: target.map(str::to_string),
        path,
        path_distance,
        has_negative_cycle: false,
    };
    Ok(AlgorithmRun::new(result, state.trace))
}
