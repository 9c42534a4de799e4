//! Bellman-Ford single-source shortest paths.
//!
//! Handles negative edge weights and detects negative cycles reachable from
//! the source. In an undirected graph every edge is relaxable both ways, so
//! any negative edge forms a negative cycle.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::algos::shared::{
    describe_path, ensure_endpoints, initial_distances, ordered_predecessors, reconstruct_path,
};
use crate::algos::types::ShortestPathResult;
use crate::error::{GraphTraceError, Result};
use crate::graph::{edge_id, Graph};
use crate::trace::{AlgorithmRun, Distance, StepData, StepKind, Trace};

/// Options for Bellman-Ford
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BellmanFordOptions {
    /// Stop once a full pass relaxes no edge
    pub early_exit: bool,
}

impl Default for BellmanFordOptions {
    fn default() -> Self {
        Self { early_exit: true }
    }
}

fn distance_of(distances: &IndexMap<String, Distance>, node: &str) -> Distance {
    distances.get(node).copied().unwrap_or(Distance::Unreached)
}

/// Reject graphs whose distances could leave the finite range.
///
/// Each stored distance is built by a chain of relaxations adding one arc
/// weight apiece, and a run performs at most `passes * arcs` of them plus the
/// check pass. With a negative cycle the chain can revisit arcs, so the
/// simple-path bound the graph keeps is not enough on its own.
fn ensure_relaxation_bound(graph: &Graph, arcs: usize, max_passes: usize) -> Result<()> {
    let relaxations = (max_passes * arcs + 1) as f64;
    if (graph.weight_bound() * relaxations).is_finite() {
        Ok(())
    } else {
        Err(GraphTraceError::overflow("edge weights over every relaxation pass"))
    }
}

/// One relaxation pass over every arc. Returns the number of improvements.
fn relax_pass(
    arcs: &[(&str, &str, f64)],
    distances: &mut IndexMap<String, Distance>,
    predecessors: &mut HashMap<String, String>,
    trace: &mut Trace,
) -> usize {
    let mut relaxed = 0;
    for &(from, to, weight) in arcs {
        let candidate = distance_of(distances, from).extend(weight);
        if !candidate.improves_on(&distance_of(distances, to)) {
            continue;
        }
        if let Some(slot) = distances.get_mut(to) {
            *slot = candidate;
        }
        predecessors.insert(to.to_string(), from.to_string());
        relaxed += 1;
        trace.push(
            StepKind::UpdateDistance,
            to,
            format!("Updated distance of {} to {} via {}", to, candidate, from),
            StepData::Relaxation {
                node: to.to_string(),
                distance: candidate,
                previous: Some(from.to_string()),
            },
        );
    }
    relaxed
}

/// Single-source shortest paths allowing negative weights.
///
/// Runs at most `V - 1` relaxation passes over every arc, then one check
/// pass. If the check pass can still improve a distance, a negative cycle is
/// reachable from the source: the run reports it with a `negative_cycle` step
/// and no path, and the returned distances are not shortest distances.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn bellman_ford(
    graph: &Graph,
    source: &str,
    target: Option<&str>,
    options: BellmanFordOptions,
) -> Result<AlgorithmRun<ShortestPathResult>> {
    ensure_endpoints(graph, source, target)?;

    let arcs: Vec<(&str, &str, f64)> = graph.arcs().collect();
    let max_passes = graph.node_count().saturating_sub(1);
    ensure_relaxation_bound(graph, arcs.len(), max_passes)?;

    let mut distances = initial_distances(graph, source);
    let mut predecessors: HashMap<String, String> = HashMap::new();
    let mut trace = Trace::new();

    trace.push(
        StepKind::Init,
        source,
        format!("Starting Bellman-Ford from {}", source),
        StepData::Relaxation {
            node: source.to_string(),
            distance: Distance::ZERO,
            previous: None,
        },
    );

    for pass in 1..=max_passes {
        trace.push(
            StepKind::Iteration,
            "",
            format!("Relaxation pass {} of {}", pass, max_passes),
            StepData::Pass { pass, max_passes },
        );
        let relaxed = relax_pass(&arcs, &mut distances, &mut predecessors, &mut trace);
        if relaxed == 0 && options.early_exit {
            tracing::debug!(pass, "bellman_ford_converged");
            break;
        }
    }

    let cycle_arc = arcs.iter().find(|(from, to, weight)| {
        distance_of(&distances, from)
            .extend(*weight)
            .improves_on(&distance_of(&distances, to))
    });
    let has_negative_cycle = cycle_arc.is_some();
    if let Some(&(from, to, weight)) = cycle_arc {
        trace.push(
            StepKind::NegativeCycle,
            edge_id(from, to),
            format!("Negative cycle detected: edge {} -> {} still relaxes", from, to),
            StepData::Edge {
                from: from.to_string(),
                to: to.to_string(),
                weight,
                visited: true,
            },
        );
        tracing::warn!(from, to, "negative_cycle_detected");
    }

    let path = match target {
        Some(target) if !has_negative_cycle && distance_of(&distances, target).is_reached() => {
            reconstruct_path(&predecessors, source, target, graph.node_count())
        }
        _ => None,
    };
    if let (Some(found), Some(target)) = (&path, target) {
        let distance = distance_of(&distances, target);
        trace.push(
            StepKind::FoundPath,
            target,
            format!("Found path {} ({})", describe_path(found), distance),
            StepData::Path {
                path: found.clone(),
                distance,
            },
        );
    }

    let reached = distances.values().filter(|d| d.is_reached()).count();
    trace.push(
        StepKind::Complete,
        "",
        format!("Bellman-Ford complete, reached {} nodes", reached),
        StepData::Summary {
            count: reached,
            total: None,
        },
    );

    let path_distance = match target {
        Some(_) if has_negative_cycle => Some(Distance::Unreached),
        Some(target) => Some(distance_of(&distances, target)),
        None => None,
    };
    let result = ShortestPathResult {
        source: source.to_string(),
        predecessors: ordered_predecessors(graph, &predecessors),
        distances,
        target: target.map(str::to_string),
        path,
        path_distance,
        has_negative_cycle,
    };
    Ok(AlgorithmRun::new(result, trace))
}
