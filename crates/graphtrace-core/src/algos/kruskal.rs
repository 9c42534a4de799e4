use crate::algos::types::{MstCoverage, MstEdge, MstResult};
use crate::error::{GraphTraceError, Result};
use crate::graph::{Edge, Graph};
use crate::trace::{AlgorithmRun, StepData, StepKind, Trace};
use crate::union_find::UnionFind;

const ALGORITHM: &str = "kruskal";

/// Minimum spanning tree (or forest) by global edge order.
///
/// Edges are considered by ascending weight, equal weights in insertion
/// order. An edge joining two components is added; one inside a component
/// would close a cycle and is skipped. Stops early once `V - 1` edges are
/// accepted. On a disconnected graph the result is a minimum spanning
/// forest with one tree per component.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn kruskal(graph: &Graph) -> Result<AlgorithmRun<MstResult>> {
    if graph.is_directed() {
        return Err(GraphTraceError::undirected_required(ALGORITHM));
    }

    let mut sorted: Vec<&Edge> = graph.edges().iter().collect();
    sorted.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut trace = Trace::new();
    trace.push(
        StepKind::Init,
        "",
        format!("Sorted {} edges by weight", sorted.len()),
        StepData::Summary {
            count: sorted.len(),
            total: None,
        },
    );

    let mut components = UnionFind::new(graph.nodes());
    let needed = graph.node_count().saturating_sub(1);
    let mut edges: Vec<MstEdge> = Vec::new();
    let mut total_weight = 0.0;

    for edge in sorted {
        if edges.len() == needed {
            break;
        }

        let accepted = components.union(&edge.from, &edge.to);
        if accepted {
            total_weight += edge.weight;
            edges.push(MstEdge {
                from: edge.from.clone(),
                to: edge.to.clone(),
                weight: edge.weight,
            });
        }

        let (kind, description) = if accepted {
            (
                StepKind::AddEdge,
                format!("Adding {} - {} ({})", edge.from, edge.to, edge.weight),
            )
        } else {
            (
                StepKind::SkipEdge,
                format!("Skipping {} - {}: would form a cycle", edge.from, edge.to),
            )
        };
        trace.push(
            kind,
            edge.id(),
            description,
            StepData::TreeEdge {
                from: edge.from.clone(),
                to: edge.to.clone(),
                weight: edge.weight,
                total_weight,
            },
        );
    }

    let coverage = match components.set_count() {
        0 | 1 => MstCoverage::SpanningTree,
        n => MstCoverage::Forest { components: n },
    };

    trace.push(
        StepKind::Complete,
        "",
        format!(
            "Kruskal complete, {} edges with total weight {}",
            edges.len(),
            total_weight
        ),
        StepData::Summary {
            count: edges.len(),
            total: Some(total_weight),
        },
    );
    tracing::debug!(edges = edges.len(), total = total_weight, "kruskal_complete");

    Ok(AlgorithmRun::new(
        MstResult {
            edges,
            total_weight,
            coverage,
        },
        trace,
    ))
}
