//! Graph algorithm implementations
//!
//! Every algorithm returns an [`AlgorithmRun`]: its result together with the
//! full trace of steps it recorded.
//! - `bfs`, `dfs`: traversal order from a start node
//! - `dijkstra`, `bellman_ford`: single-source shortest paths
//! - `prim`, `kruskal`: minimum spanning trees
//! - `shared`: priority queue and path helpers

pub mod bellman_ford;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod kruskal;
pub mod prim;
pub mod shared;
pub mod types;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

pub use bellman_ford::{bellman_ford, BellmanFordOptions};
pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use kruskal::kruskal;
pub use prim::prim;
pub use types::{MstCoverage, MstEdge, MstResult, ShortestPathResult, TraversalResult};

use crate::error::{GraphTraceError, Result};
use crate::graph::Graph;
use crate::trace::AlgorithmRun;

/// Graph algorithms that can be run by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    BellmanFord,
    Prim,
    Kruskal,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::BellmanFord,
        Algorithm::Prim,
        Algorithm::Kruskal,
    ];

    pub const NAMES: &'static [&'static str] =
        &["bfs", "dfs", "dijkstra", "bellman-ford", "prim", "kruskal"];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::BellmanFord => "bellman-ford",
            Algorithm::Prim => "prim",
            Algorithm::Kruskal => "kruskal",
        }
    }

    /// Whether the algorithm needs a start node
    pub fn requires_start(&self) -> bool {
        !matches!(self, Algorithm::Kruskal)
    }

    /// Whether the algorithm accepts a target node
    pub fn accepts_target(&self) -> bool {
        matches!(
            self,
            Algorithm::Bfs | Algorithm::Dfs | Algorithm::Dijkstra | Algorithm::BellmanFord
        )
    }
}

impl FromStr for Algorithm {
    type Err = GraphTraceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bellman-ford" | "bellman_ford" => Ok(Algorithm::BellmanFord),
            "prim" => Ok(Algorithm::Prim),
            "kruskal" => Ok(Algorithm::Kruskal),
            other => Err(GraphTraceError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of any algorithm, tagged by its family
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AlgorithmResult {
    Traversal(TraversalResult),
    ShortestPath(ShortestPathResult),
    SpanningTree(MstResult),
}

/// Parameters of a named algorithm run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunRequest<'a> {
    pub start: Option<&'a str>,
    pub target: Option<&'a str>,
    pub bellman_ford: BellmanFordOptions,
}

/// Run an algorithm by name with the shared request parameters
pub fn run_algorithm(
    graph: &Graph,
    algorithm: Algorithm,
    request: RunRequest<'_>,
) -> Result<AlgorithmRun<AlgorithmResult>> {
    let start = match (request.start, algorithm.requires_start()) {
        (Some(start), true) => start,
        (None, false) => "",
        (None, true) => crate::bail_usage!(format!("{} requires a start node", algorithm)),
        (Some(_), false) => {
            crate::bail_usage!(format!("{} does not take a start node", algorithm))
        }
    };
    if request.target.is_some() && !algorithm.accepts_target() {
        crate::bail_usage!(format!("{} does not take a target node", algorithm));
    }

    tracing::debug!(algorithm = %algorithm, start, target = ?request.target, "run_algorithm");
    let target = request.target;
    let run = match algorithm {
        Algorithm::Bfs => bfs(graph, start, target)?.map(AlgorithmResult::Traversal),
        Algorithm::Dfs => dfs(graph, start, target)?.map(AlgorithmResult::Traversal),
        Algorithm::Dijkstra => {
            dijkstra(graph, start, target)?.map(AlgorithmResult::ShortestPath)
        }
        Algorithm::BellmanFord => bellman_ford(graph, start, target, request.bellman_ford)?
            .map(AlgorithmResult::ShortestPath),
        Algorithm::Prim => prim(graph, start)?.map(AlgorithmResult::SpanningTree),
        Algorithm::Kruskal => kruskal(graph)?.map(AlgorithmResult::SpanningTree),
    };
    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::StepKind;

    #[test]
    fn test_algorithm_names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
        }
        assert_eq!(
            Algorithm::ALL.iter().map(|a| a.name()).collect::<Vec<_>>(),
            Algorithm::NAMES
        );
        assert_eq!("Bellman_Ford".parse::<Algorithm>().unwrap(), Algorithm::BellmanFord);
        assert!(matches!(
            "floyd".parse::<Algorithm>(),
            Err(GraphTraceError::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn test_run_algorithm_dispatches() {
        let graph = Graph::from_edges(false, &[("A", "B", 2.0), ("B", "C", 1.0)]).unwrap();
        let request = RunRequest {
            start: Some("A"),
            target: Some("C"),
            ..Default::default()
        };

        let run = run_algorithm(&graph, Algorithm::Dijkstra, request).unwrap();
        match run.result {
            AlgorithmResult::ShortestPath(result) => assert_eq!(result.path.map(|p| p.len()), Some(3)),
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(run.steps.steps()[0].kind, StepKind::Init);

        let run = run_algorithm(&graph, Algorithm::Kruskal, RunRequest::default()).unwrap();
        assert!(matches!(run.result, AlgorithmResult::SpanningTree(_)));
    }

    #[test]
    fn test_run_algorithm_validates_request() {
        let graph = Graph::from_edges(false, &[("A", "B", 1.0)]).unwrap();
        assert!(matches!(
            run_algorithm(&graph, Algorithm::Bfs, RunRequest::default()),
            Err(GraphTraceError::UsageError(_))
        ));
        let request = RunRequest {
            start: Some("A"),
            target: Some("B"),
            ..Default::default()
        };
        assert!(matches!(
            run_algorithm(&graph, Algorithm::Prim, request),
            Err(GraphTraceError::UsageError(_))
        ));
        let request = RunRequest {
            start: Some("Z"),
            ..Default::default()
        };
        let err = run_algorithm(&graph, Algorithm::Kruskal, request).unwrap_err();
        assert!(err.to_string().contains("does not take a start node"), "{}", err);
    }

    #[test]
    fn test_reruns_are_identical() {
        let graph = crate::datasets::road_network().unwrap();
        for algorithm in Algorithm::ALL {
            let request = RunRequest {
                start: algorithm.requires_start().then_some("Rennes"),
                target: algorithm.accepts_target().then_some("Grenoble"),
                ..Default::default()
            };
            let first = run_algorithm(&graph, algorithm, request).unwrap();
            let second = run_algorithm(&graph, algorithm, request).unwrap();
            assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&second).unwrap(),
                "{} is not deterministic",
                algorithm
            );
        }
    }

    #[test]
    fn test_algorithm_result_json_is_tagged() {
        let graph = Graph::from_edges(false, &[("A", "B", 1.0)]).unwrap();
        let request = RunRequest {
            start: Some("A"),
            ..Default::default()
        };
        let run = run_algorithm(&graph, Algorithm::Bfs, request).unwrap();
        let json = serde_json::to_value(&run).unwrap();
        assert_eq!(json["result"]["kind"], "traversal");
        assert_eq!(json["result"]["value"]["visitOrder"][1], "B");
        assert_eq!(json["steps"][0]["kind"], "init");
    }
}
