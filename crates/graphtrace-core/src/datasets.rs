//! Built-in sample inputs

use serde::Serialize;

use crate::error::{GraphTraceError, Result};
use crate::graph::Graph;
use crate::pert::PertTask;

/// What a dataset feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    Graph,
    Tasks,
}

/// Catalogue entry of a built-in dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetInfo {
    pub name: &'static str,
    pub kind: DatasetKind,
    pub description: &'static str,
}

pub const DATASETS: &[DatasetInfo] = &[
    DatasetInfo {
        name: "road-network",
        kind: DatasetKind::Graph,
        description: "French road network, 10 cities and 18 roads in km (undirected)",
    },
    DatasetInfo {
        name: "negative-weights",
        kind: DatasetKind::Graph,
        description: "Directed city graph with negative edges; Marseille, Nice and Toulouse form a negative cycle",
    },
    DatasetInfo {
        name: "negative-cycle",
        kind: DatasetKind::Graph,
        description: "Three-node directed cycle A -> B -> C -> A of total weight -1",
    },
    DatasetInfo {
        name: "construction",
        kind: DatasetKind::Tasks,
        description: "Six-task house construction project",
    },
    DatasetInfo {
        name: "pert-sample",
        kind: DatasetKind::Tasks,
        description: "Twelve-task project with shared predecessors",
    },
];

const ROAD_NETWORK: &[(&str, &str, f64)] = &[
    ("Rennes", "Caen", 75.0),
    ("Rennes", "Nantes", 45.0),
    ("Rennes", "Paris", 110.0),
    ("Caen", "Paris", 50.0),
    ("Caen", "Lille", 65.0),
    ("Paris", "Lille", 70.0),
    ("Paris", "Dijon", 60.0),
    ("Lille", "Nancy", 100.0),
    ("Nantes", "Paris", 80.0),
    ("Nantes", "Bordeaux", 130.0),
    ("Bordeaux", "Nantes", 90.0),
    ("Bordeaux", "Lyon", 100.0),
    ("Lyon", "Dijon", 70.0),
    ("Lyon", "Grenoble", 40.0),
    ("Dijon", "Nancy", 75.0),
    ("Dijon", "Grenoble", 75.0),
    ("Grenoble", "Nancy", 80.0),
    ("Nancy", "Lille", 120.0),
];

const NEGATIVE_WEIGHTS: &[(&str, &str, f64)] = &[
    ("Paris", "Lyon", 4.0),
    ("Paris", "Bordeaux", 5.0),
    ("Lyon", "Marseille", 3.0),
    ("Bordeaux", "Toulouse", 2.0),
    ("Toulouse", "Marseille", 1.0),
    ("Marseille", "Nice", -2.0),
    ("Nice", "Toulouse", -5.0),
    ("Lyon", "Nice", 10.0),
];

const NEGATIVE_CYCLE: &[(&str, &str, f64)] = &[("A", "B", 1.0), ("B", "C", 1.0), ("C", "A", -3.0)];

/// Undirected French road network. Nantes-Bordeaux and Lille-Nancy each
/// appear twice with different lengths and are kept as parallel edges.
pub fn road_network() -> Result<Graph> {
    Graph::from_edges(false, ROAD_NETWORK)
}

pub fn negative_weights() -> Result<Graph> {
    Graph::from_edges(true, NEGATIVE_WEIGHTS)
}

pub fn negative_cycle() -> Result<Graph> {
    Graph::from_edges(true, NEGATIVE_CYCLE)
}

pub fn construction() -> Vec<PertTask> {
    vec![
        PertTask::new("A", "Preliminary studies", 3.0, &[]),
        PertTask::new("B", "Foundations", 5.0, &["A"]),
        PertTask::new("C", "Walls", 4.0, &["B"]),
        PertTask::new("D", "Roof", 3.0, &["C"]),
        PertTask::new("E", "Electricity", 2.0, &["B"]),
        PertTask::new("F", "Finishing", 2.0, &["D", "E"]),
    ]
}

pub fn pert_sample() -> Vec<PertTask> {
    vec![
        PertTask::new("A", "A", 3.0, &[]),
        PertTask::new("B", "B", 1.0, &["A"]),
        PertTask::new("C", "C", 5.0, &["A"]),
        PertTask::new("D", "D", 6.0, &["B"]),
        PertTask::new("E", "E", 4.0, &["B"]),
        PertTask::new("F", "F", 2.0, &["C", "I", "D"]),
        PertTask::new("G", "G", 9.0, &["E", "F"]),
        PertTask::new("H", "H", 5.0, &[]),
        PertTask::new("I", "I", 8.0, &["H"]),
        PertTask::new("J", "J", 2.0, &["H"]),
        PertTask::new("K", "K", 3.0, &["I"]),
        PertTask::new("L", "L", 7.0, &["J", "K"]),
    ]
}

/// Look up a dataset by name
pub fn find(name: &str) -> Result<&'static DatasetInfo> {
    DATASETS
        .iter()
        .find(|d| d.name == name)
        .ok_or_else(|| GraphTraceError::UnknownDataset(name.to_string()))
}

/// Load a graph dataset by name
pub fn load_graph(name: &str) -> Result<Graph> {
    let info = find(name)?;
    match info.name {
        "road-network" => road_network(),
        "negative-weights" => negative_weights(),
        "negative-cycle" => negative_cycle(),
        _ => Err(GraphTraceError::UsageError(format!(
            "dataset {} holds tasks, not a graph",
            name
        ))),
    }
}

/// Load a task dataset by name
pub fn load_tasks(name: &str) -> Result<Vec<PertTask>> {
    let info = find(name)?;
    match info.name {
        "construction" => Ok(construction()),
        "pert-sample" => Ok(pert_sample()),
        _ => Err(GraphTraceError::UsageError(format!(
            "dataset {} holds a graph, not tasks",
            name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algos::{bellman_ford, dijkstra, kruskal, prim, BellmanFordOptions};
    use crate::pert::{schedule, PertOptions};
    use crate::trace::Distance;

    #[test]
    fn test_road_network_shape() {
        let graph = road_network().unwrap();
        assert_eq!(graph.node_count(), 10);
        assert_eq!(graph.edge_count(), 18);
        assert!(!graph.is_directed());
        assert_eq!(graph.neighbors("Rennes").unwrap(), vec!["Caen", "Nantes", "Paris"]);
    }

    #[test]
    fn test_road_network_shortest_path() {
        let graph = road_network().unwrap();
        let run = dijkstra(&graph, "Rennes", Some("Grenoble")).unwrap();
        // Rennes -> Paris -> Dijon -> Grenoble
        assert_eq!(run.result.path_distance, Some(Distance::Finite(245.0)));
        let bf = bellman_ford(&graph, "Rennes", None, BellmanFordOptions::default()).unwrap();
        assert_eq!(
            bf.result.distances,
            dijkstra(&graph, "Rennes", None).unwrap().result.distances
        );
    }

    #[test]
    fn test_road_network_mst_weight_agrees() {
        let graph = road_network().unwrap();
        let k = kruskal(&graph).unwrap();
        let p = prim(&graph, "Paris").unwrap();
        assert!(k.result.is_spanning_tree());
        assert_eq!(k.result.edges.len(), 9);
        assert_eq!(k.result.total_weight, p.result.total_weight);
    }

    #[test]
    fn test_negative_datasets_have_cycles() {
        let run = bellman_ford(
            &negative_cycle().unwrap(),
            "A",
            None,
            BellmanFordOptions::default(),
        )
        .unwrap();
        assert!(run.result.has_negative_cycle);

        let run = bellman_ford(
            &negative_weights().unwrap(),
            "Paris",
            Some("Nice"),
            BellmanFordOptions::default(),
        )
        .unwrap();
        assert!(run.result.has_negative_cycle);
        assert!(run.result.path.is_none());
    }

    #[test]
    fn test_task_datasets_schedule() {
        let construction = schedule(&construction(), PertOptions::default()).unwrap();
        assert_eq!(construction.result.project_duration, 17.0);
        let sample = schedule(&pert_sample(), PertOptions::default()).unwrap();
        assert_eq!(sample.result.project_duration, 24.0);
    }

    #[test]
    fn test_lookup_errors() {
        assert!(matches!(
            load_graph("atlantis"),
            Err(GraphTraceError::UnknownDataset(_))
        ));
        assert!(matches!(
            load_graph("construction"),
            Err(GraphTraceError::UsageError(_))
        ));
        assert!(load_tasks("road-network").is_err());
        assert_eq!(find("pert-sample").unwrap().kind, DatasetKind::Tasks);
    }
}
