//! Helpers shared by the priority-queue and shortest-path algorithms

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

use indexmap::IndexMap;

use crate::error::Result;
use crate::graph::Graph;
use crate::trace::Distance;

/// Reject a start or target node that is not part of the graph
pub fn ensure_endpoints(graph: &Graph, start: &str, target: Option<&str>) -> Result<()> {
    crate::ensure_node!(graph, start);
    if let Some(target) = target {
        crate::ensure_node!(graph, target);
    }
    Ok(())
}

/// Priority-queue entry ordered by key, ties broken by insertion sequence.
///
/// Equality and ordering ignore the payload, so entries with equal keys pop
/// in the order they were pushed.
#[derive(Debug, Clone)]
pub struct HeapEntry<T> {
    pub key: f64,
    pub seq: u64,
    pub item: T,
}

impl<T> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for HeapEntry<T> {}

impl<T> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for HeapEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .total_cmp(&other.key)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-priority queue over `HeapEntry`
#[derive(Debug)]
pub struct MinQueue<T> {
    heap: BinaryHeap<Reverse<HeapEntry<T>>>,
    next_seq: u64,
}

impl<T> MinQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, key: f64, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(HeapEntry { key, seq, item }));
    }

    /// Remove the entry with the smallest key
    pub fn pop(&mut self) -> Option<(f64, T)> {
        self.heap.pop().map(|Reverse(entry)| (entry.key, entry.item))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for MinQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Every node unreached except the source, in node insertion order
pub fn initial_distances(graph: &Graph, source: &str) -> IndexMap<String, Distance> {
    graph
        .nodes()
        .map(|node| {
            let distance = if node == source {
                Distance::ZERO
            } else {
                Distance::Unreached
            };
            (node.to_string(), distance)
        })
        .collect()
}

/// Walk predecessor links back from `target` to `source`.
///
/// Returns `None` when the chain breaks or runs longer than `limit` nodes,
/// which happens when the links contain a cycle.
pub fn reconstruct_path(
    predecessors: &HashMap<String, String>,
    source: &str,
    target: &str,
    limit: usize,
) -> Option<Vec<String>> {
    let mut path = vec![target.to_string()];
    let mut current = target;
    while current != source {
        if path.len() > limit {
            return None;
        }
        current = predecessors.get(current)?.as_str();
        path.push(current.to_string());
    }
    path.reverse();
    Some(path)
}

/// Predecessor links in node insertion order for the result payload
pub fn ordered_predecessors(
    graph: &Graph,
    predecessors: &HashMap<String, String>,
) -> IndexMap<String, String> {
    graph
        .nodes()
        .filter_map(|node| {
            predecessors
                .get(node)
                .map(|previous| (node.to_string(), previous.clone()))
        })
        .collect()
}

/// Human-readable path, e.g. `Paris -> Lyon -> Marseille`
pub fn describe_path(path: &[String]) -> String {
    path.join(" -> ")
}
