//! Graph data model
//!
//! Provides the weighted graph every algorithm runs on:
//! - `types`: the graph itself, edges, and the JSON definition format
//! - `snapshot`: the read-only view handed to renderers

pub mod snapshot;
pub mod types;

pub use snapshot::{GraphSnapshot, SnapshotEdge, SnapshotNode};
pub use types::{edge_id, Adjacent, Edge, Graph, GraphSpec};
