//! CLI commands for graphtrace

pub mod datasets;
pub mod dispatch;
pub mod graph;
pub mod input;
pub mod pert;
pub mod run;
pub mod steps;
