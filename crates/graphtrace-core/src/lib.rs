//! Graphtrace Core Library
//!
//! Instrumented graph algorithms: every run returns its result together
//! with an ordered trace of the state transitions it went through.

pub mod algos;
pub mod config;
pub mod datasets;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod pert;
pub mod trace;
pub mod union_find;
