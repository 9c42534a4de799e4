//! PERT critical-path scheduling
//!
//! Takes a task list with durations and predecessor ids and computes the
//! earliest and latest times, the floats and the critical path of every
//! task. It also builds the Activity-on-Arrow network of the schedule.

mod graph;
pub mod network;
pub mod scheduler;
pub mod types;

pub use network::{AoaNetwork, EventKind, PertArc, PertEvent, END_EVENT, START_EVENT};
pub use scheduler::{schedule, PertOptions};
pub use types::{PertResult, PertTask, TaskList, TaskSchedule};

#[cfg(test)]
mod tests;
