use serde::{Deserialize, Serialize};

use super::network::AoaNetwork;

/// A task supplied to the scheduler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PertTask {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub duration: f64,
    /// Ids of tasks that must finish before this one starts
    #[serde(default)]
    pub predecessors: Vec<String>,
}

impl PertTask {
    pub fn new(id: &str, name: &str, duration: f64, predecessors: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            duration,
            predecessors: predecessors.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Display name, falling back to the id
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// The task-list input format
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskList {
    #[serde(default)]
    pub tasks: Vec<PertTask>,
}

/// Computed times of one task
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSchedule {
    pub task_id: String,
    pub name: String,
    pub duration: f64,
    pub earliest_start: f64,
    pub earliest_finish: f64,
    pub latest_start: f64,
    pub latest_finish: f64,
    /// Delay possible without delaying the project
    pub total_float: f64,
    /// Delay possible without delaying any successor's earliest start
    pub free_float: f64,
    pub is_critical: bool,
}

/// Outcome of a PERT scheduling run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PertResult {
    /// Every task, ordered by earliest start
    pub schedule: Vec<TaskSchedule>,
    pub project_duration: f64,
    /// Critical task ids in dependency order
    pub critical_path: Vec<String>,
    pub network: AoaNetwork,
}

impl PertResult {
    pub fn task(&self, id: &str) -> Option<&TaskSchedule> {
        self.schedule.iter().find(|t| t.task_id == id)
    }
}
