//! Loading graphs and task lists from files, stdin or built-in datasets

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use graphtrace_core::datasets;
use graphtrace_core::error::{GraphTraceError, Result};
use graphtrace_core::graph::{Graph, GraphSpec};
use graphtrace_core::pert::{PertTask, TaskList};

use crate::cli::{GraphSource, TaskSource};

const STDIN_PATH: &str = "-";

/// Task files hold either `{"tasks": [...]}` or a bare task array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TaskFile {
    List(TaskList),
    Bare(Vec<PertTask>),
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_PATH {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }

    fs::read_to_string(path)
        .map_err(|e| GraphTraceError::io_operation("read", path.display(), e))
}

pub fn load_graph(source: &GraphSource) -> Result<Graph> {
    match (&source.graph, &source.dataset) {
        (Some(path), _) => {
            let spec: GraphSpec = serde_json::from_str(&read_input(path)?)?;
            tracing::debug!(path = %path.display(), "graph_file_loaded");
            Graph::from_spec(&spec)
        }
        (None, Some(name)) => datasets::load_graph(name),
        (None, None) => graphtrace_core::bail_usage!("either --graph or --dataset is required"),
    }
}

pub fn load_tasks(source: &TaskSource) -> Result<Vec<PertTask>> {
    match (&source.tasks, &source.dataset) {
        (Some(path), _) => {
            let tasks = match serde_json::from_str::<TaskFile>(&read_input(path)?)? {
                TaskFile::List(list) => list.tasks,
                TaskFile::Bare(tasks) => tasks,
            };
            tracing::debug!(path = %path.display(), tasks = tasks.len(), "task_file_loaded");
            Ok(tasks)
        }
        (None, Some(name)) => datasets::load_tasks(name),
        (None, None) => graphtrace_core::bail_usage!("either --tasks or --dataset is required"),
    }
}
