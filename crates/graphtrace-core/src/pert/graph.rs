use std::collections::{HashMap, VecDeque};

use crate::error::{GraphTraceError, Result};

use super::types::PertTask;

/// Validated task dependency graph with a topological order.
///
/// Tasks are referred to by their index in the caller's list. Predecessor
/// lists are deduplicated and keep their first-seen order; successor lists
/// follow task input order.
#[derive(Debug)]
pub(crate) struct TaskGraph<'a> {
    pub tasks: &'a [PertTask],
    pub predecessors: Vec<Vec<usize>>,
    pub successors: Vec<Vec<usize>>,
    /// Kahn order, ties resolved by input order
    pub order: Vec<usize>,
}

impl<'a> TaskGraph<'a> {
    pub fn build(tasks: &'a [PertTask]) -> Result<Self> {
        let index = index_tasks(tasks)?;

        let mut predecessors: Vec<Vec<usize>> = Vec::with_capacity(tasks.len());
        for task in tasks {
            let mut resolved = Vec::with_capacity(task.predecessors.len());
            for predecessor in &task.predecessors {
                let Some(&p) = index.get(predecessor.as_str()) else {
                    return Err(GraphTraceError::UnknownPredecessor {
                        task: task.id.clone(),
                        predecessor: predecessor.clone(),
                    });
                };
                if !resolved.contains(&p) {
                    resolved.push(p);
                }
            }
            predecessors.push(resolved);
        }

        let mut successors = vec![Vec::new(); tasks.len()];
        for (task, preds) in predecessors.iter().enumerate() {
            for &p in preds {
                successors[p].push(task);
            }
        }

        let order = topological_order(tasks, &predecessors, &successors)?;
        Ok(Self {
            tasks,
            predecessors,
            successors,
            order,
        })
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn id(&self, task: usize) -> &'a str {
        let tasks: &'a [PertTask] = self.tasks;
        &tasks[task].id
    }

    /// Display name, falling back to the id
    pub fn label(&self, task: usize) -> &'a str {
        let tasks: &'a [PertTask] = self.tasks;
        tasks[task].label()
    }

    pub fn duration(&self, task: usize) -> f64 {
        self.tasks[task].duration
    }
}

/// Index tasks by id. The total duration must stay finite, since every
/// event time lies between zero and that total.
fn index_tasks(tasks: &[PertTask]) -> Result<HashMap<&str, usize>> {
    let mut index = HashMap::with_capacity(tasks.len());
    let mut total: f64 = 0.0;
    for (i, task) in tasks.iter().enumerate() {
        if !task.duration.is_finite() || task.duration < 0.0 {
            return Err(GraphTraceError::InvalidDuration {
                task: task.id.clone(),
                duration: task.duration,
            });
        }
        total += task.duration;
        if !total.is_finite() {
            return Err(GraphTraceError::overflow("task durations"));
        }
        if index.insert(task.id.as_str(), i).is_some() {
            return Err(GraphTraceError::DuplicateTaskId {
                id: task.id.clone(),
            });
        }
    }
    Ok(index)
}

/// Kahn's algorithm with a FIFO queue seeded in input order. Tasks left with
/// unresolved predecessors sit on or behind a cycle; a self-dependency
/// counts as one.
fn topological_order(
    tasks: &[PertTask],
    predecessors: &[Vec<usize>],
    successors: &[Vec<usize>],
) -> Result<Vec<usize>> {
    let mut in_degree: Vec<usize> = predecessors.iter().map(Vec::len).collect();
    let mut queue: VecDeque<usize> = (0..tasks.len()).filter(|&t| in_degree[t] == 0).collect();
    let mut order = Vec::with_capacity(tasks.len());

    while let Some(task) = queue.pop_front() {
        order.push(task);
        for &next in &successors[task] {
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                queue.push_back(next);
            }
        }
    }

    if order.len() < tasks.len() {
        let blocked: Vec<String> = (0..tasks.len())
            .filter(|&t| in_degree[t] > 0)
            .map(|t| tasks[t].id.clone())
            .collect();
        tracing::debug!(blocked = blocked.len(), "pert_cycle_detected");
        return Err(GraphTraceError::CyclicDependency { tasks: blocked });
    }
    Ok(order)
}
