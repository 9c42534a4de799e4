use crate::config::DEFAULT_CRITICAL_TOLERANCE;
use crate::error::Result;
use crate::graph::edge_id;
use crate::trace::{format_number, AlgorithmRun, EventBound, Step, StepData, StepKind, Trace};

use super::graph::TaskGraph;
use super::network::NetworkLayout;
use super::types::{PertResult, PertTask, TaskSchedule};

/// Aux key carrying a task's display name on pass steps
pub const TASK_NAME_AUX: &str = "name";

/// Options for the PERT scheduler
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PertOptions {
    /// Absolute tolerance under which a float counts as zero
    pub critical_tolerance: f64,
}

impl Default for PertOptions {
    fn default() -> Self {
        Self {
            critical_tolerance: DEFAULT_CRITICAL_TOLERANCE,
        }
    }
}

/// State carried across the scheduling phases
struct PertState<'a> {
    graph: TaskGraph<'a>,
    layout: NetworkLayout,
    earliest_start: Vec<f64>,
    earliest_finish: Vec<f64>,
    latest_start: Vec<f64>,
    latest_finish: Vec<f64>,
    trace: Trace,
}

impl<'a> PertState<'a> {
    fn new(graph: TaskGraph<'a>) -> Self {
        let n = graph.len();
        Self {
            layout: NetworkLayout::build(&graph),
            graph,
            earliest_start: vec![0.0; n],
            earliest_finish: vec![0.0; n],
            latest_start: vec![0.0; n],
            latest_finish: vec![0.0; n],
            trace: Trace::new(),
        }
    }

    fn record_event(&mut self, event: usize, bound: EventBound, time: f64) {
        let id = self.layout.event_id(event).to_string();
        let which = match bound {
            EventBound::Earliest => "earliest",
            EventBound::Latest => "latest",
        };
        self.trace.push(
            StepKind::UpdateEvent,
            id.as_str(),
            format!("Event {} {} time is {}", id, which, format_number(time)),
            StepData::Event {
                event: id.clone(),
                bound,
                time,
            },
        );
    }

    fn raise_earliest(&mut self, event: usize, time: f64) {
        if self.layout.raise_earliest(event, time) {
            self.record_event(event, EventBound::Earliest, time);
        }
    }

    fn lower_latest(&mut self, event: usize, time: f64) {
        if self.layout.lower_latest(event, time) {
            self.record_event(event, EventBound::Latest, time);
        }
    }

    /// Earliest times in topological order. Returns the project duration.
    fn forward_pass(&mut self) -> f64 {
        let start = self.layout.start_event();
        self.raise_earliest(start, 0.0);

        let order = self.graph.order.clone();
        for task in order {
            let es = self.graph.predecessors[task]
                .iter()
                .map(|&p| self.earliest_finish[p])
                .fold(0.0, f64::max);
            let ef = es + self.graph.duration(task);
            self.earliest_start[task] = es;
            self.earliest_finish[task] = ef;

            let id = self.graph.id(task);
            let step = Step::new(
                StepKind::VisitNode,
                id,
                format!(
                    "Forward pass: {} starts at {} and finishes at {}",
                    id,
                    format_number(es),
                    format_number(ef)
                ),
            )
            .with_data(StepData::TaskTimes {
                earliest_start: es,
                earliest_finish: ef,
                latest_start: None,
                latest_finish: None,
            })
            .with_aux(TASK_NAME_AUX, self.graph.label(task));
            self.trace.record(step);
            for event in self.layout.feeds(task).to_vec() {
                self.raise_earliest(event, ef);
            }
        }

        let duration = self.earliest_finish.iter().copied().fold(0.0, f64::max);
        let end = self.layout.end_event();
        self.raise_earliest(end, duration);
        duration
    }

    /// Latest times in reverse topological order
    fn backward_pass(&mut self, duration: f64) {
        let end = self.layout.end_event();
        self.lower_latest(end, duration);

        let order = self.graph.order.clone();
        for &task in order.iter().rev() {
            let lf = self.graph.successors[task]
                .iter()
                .map(|&s| self.latest_start[s])
                .reduce(f64::min)
                .unwrap_or(duration);
            let ls = lf - self.graph.duration(task);
            self.latest_start[task] = ls;
            self.latest_finish[task] = lf;

            let id = self.graph.id(task);
            let step = Step::new(
                StepKind::VisitNodeBack,
                id,
                format!(
                    "Backward pass: {} must start by {} and finish by {}",
                    id,
                    format_number(ls),
                    format_number(lf)
                ),
            )
            .with_data(StepData::TaskTimes {
                earliest_start: self.earliest_start[task],
                earliest_finish: self.earliest_finish[task],
                latest_start: Some(ls),
                latest_finish: Some(lf),
            })
            .with_aux(TASK_NAME_AUX, self.graph.label(task));
            self.trace.record(step);
            if let Some(own) = self.layout.completion(task) {
                self.lower_latest(own, lf);
            }
            let start = self.layout.task_start(task);
            self.lower_latest(start, ls);
        }

        if self.graph.is_empty() {
            let start = self.layout.start_event();
            self.lower_latest(start, 0.0);
        }
    }

    /// Total and free float of every task, snapped to zero within tolerance
    fn floats(&self, duration: f64, tolerance: f64) -> Vec<(f64, f64)> {
        let snap = |value: f64| if value.abs() < tolerance { 0.0 } else { value };
        (0..self.graph.len())
            .map(|task| {
                let total = self.latest_start[task] - self.earliest_start[task];
                let next_start = self.graph.successors[task]
                    .iter()
                    .map(|&s| self.earliest_start[s])
                    .reduce(f64::min)
                    .unwrap_or(duration);
                let free = next_start - self.earliest_finish[task];
                (snap(total), snap(free))
            })
            .collect()
    }

    /// Per-task schedule ordered by earliest start, ties in topological order
    fn rows(&self, floats: &[(f64, f64)], critical: &[bool]) -> Vec<TaskSchedule> {
        let mut rows: Vec<TaskSchedule> = self
            .graph
            .order
            .iter()
            .map(|&t| {
                let task = &self.graph.tasks[t];
                TaskSchedule {
                    task_id: task.id.clone(),
                    name: task.label().to_string(),
                    duration: task.duration,
                    earliest_start: self.earliest_start[t],
                    earliest_finish: self.earliest_finish[t],
                    latest_start: self.latest_start[t],
                    latest_finish: self.latest_finish[t],
                    total_float: floats[t].0,
                    free_float: floats[t].1,
                    is_critical: critical[t],
                }
            })
            .collect();
        rows.sort_by(|a, b| a.earliest_start.total_cmp(&b.earliest_start));
        rows
    }

    /// Emit critical task and dependency marks in topological order
    fn mark_critical(&mut self, critical: &[bool], floats: &[(f64, f64)], tolerance: f64) {
        let order = self.graph.order.clone();
        for task in order.into_iter().filter(|&t| critical[t]) {
            let id = self.graph.id(task);
            self.trace.push(
                StepKind::MarkCriticalNode,
                id,
                format!("{} is critical", id),
                StepData::Slack {
                    slack: floats[task].0,
                },
            );

            for &next in &self.graph.successors[task] {
                let gap = self.earliest_start[next] - self.earliest_finish[task];
                if !critical[next] || gap.abs() >= tolerance {
                    continue;
                }
                let next_id = self.graph.id(next);
                self.trace.push(
                    StepKind::MarkCriticalEdge,
                    edge_id(id, next_id),
                    format!("{} -> {} is a critical dependency", id, next_id),
                    StepData::Slack { slack: gap },
                );
            }
        }
    }
}

/// Critical-path schedule of a task list.
///
/// Validates the tasks, then runs the forward pass, the backward pass and
/// critical-path extraction, recording each phase. Input order does not
/// matter; dependencies alone decide the processing order. A task is
/// critical when its total float is zero within `critical_tolerance`.
#[tracing::instrument(skip(tasks), fields(tasks = tasks.len()))]
pub fn schedule(tasks: &[PertTask], options: PertOptions) -> Result<AlgorithmRun<PertResult>> {
    let graph = TaskGraph::build(tasks)?;
    let tolerance = options.critical_tolerance;

    let mut state = PertState::new(graph);
    state.trace.push(
        StepKind::Init,
        "",
        format!("Scheduling {} tasks", tasks.len()),
        StepData::Summary {
            count: tasks.len(),
            total: None,
        },
    );

    let duration = state.forward_pass();
    tracing::trace!(duration, "pert_forward_pass_done");
    state.backward_pass(duration);

    let floats = state.floats(duration, tolerance);
    let critical: Vec<bool> = floats.iter().map(|(total, _)| *total == 0.0).collect();
    state.mark_critical(&critical, &floats, tolerance);

    let critical_path: Vec<String> = state
        .graph
        .order
        .iter()
        .filter(|&&t| critical[t])
        .map(|&t| state.graph.id(t).to_string())
        .collect();

    state.trace.push(
        StepKind::Complete,
        "",
        format!(
            "Project duration is {}, {} critical tasks",
            format_number(duration),
            critical_path.len()
        ),
        StepData::Summary {
            count: critical_path.len(),
            total: Some(duration),
        },
    );

    let schedule = state.rows(&floats, &critical);

    tracing::debug!(
        duration,
        critical = critical_path.len(),
        steps = state.trace.len(),
        "pert_complete"
    );

    let network = state.layout.finish(&state.graph, &critical, duration, tolerance);
    let result = PertResult {
        schedule,
        project_duration: duration,
        critical_path,
        network,
    };
    Ok(AlgorithmRun::new(result, state.trace))
}
