//! Activity-on-Arrow view of a schedule
//!
//! Milestone events are nodes and tasks are arcs. Tasks sharing the same
//! predecessor set start from one junction event. A task that feeds a
//! single junction ends on it directly; a task feeding several gets its own
//! completion event with zero-duration dummy arcs to each junction, so no
//! junction waits on a task it does not depend on.

use std::collections::HashMap;

use serde::Serialize;

use super::graph::TaskGraph;

pub const START_EVENT: &str = "start";
pub const END_EVENT: &str = "end";

const START: usize = 0;

/// Role of a milestone event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Start,
    /// All tasks of one predecessor set are done
    Junction,
    /// One task feeding several junctions is done
    Completion,
    End,
}

/// A milestone event with its occurrence window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PertEvent {
    pub id: String,
    pub label: String,
    pub kind: EventKind,
    pub earliest: f64,
    pub latest: f64,
    pub critical: bool,
}

/// A task arc or a dummy dependency arc
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PertArc {
    pub id: String,
    pub source: String,
    pub target: String,
    /// Task carried by the arc; `None` for dummies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    pub label: String,
    pub duration: f64,
    pub dummy: bool,
    pub critical: bool,
}

/// The complete Activity-on-Arrow network
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AoaNetwork {
    pub events: Vec<PertEvent>,
    pub arcs: Vec<PertArc>,
}

impl AoaNetwork {
    pub fn event(&self, id: &str) -> Option<&PertEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Arc carrying the given task
    pub fn task_arc(&self, task: &str) -> Option<&PertArc> {
        self.arcs.iter().find(|a| a.task.as_deref() == Some(task))
    }
}

#[derive(Debug)]
struct EventSlot {
    id: String,
    label: String,
    kind: EventKind,
    earliest: Option<f64>,
    latest: Option<f64>,
}

impl EventSlot {
    fn new(id: impl Into<String>, label: impl Into<String>, kind: EventKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            earliest: None,
            latest: None,
        }
    }
}

/// Event structure of a task graph, filled in with times by the scheduler
#[derive(Debug)]
pub(crate) struct NetworkLayout {
    events: Vec<EventSlot>,
    end: usize,
    task_start: Vec<usize>,
    task_end: Vec<usize>,
    completion: Vec<Option<usize>>,
    /// Events each task's completion reaches, directly or through a dummy
    feeds: Vec<Vec<usize>>,
}

impl NetworkLayout {
    pub fn build(graph: &TaskGraph<'_>) -> Self {
        // Distinct predecessor sets, in the topological order of their first consumer
        let mut junction_of: HashMap<Vec<usize>, usize> = HashMap::new();
        let mut signatures: Vec<Vec<usize>> = Vec::new();
        let mut events = vec![EventSlot::new(START_EVENT, "Start", EventKind::Start)];
        let mut task_start = vec![START; graph.len()];

        for &task in &graph.order {
            let mut signature = graph.predecessors[task].clone();
            if signature.is_empty() {
                continue;
            }
            signature.sort_unstable();
            let junction = *junction_of.entry(signature.clone()).or_insert_with(|| {
                let label = signature
                    .iter()
                    .map(|&p| graph.id(p))
                    .collect::<Vec<_>>()
                    .join("+");
                events.push(EventSlot::new(
                    format!("n{}", events.len()),
                    label,
                    EventKind::Junction,
                ));
                signatures.push(signature);
                events.len() - 1
            });
            task_start[task] = junction;
        }

        let mut joins: Vec<Vec<usize>> = vec![Vec::new(); graph.len()];
        for signature in &signatures {
            let junction = junction_of[signature];
            for &p in signature {
                joins[p].push(junction);
            }
        }

        let mut completion = vec![None; graph.len()];
        for &task in &graph.order {
            if joins[task].len() > 1 {
                events.push(EventSlot::new(
                    format!("n{}", events.len()),
                    format!("{} done", graph.id(task)),
                    EventKind::Completion,
                ));
                completion[task] = Some(events.len() - 1);
            }
        }

        let end = events.len();
        events.push(EventSlot::new(END_EVENT, "End", EventKind::End));

        let mut task_end = vec![end; graph.len()];
        let mut feeds = vec![Vec::new(); graph.len()];
        for task in 0..graph.len() {
            match (completion[task], joins[task].as_slice()) {
                (Some(own), junctions) => {
                    task_end[task] = own;
                    feeds[task].push(own);
                    feeds[task].extend_from_slice(junctions);
                }
                (None, [junction]) => {
                    task_end[task] = *junction;
                    feeds[task].push(*junction);
                }
                (None, _) => feeds[task].push(end),
            }
        }

        Self {
            events,
            end,
            task_start,
            task_end,
            completion,
            feeds,
        }
    }

    pub fn start_event(&self) -> usize {
        START
    }

    pub fn end_event(&self) -> usize {
        self.end
    }

    /// Event the task's arc leaves from
    pub fn task_start(&self, task: usize) -> usize {
        self.task_start[task]
    }

    /// The task's own completion event, if it feeds several junctions
    pub fn completion(&self, task: usize) -> Option<usize> {
        self.completion[task]
    }

    pub fn feeds(&self, task: usize) -> &[usize] {
        &self.feeds[task]
    }

    pub fn event_id(&self, event: usize) -> &str {
        &self.events[event].id
    }

    /// Record an earliest time; true if it was unset or strictly later
    pub fn raise_earliest(&mut self, event: usize, time: f64) -> bool {
        let slot = &mut self.events[event].earliest;
        if matches!(slot, Some(current) if *current >= time) {
            return false;
        }
        *slot = Some(time);
        true
    }

    /// Record a latest time; true if it was unset or strictly earlier
    pub fn lower_latest(&mut self, event: usize, time: f64) -> bool {
        let slot = &mut self.events[event].latest;
        if matches!(slot, Some(current) if *current <= time) {
            return false;
        }
        *slot = Some(time);
        true
    }

    /// Materialize the network once every pass has run
    pub fn finish(
        self,
        graph: &TaskGraph<'_>,
        critical: &[bool],
        project_duration: f64,
        tolerance: f64,
    ) -> AoaNetwork {
        let events: Vec<PertEvent> = self
            .events
            .iter()
            .map(|slot| {
                let earliest = slot.earliest.unwrap_or(0.0);
                let latest = slot.latest.unwrap_or(project_duration);
                PertEvent {
                    id: slot.id.clone(),
                    label: slot.label.clone(),
                    kind: slot.kind,
                    earliest,
                    latest,
                    critical: (latest - earliest).abs() < tolerance,
                }
            })
            .collect();

        let mut arcs = Vec::new();
        for &task in &graph.order {
            let source = self.task_start[task];
            let target = self.task_end[task];
            arcs.push(PertArc {
                id: format!("e{}", arcs.len()),
                source: events[source].id.clone(),
                target: events[target].id.clone(),
                task: Some(graph.id(task).to_string()),
                label: graph.tasks[task].label().to_string(),
                duration: graph.duration(task),
                dummy: false,
                critical: critical[task],
            });

            let Some(own) = self.completion[task] else {
                continue;
            };
            for &junction in &self.feeds[task][1..] {
                let (from, to) = (&events[own], &events[junction]);
                arcs.push(PertArc {
                    id: format!("e{}", arcs.len()),
                    source: from.id.clone(),
                    target: to.id.clone(),
                    task: None,
                    label: String::new(),
                    duration: 0.0,
                    dummy: true,
                    critical: from.critical
                        && to.critical
                        && (to.earliest - from.earliest).abs() < tolerance,
                });
            }
        }

        AoaNetwork { events, arcs }
    }
}
