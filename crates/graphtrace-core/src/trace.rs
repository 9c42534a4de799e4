//! Execution traces
//!
//! Every algorithm records its observable state transitions as an ordered,
//! append-only list of [`Step`]s. A trace is complete when the algorithm
//! returns; consumers replay it independently of the algorithm itself.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire value used for a distance that has not been reached.
pub const UNREACHED: &str = "unreached";

/// Tentative or final distance of a node from the source.
///
/// `Unreached` is a state of its own rather than an infinite float, and it
/// serializes as the string `"unreached"` so it survives JSON round trips.
/// A `Finite` value must be finite; serializing one that is not fails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    Finite(f64),
    Unreached,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0.0);

    pub fn is_reached(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Distance::Finite(value) => Some(*value),
            Distance::Unreached => None,
        }
    }

    /// Extend the distance by one edge. Unreached stays unreached.
    pub fn extend(self, weight: f64) -> Distance {
        match self {
            Distance::Finite(value) => Distance::Finite(value + weight),
            Distance::Unreached => Distance::Unreached,
        }
    }

    /// True when `self` is strictly shorter than `other`
    pub fn improves_on(&self, other: &Distance) -> bool {
        self.partial_cmp(other) == Some(Ordering::Less)
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a.partial_cmp(b),
            (Distance::Finite(_), Distance::Unreached) => Some(Ordering::Less),
            (Distance::Unreached, Distance::Finite(_)) => Some(Ordering::Greater),
            (Distance::Unreached, Distance::Unreached) => Some(Ordering::Equal),
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(value) => write!(f, "{}", format_number(*value)),
            Distance::Unreached => write!(f, "{}", UNREACHED),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(value) if value.is_finite() => serializer.serialize_f64(*value),
            Distance::Finite(value) => Err(serde::ser::Error::custom(format!(
                "distance {} is not finite",
                value
            ))),
            Distance::Unreached => serializer.serialize_str(UNREACHED),
        }
    }
}

impl<'de> Deserialize<'de> for Distance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Number(f64),
            Sentinel(String),
        }

        match Wire::deserialize(deserializer)? {
            Wire::Number(value) => Ok(Distance::Finite(value)),
            Wire::Sentinel(s) if s == UNREACHED => Ok(Distance::Unreached),
            Wire::Sentinel(s) => Err(serde::de::Error::custom(format!(
                "expected a number or \"{}\", got \"{}\"",
                UNREACHED, s
            ))),
        }
    }
}

/// Render a weight or time without a trailing `.0` for integral values
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Kind of state transition a step records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Init,
    VisitNode,
    ExploreEdge,
    Enqueue,
    PushStack,
    UpdateDistance,
    FoundPath,
    Iteration,
    NegativeCycle,
    AddEdge,
    SkipEdge,
    VisitNodeBack,
    UpdateEvent,
    MarkCriticalNode,
    MarkCriticalEdge,
    Complete,
}

impl StepKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Init => "init",
            StepKind::VisitNode => "visit_node",
            StepKind::ExploreEdge => "explore_edge",
            StepKind::Enqueue => "enqueue",
            StepKind::PushStack => "push_stack",
            StepKind::UpdateDistance => "update_distance",
            StepKind::FoundPath => "found_path",
            StepKind::Iteration => "iteration",
            StepKind::NegativeCycle => "negative_cycle",
            StepKind::AddEdge => "add_edge",
            StepKind::SkipEdge => "skip_edge",
            StepKind::VisitNodeBack => "visit_node_back",
            StepKind::UpdateEvent => "update_event",
            StepKind::MarkCriticalNode => "mark_critical_node",
            StepKind::MarkCriticalEdge => "mark_critical_edge",
            StepKind::Complete => "complete",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which occurrence time of a milestone event a step refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventBound {
    Earliest,
    Latest,
}

/// Algorithm-specific payload of a step
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepData {
    /// No payload
    None,
    /// Size of the traversal frontier after the step, and the depth of the
    /// step's node in the traversal tree
    Frontier {
        size: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        depth: Option<usize>,
    },
    /// An examined edge
    Edge {
        from: String,
        to: String,
        weight: f64,
        visited: bool,
    },
    /// A tentative distance that just improved
    Relaxation {
        node: String,
        distance: Distance,
        #[serde(skip_serializing_if = "Option::is_none")]
        previous: Option<String>,
    },
    /// A node whose distance became final
    Settled { distance: Distance },
    /// A Bellman-Ford relaxation pass
    Pass { pass: usize, max_passes: usize },
    /// A reconstructed shortest path
    Path { path: Vec<String>, distance: Distance },
    /// An edge offered to a spanning tree
    TreeEdge {
        from: String,
        to: String,
        weight: f64,
        total_weight: f64,
    },
    /// Computed times of a scheduled task
    TaskTimes {
        earliest_start: f64,
        earliest_finish: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        latest_start: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        latest_finish: Option<f64>,
    },
    /// Occurrence time of a milestone event
    Event {
        event: String,
        bound: EventBound,
        time: f64,
    },
    /// Float of a critical task or dependency
    Slack { slack: f64 },
    /// Closing summary of a run
    Summary {
        count: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        total: Option<f64>,
    },
}

/// One observable state transition.
///
/// Steps about the run as a whole rather than one node or edge (passes,
/// completion) carry an empty `target_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub kind: StepKind,
    pub target_id: String,
    pub description: String,
    pub data: StepData,
    /// Auxiliary display values with no algorithmic meaning, such as a task's
    /// display name on PERT pass steps
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub aux: BTreeMap<String, serde_json::Value>,
}

impl Step {
    pub fn new(kind: StepKind, target_id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            target_id: target_id.into(),
            description: description.into(),
            data: StepData::None,
            aux: BTreeMap::new(),
        }
    }

    pub fn with_data(mut self, data: StepData) -> Self {
        self.data = data;
        self
    }

    pub fn with_aux(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.aux.insert(key.into(), value.into());
        self
    }
}

/// Ordered, append-only list of steps
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step
    pub fn record(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Append a step built from its parts
    pub fn push(
        &mut self,
        kind: StepKind,
        target_id: impl Into<String>,
        description: impl Into<String>,
        data: StepData,
    ) {
        self.record(Step::new(kind, target_id, description).with_data(data));
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }

    /// Number of steps of the given kind
    pub fn count(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|s| s.kind == kind).count()
    }

    /// Target ids of every step of the given kind, in trace order
    pub fn targets(&self, kind: StepKind) -> Vec<&str> {
        self.steps
            .iter()
            .filter(|s| s.kind == kind)
            .map(|s| s.target_id.as_str())
            .collect()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Outcome of one algorithm invocation: its result and the full trace
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmRun<R> {
    pub result: R,
    pub steps: Trace,
}

impl<R> AlgorithmRun<R> {
    pub fn new(result: R, steps: Trace) -> Self {
        Self { result, steps }
    }

    /// Convert the result while keeping the trace
    pub fn map<T>(self, f: impl FnOnce(R) -> T) -> AlgorithmRun<T> {
        AlgorithmRun {
            result: f(self.result),
            steps: self.steps,
        }
    }
}
