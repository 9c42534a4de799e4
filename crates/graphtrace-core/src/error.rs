//! Error types and exit codes for graphtrace
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown algorithm or dataset)
//! - 3: Input data error (unknown node, malformed edge, invalid task list)

mod macros;

use thiserror::Error;

/// Exit codes for the graphtrace CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Input data error - malformed graph or task list (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building inputs or running an algorithm.
///
/// Every input error is raised before the first step of a trace is
/// recorded, so a failed run never yields a partial trace.
#[derive(Error, Debug)]
pub enum GraphTraceError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: {expected})", expected = crate::algos::Algorithm::NAMES.join(", "))]
    UnknownAlgorithm(String),

    #[error("unknown dataset: {0}")]
    UnknownDataset(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Input data errors (exit code 3)
    #[error("node not found: {id}")]
    UnknownNode { id: String },

    #[error("edge {from}-{to} references missing node {missing}")]
    InvalidEdge {
        from: String,
        to: String,
        missing: String,
    },

    #[error("edge {from}-{to} has non-finite weight {weight}")]
    InvalidWeight { from: String, to: String, weight: f64 },

    #[error("sum of {what} exceeds the finite number range")]
    Overflow { what: String },

    #[error("no edge between {from} and {to}")]
    EdgeNotFound { from: String, to: String },

    #[error("{algorithm} requires non-negative weights, edge {from}-{to} has weight {weight}")]
    NegativeWeight {
        algorithm: String,
        from: String,
        to: String,
        weight: f64,
    },

    #[error("{algorithm} requires an undirected graph")]
    UndirectedRequired { algorithm: String },

    #[error("duplicate task id: {id}")]
    DuplicateTaskId { id: String },

    #[error("task {task} depends on unknown task {predecessor}")]
    UnknownPredecessor { task: String, predecessor: String },

    #[error("cyclic dependency between tasks: {}", .tasks.join(", "))]
    CyclicDependency { tasks: Vec<String> },

    #[error("task {task} has invalid duration {duration} (must be finite and non-negative)")]
    InvalidDuration { task: String, duration: f64 },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphTraceError {
    /// Create an error for a node id that is not part of the graph
    pub fn unknown_node(id: impl Into<String>) -> Self {
        GraphTraceError::UnknownNode { id: id.into() }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphTraceError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an algorithm that cannot run on a directed graph
    pub fn undirected_required(algorithm: &str) -> Self {
        GraphTraceError::UndirectedRequired {
            algorithm: algorithm.to_string(),
        }
    }

    /// Create an error for accumulated values that would leave the finite range
    pub fn overflow(what: impl Into<String>) -> Self {
        GraphTraceError::Overflow { what: what.into() }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        GraphTraceError::Other(format!("failed to {} {}: {}", operation, path, error))
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphTraceError::UnknownFormat(_)
            | GraphTraceError::UnknownAlgorithm(_)
            | GraphTraceError::UnknownDataset(_)
            | GraphTraceError::UsageError(_)
            | GraphTraceError::InvalidValue { .. } => ExitCode::Usage,

            GraphTraceError::UnknownNode { .. }
            | GraphTraceError::InvalidEdge { .. }
            | GraphTraceError::InvalidWeight { .. }
            | GraphTraceError::Overflow { .. }
            | GraphTraceError::EdgeNotFound { .. }
            | GraphTraceError::NegativeWeight { .. }
            | GraphTraceError::UndirectedRequired { .. }
            | GraphTraceError::DuplicateTaskId { .. }
            | GraphTraceError::UnknownPredecessor { .. }
            | GraphTraceError::CyclicDependency { .. }
            | GraphTraceError::InvalidDuration { .. } => ExitCode::Data,

            GraphTraceError::Io(_)
            | GraphTraceError::Json(_)
            | GraphTraceError::Toml(_)
            | GraphTraceError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphTraceError::UnknownFormat(_) => "unknown_format",
            GraphTraceError::UnknownAlgorithm(_) => "unknown_algorithm",
            GraphTraceError::UnknownDataset(_) => "unknown_dataset",
            GraphTraceError::UsageError(_) => "usage_error",
            GraphTraceError::InvalidValue { .. } => "invalid_value",
            GraphTraceError::UnknownNode { .. } => "unknown_node",
            GraphTraceError::InvalidEdge { .. } => "invalid_edge",
            GraphTraceError::InvalidWeight { .. } => "invalid_weight",
            GraphTraceError::Overflow { .. } => "overflow",
            GraphTraceError::EdgeNotFound { .. } => "edge_not_found",
            GraphTraceError::NegativeWeight { .. } => "negative_weight",
            GraphTraceError::UndirectedRequired { .. } => "undirected_required",
            GraphTraceError::DuplicateTaskId { .. } => "duplicate_task_id",
            GraphTraceError::UnknownPredecessor { .. } => "unknown_predecessor",
            GraphTraceError::CyclicDependency { .. } => "cyclic_dependency",
            GraphTraceError::InvalidDuration { .. } => "invalid_duration",
            GraphTraceError::Io(_) => "io_error",
            GraphTraceError::Json(_) => "json_error",
            GraphTraceError::Toml(_) => "toml_error",
            GraphTraceError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphtrace operations
pub type Result<T> = std::result::Result<T, GraphTraceError>;
