//! Error macros for graphtrace

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphTraceError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphTraceError::UsageError($msg.to_string()))
    };
}

/// Macro for rejecting a node id that is not part of the graph
#[macro_export]
macro_rules! ensure_node {
    ($graph:expr, $id:expr) => {
        if !$graph.contains_node($id) {
            return Err($crate::error::GraphTraceError::unknown_node($id));
        }
    };
}
