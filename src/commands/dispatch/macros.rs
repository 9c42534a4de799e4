//! Macros for command timing

/// Log elapsed time of a command phase when running verbosely
///
/// Usage:
/// ```ignore
/// trace_command!(ctx, "load_graph");
/// ```
macro_rules! trace_command {
    ($ctx:expr, $label:expr) => {
        if $ctx.cli.verbose {
            ::tracing::debug!(elapsed = ?$ctx.start.elapsed(), $label);
        }
    };
}

pub(crate) use trace_command;
