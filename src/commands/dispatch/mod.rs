//! Command dispatch logic for graphtrace

use std::time::Instant;

use graphtrace_core::config::EngineConfig;
use graphtrace_core::error::Result;
use tracing::debug;

use crate::cli::{Cli, OutputFormat};

mod command;
mod macros;

pub use command::{Command, CommandContext, NoCommand};
pub(crate) use macros::trace_command;

pub fn run(cli: &Cli, config: &EngineConfig, format: OutputFormat, start: Instant) -> Result<()> {
    debug!(elapsed = ?start.elapsed(), format = %format, "resolve_config");

    let ctx = CommandContext::new(cli, config, format, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
