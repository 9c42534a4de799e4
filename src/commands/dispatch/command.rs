//! Command trait and context for dispatching commands

use std::time::Instant;

use graphtrace_core::config::EngineConfig;
use graphtrace_core::error::Result;

use crate::cli::{Cli, Commands, OutputFormat};
use crate::commands;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a EngineConfig,
    /// Output format after applying the configured default
    pub format: OutputFormat,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        cli: &'a Cli,
        config: &'a EngineConfig,
        format: OutputFormat,
        start: Instant,
    ) -> Self {
        Self {
            cli,
            config,
            format,
            start,
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("graphtrace {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Instrumented graph algorithms with step-by-step traces.");
        println!();
        println!("Run `graphtrace --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Datasets => commands::datasets::execute(ctx),
            Commands::Graph { source } => commands::graph::execute(ctx, source),
            Commands::Run(args) => commands::run::execute(ctx, args),
            Commands::Pert(args) => commands::pert::execute(ctx, args),
        }
    }
}
