//! CLI argument parsing for graphtrace
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod parse;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use graphtrace_core::algos::Algorithm;
pub use graphtrace_core::format::OutputFormat;
use parse::{parse_algorithm, parse_format, parse_tolerance};

/// graphtrace - run graph and scheduling algorithms and print their step traces
#[derive(Parser, Debug)]
#[command(name = "graphtrace")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json); defaults to the configured format
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "GRAPHTRACE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Path to the configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List built-in datasets
    Datasets,

    /// Load a graph and print its snapshot
    Graph {
        #[command(flatten)]
        source: GraphSource,
    },

    /// Run a graph algorithm and print its result and steps
    Run(RunArgs),

    /// Schedule a task list with the critical-path method
    Pert(PertArgs),
}

/// Where a graph comes from
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct GraphSource {
    /// Graph definition file (JSON), or - for stdin
    #[arg(long, short = 'g', value_name = "FILE")]
    pub graph: Option<PathBuf>,

    /// Built-in graph dataset
    #[arg(long, short = 'd', value_name = "NAME")]
    pub dataset: Option<String>,
}

/// Where a task list comes from
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct TaskSource {
    /// Task list file (JSON), or - for stdin
    #[arg(long, short = 't', value_name = "FILE")]
    pub tasks: Option<PathBuf>,

    /// Built-in task dataset
    #[arg(long, short = 'd', value_name = "NAME")]
    pub dataset: Option<String>,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Algorithm: bfs, dfs, dijkstra, bellman-ford, prim, kruskal
    #[arg(value_parser = parse_algorithm)]
    pub algorithm: Algorithm,

    /// Start node (not taken by kruskal)
    #[arg(long, short = 's', value_name = "NODE")]
    pub start: Option<String>,

    /// Target node (traversals and shortest paths only)
    #[arg(long, short = 'e', value_name = "NODE")]
    pub end: Option<String>,

    /// Run every Bellman-Ford pass even after one changes nothing
    #[arg(long)]
    pub all_passes: bool,

    #[command(flatten)]
    pub source: GraphSource,
}

#[derive(Args, Debug)]
pub struct PertArgs {
    /// Total float below which a task counts as critical
    #[arg(long, value_name = "FLOAT", value_parser = parse_tolerance)]
    pub critical_tolerance: Option<f64>,

    #[command(flatten)]
    pub source: TaskSource,
}
