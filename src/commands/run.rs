//! `graphtrace run` command - run a graph algorithm
//!
//! JSON output is the `{result, steps}` pair; the result is tagged with its
//! family (`traversal`, `shortest_path`, `spanning_tree`).

use graphtrace_core::algos::shared::describe_path;
use graphtrace_core::algos::{
    run_algorithm, Algorithm, AlgorithmResult, MstCoverage, MstResult, RunRequest,
    ShortestPathResult, TraversalResult,
};
use graphtrace_core::error::Result;
use graphtrace_core::trace::format_number;

use super::dispatch::{trace_command, CommandContext};
use super::{input, steps};
use crate::cli::RunArgs;

/// Execute the run command
pub fn execute(ctx: &CommandContext, args: &RunArgs) -> Result<()> {
    let graph = input::load_graph(&args.source)?;
    trace_command!(ctx, "load_graph");

    let mut bellman_ford = ctx.config.bellman_ford_options();
    if args.all_passes {
        bellman_ford.early_exit = false;
    }
    let request = RunRequest {
        start: args.start.as_deref(),
        target: args.end.as_deref(),
        bellman_ford,
    };

    let run = run_algorithm(&graph, args.algorithm, request)?;
    graphtrace_core::trace_time!(ctx.start, "run_algorithm", steps = run.steps.len());

    if ctx.is_json() {
        println!("{}", serde_json::to_string_pretty(&run)?);
        return Ok(());
    }

    match &run.result {
        AlgorithmResult::Traversal(result) => print_traversal(args.algorithm, result),
        AlgorithmResult::ShortestPath(result) => print_shortest_path(args.algorithm, result),
        AlgorithmResult::SpanningTree(result) => print_spanning_tree(args.algorithm, result),
    }
    if !ctx.cli.quiet {
        println!();
        steps::print_steps(&run.steps);
    }
    Ok(())
}

fn print_traversal(algorithm: Algorithm, result: &TraversalResult) {
    println!("{} from {}", algorithm, result.start);
    println!("Visit order: {}", result.visit_order.join(", "));
    if let (Some(target), Some(reached)) = (&result.target, result.target_reached) {
        let status = if reached { "reached" } else { "not reached" };
        println!("Target {}: {}", target, status);
    }
}

fn print_shortest_path(algorithm: Algorithm, result: &ShortestPathResult) {
    println!("{} from {}", algorithm, result.source);
    if result.has_negative_cycle {
        println!("Negative cycle detected: distances are not well defined");
    }

    let width = result.distances.keys().map(|k| k.len()).max().unwrap_or(0);
    println!("Distances:");
    for (node, distance) in &result.distances {
        match result.predecessors.get(node) {
            Some(previous) => println!(
                "  {:<width$}  {} (via {})",
                node,
                distance,
                previous,
                width = width
            ),
            None => println!("  {:<width$}  {}", node, distance, width = width),
        }
    }

    if let Some(target) = &result.target {
        match (&result.path, result.path_distance) {
            (Some(path), Some(distance)) => {
                println!("Path to {}: {} ({})", target, describe_path(path), distance)
            }
            _ => println!("No path to {}", target),
        }
    }
}

fn print_spanning_tree(algorithm: Algorithm, result: &MstResult) {
    let shape = match &result.coverage {
        MstCoverage::SpanningTree => "spanning tree".to_string(),
        MstCoverage::Forest { components } => {
            format!("spanning forest of {} components", components)
        }
        MstCoverage::Partial { .. } => "partial tree".to_string(),
    };
    println!(
        "{}: {}, total weight {}",
        algorithm,
        shape,
        format_number(result.total_weight)
    );
    for edge in &result.edges {
        println!("  {} -- {}  {}", edge.from, edge.to, format_number(edge.weight));
    }
    if let MstCoverage::Partial { unreached } = &result.coverage {
        println!("Unreached: {}", unreached.join(", "));
    }
}
