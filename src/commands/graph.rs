//! `graphtrace graph` command - load a graph and print its snapshot

use graphtrace_core::error::Result;

use super::dispatch::{trace_command, CommandContext};
use super::input;
use crate::cli::GraphSource;

/// Execute the graph command
pub fn execute(ctx: &CommandContext, source: &GraphSource) -> Result<()> {
    let graph = input::load_graph(source)?;
    trace_command!(ctx, "load_graph");

    let snapshot = graph.snapshot();
    if ctx.is_json() {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!(
        "{} graph: {} nodes, {} edges",
        if snapshot.directed {
            "Directed"
        } else {
            "Undirected"
        },
        snapshot.nodes.len(),
        snapshot.edges.len()
    );
    if ctx.cli.quiet {
        return Ok(());
    }

    let ids: Vec<&str> = snapshot.nodes.iter().map(|n| n.id.as_str()).collect();
    println!("Nodes: {}", ids.join(", "));
    println!("Edges:");
    let arrow = if snapshot.directed { "->" } else { "--" };
    for edge in &snapshot.edges {
        println!("  {} {} {}  {}", edge.source, arrow, edge.target, edge.label);
    }
    Ok(())
}
