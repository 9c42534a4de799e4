//! `graphtrace datasets` command - list built-in inputs

use graphtrace_core::datasets::{DatasetKind, DATASETS};
use graphtrace_core::error::Result;

use super::dispatch::CommandContext;

/// Execute the datasets command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    if ctx.is_json() {
        println!("{}", serde_json::to_string_pretty(DATASETS)?);
        return Ok(());
    }

    let width = DATASETS.iter().map(|d| d.name.len()).max().unwrap_or(0);
    for dataset in DATASETS {
        let kind = match dataset.kind {
            DatasetKind::Graph => "graph",
            DatasetKind::Tasks => "tasks",
        };
        println!(
            "{:<width$}  {:<5}  {}",
            dataset.name,
            kind,
            dataset.description,
            width = width
        );
    }
    Ok(())
}
