//! `graphtrace pert` command - critical-path scheduling

use graphtrace_core::error::Result;
use graphtrace_core::pert::{schedule, PertResult};
use graphtrace_core::trace::format_number;

use super::dispatch::{trace_command, CommandContext};
use super::{input, steps};
use crate::cli::PertArgs;

/// Execute the pert command
pub fn execute(ctx: &CommandContext, args: &PertArgs) -> Result<()> {
    let tasks = input::load_tasks(&args.source)?;
    trace_command!(ctx, "load_tasks");

    let mut options = ctx.config.pert_options();
    if let Some(tolerance) = args.critical_tolerance {
        options.critical_tolerance = tolerance;
    }

    let run = schedule(&tasks, options)?;
    graphtrace_core::trace_time!(ctx.start, "schedule", steps = run.steps.len());

    if ctx.is_json() {
        println!("{}", serde_json::to_string_pretty(&run)?);
        return Ok(());
    }

    print_schedule(&run.result);
    if !ctx.cli.quiet {
        println!();
        steps::print_steps(&run.steps);
    }
    Ok(())
}

fn print_schedule(result: &PertResult) {
    println!(
        "Project duration: {}",
        format_number(result.project_duration)
    );
    println!("Critical path: {}", result.critical_path.join(" -> "));
    if result.schedule.is_empty() {
        return;
    }

    let width = result
        .schedule
        .iter()
        .map(|t| t.name.len())
        .max()
        .unwrap_or(0)
        .max(4);
    println!();
    println!(
        "  {:<width$}  {:>8}  {:>6}  {:>6}  {:>6}  {:>6}  {:>6}  {:>6}",
        "TASK", "DURATION", "ES", "EF", "LS", "LF", "TF", "FF",
        width = width
    );
    for task in &result.schedule {
        println!(
            "{} {:<width$}  {:>8}  {:>6}  {:>6}  {:>6}  {:>6}  {:>6}  {:>6}",
            if task.is_critical { "*" } else { " " },
            task.name,
            format_number(task.duration),
            format_number(task.earliest_start),
            format_number(task.earliest_finish),
            format_number(task.latest_start),
            format_number(task.latest_finish),
            format_number(task.total_float),
            format_number(task.free_float),
            width = width
        );
    }
}
