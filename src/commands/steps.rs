//! Human rendering of step traces

use graphtrace_core::trace::Trace;

/// Print one numbered line per step
pub fn print_steps(steps: &Trace) {
    println!("Steps ({}):", steps.len());
    let width = steps.len().to_string().len();
    for (index, step) in steps.iter().enumerate() {
        let target = if step.target_id.is_empty() {
            "-"
        } else {
            step.target_id.as_str()
        };
        println!(
            "  {:>width$}. {:<18} {:<14} {}",
            index + 1,
            step.kind.as_str(),
            target,
            step.description,
            width = width
        );
    }
}
