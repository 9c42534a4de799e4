//! graphtrace - instrumented graph algorithms on the command line
//!
//! Runs traversals, shortest paths, spanning trees and PERT scheduling on a
//! graph or task list and prints the result with its step-by-step trace.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use graphtrace_core::config::EngineConfig;
use graphtrace_core::error::{ExitCode as GraphTraceExitCode, GraphTraceError};
use graphtrace_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--format` is global, but clap may fail before `Cli.format` is
            // available. Honour a JSON request with the error envelope.
            if argv_format_json {
                let error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::MissingRequiredArgument
                    | clap::error::ErrorKind::ArgumentConflict => {
                        GraphTraceError::UsageError(err.to_string())
                    }
                    _ => GraphTraceError::Other(err.to_string()),
                };

                eprintln!("{}", error.to_json());
                return ExitCode::from(error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let config = match EngineConfig::discover(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report_error(&e, cli.format.unwrap_or_default(), cli.quiet),
    };
    let format = cli
        .format
        .or(config.output.default_format)
        .unwrap_or_default();

    match commands::dispatch::run(&cli, &config, format, start) {
        Ok(()) => ExitCode::from(GraphTraceExitCode::Success as u8),
        Err(e) => report_error(&e, format, cli.quiet),
    }
}

fn report_error(error: &GraphTraceError, format: OutputFormat, quiet: bool) -> ExitCode {
    if format == OutputFormat::Json {
        eprintln!("{}", error.to_json());
    } else if !quiet {
        eprintln!("error: {}", error);
    }

    ExitCode::from(error.exit_code() as u8)
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v.eq_ignore_ascii_case("json")) {
                return true;
            }
        } else if arg.eq_ignore_ascii_case("--format=json") {
            return true;
        }
    }
    false
}
