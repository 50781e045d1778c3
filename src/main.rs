//! Trailblazer - route finding over mazes, terrain and maps
//!
//! Runs depth-first, breadth-first, Dijkstra and A* searches between two
//! vertices of a world file, computes minimum spanning forests, and
//! generates random mazes.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use trailblazer_core::error::{ExitCode as TrailblazerExitCode, TrailblazerError};
use trailblazer_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version go to stdout and are not errors
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) if argv_requests_json() => {
            let error = TrailblazerError::UsageError(err.to_string());
            return report(&error, OutputFormat::Json, false);
        }
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(TrailblazerExitCode::Success as u8),
        Err(e) => report(&e, cli.format, cli.quiet),
    }
}

/// Print an error in the requested format and map it to an exit code
fn report(error: &TrailblazerError, format: OutputFormat, quiet: bool) -> ExitCode {
    match format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        OutputFormat::Human if !quiet => eprintln!("error: {}", error),
        OutputFormat::Human => {}
    }
    ExitCode::from(error.exit_code() as u8)
}

/// `--format json` as written on the command line, for errors raised before
/// clap hands back a `Cli`
fn argv_requests_json() -> bool {
    let args: Vec<String> = env::args().skip(1).collect();
    args.iter().any(|arg| arg == "--format=json")
        || args
            .windows(2)
            .any(|pair| pair[0] == "--format" && pair[1] == "json")
}
