//! Blogrec - blog recommendations for scripts and services
//!
//! Prints a single JSON payload per invocation. Degraded results (missing
//! argument, unreachable API, unknown id) are empty payloads with exit code 0.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use blogrec_core::error::ExitCode as RecExitCode;
use blogrec_core::logging;
use cli::Cli;

fn main() -> ExitCode {
    let start = Instant::now();
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(RecExitCode::Success as u8),
        Err(e) => {
            eprintln!("{}", e.to_json());
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
