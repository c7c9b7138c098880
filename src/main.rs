//! taskprompt: render task-tracking status reports from templates.
//!
//! This is the main entry point for the `taskprompt` CLI. It parses
//! arguments, sets up logging, dispatches to the command handler, and maps
//! errors to exit codes.

mod cli;
mod commands;

use cli::Cli;
use std::process::ExitCode;
use taskprompt::exit_codes;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse_args();

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Log to stderr so stdout carries only the rendered report.
/// Controlled by `RUST_LOG`; defaults to warnings only.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
