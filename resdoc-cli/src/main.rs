//! CLI entrypoint for `resdoc`.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use resdoc::RunOutcome;
use resdoc_cli::cli::Args;

/// Exit status for a check run that found errors.
const EXIT_FAILING: u8 = 1;
/// Exit status for configuration, discovery or output failures.
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let args = Args::parse();
    match resdoc_cli::run(&args) {
        Ok(RunOutcome::Passing) => ExitCode::SUCCESS,
        Ok(RunOutcome::Failing) => ExitCode::from(EXIT_FAILING),
        Err(err) => {
            tracing::error!(error = %err, "resdoc failed");
            writeln!(std::io::stderr().lock(), "resdoc: {err}").unwrap_or_default();
            ExitCode::from(EXIT_ERROR)
        }
    }
}
