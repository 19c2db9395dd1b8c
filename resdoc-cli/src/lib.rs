//! Library interface for the `resdoc` command.
//!
//! The binary parses [`cli::Args`], then [`run`] loads the layered
//! [`config::ResdocConfig`], installs logging and hands over to [`execute`].
//! Tests drive [`execute`] directly with an in-memory writer.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
mod fs_helpers;
pub mod logging;
pub mod output;
pub mod report;

use std::io::Write;

use resdoc::RunOutcome;
use resdoc::pipeline::{check_all, generate_all};
use tracing::{info, warn};

use crate::cli::{Args, Command};
use crate::config::ResdocConfig;
use crate::error::CliError;
use crate::output::OverwritePolicy;

/// Loads configuration, installs logging and runs the selected command.
///
/// Reports are written to standard output.
///
/// # Errors
///
/// Returns a [`CliError`] when configuration, logging, discovery or output
/// fails. A failing coverage check is reported through the returned
/// [`RunOutcome`], not as an error.
pub fn run(args: &Args) -> Result<RunOutcome, CliError> {
    let config = ResdocConfig::load(args)?;
    logging::init(config.log_format)?;
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    execute(&config, &args.command, &mut handle)
}

/// Runs `command` with an already loaded configuration.
///
/// # Errors
///
/// Returns a [`CliError`] when discovery or output fails.
pub fn execute<W: Write>(
    config: &ResdocConfig,
    command: &Command,
    out: &mut W,
) -> Result<RunOutcome, CliError> {
    let descriptors = discovery::discover(&config.input_dir)?;
    info!(
        resources = descriptors.len(),
        input_dir = %config.input_dir,
        "discovered descriptors"
    );
    match command {
        Command::Generate(_) => {
            let documents = generate_all(&descriptors);
            for document in &documents {
                for diagnostic in &document.diagnostics {
                    warn!(
                        resource = %document.resource_type,
                        kind = %diagnostic.kind,
                        "{}",
                        diagnostic.detail()
                    );
                }
            }
            output::write_documents(
                &config.out_dir,
                &documents,
                OverwritePolicy::from_flag(config.overwrite),
            )?;
            Ok(RunOutcome::Passing)
        }
        Command::Check(_) => {
            let run = check_all(&descriptors);
            report::write_report(out, &run, config.report_format)?;
            out.flush().map_err(CliError::Stdout)?;
            Ok(run.outcome())
        }
    }
}
