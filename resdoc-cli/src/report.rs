//! Formatting of coverage reports for standard output.

use std::io::Write;

use resdoc::{RunOutcome, RunReport};
use serde::Serialize;

use crate::cli::ReportFormat;
use crate::error::CliError;

/// JSON shape of a coverage report.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    outcome: RunOutcome,
    error_count: usize,
    warning_count: usize,
    #[serde(flatten)]
    run: &'a RunReport,
}

/// Writes `run` to `out` in the requested format.
///
/// Text output lists one finding per line followed by a summary line. JSON
/// output is a single document carrying the same summary as fields.
///
/// # Errors
///
/// Returns [`CliError::Stdout`] when writing fails and
/// [`CliError::ReportJson`] when the report cannot be serialised.
pub fn write_report<W: Write>(
    out: &mut W,
    run: &RunReport,
    format: ReportFormat,
) -> Result<(), CliError> {
    match format {
        ReportFormat::Text => write_text(out, run),
        ReportFormat::Json => write_json(out, run),
    }
}

fn write_text<W: Write>(out: &mut W, run: &RunReport) -> Result<(), CliError> {
    for (resource, finding) in run.findings() {
        writeln!(
            out,
            "{severity}[{code}] {resource}: {detail}",
            severity = finding.severity,
            code = finding.kind.code(),
            detail = finding.detail,
        )
        .map_err(CliError::Stdout)?;
    }
    writeln!(out, "{}", summary(run)).map_err(CliError::Stdout)
}

fn write_json<W: Write>(out: &mut W, run: &RunReport) -> Result<(), CliError> {
    let report = JsonReport {
        outcome: run.outcome(),
        error_count: run.error_count(),
        warning_count: run.warning_count(),
        run,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out).map_err(CliError::Stdout)
}

/// One-line summary of a run.
#[must_use]
pub fn summary(run: &RunReport) -> String {
    let verdict = match run.outcome() {
        RunOutcome::Passing => "passing",
        RunOutcome::Failing => "failing",
    };
    format!(
        "{verdict}: {resources} resource(s) checked, {errors} error(s), {warnings} warning(s)",
        resources = run.reports.len(),
        errors = run.error_count(),
        warnings = run.warning_count(),
    )
}
