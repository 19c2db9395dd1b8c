//! Coverage checking over finalized documents.
//!
//! [`check`] classifies one document's diagnostics; [`RunReport`] gathers the
//! reports of a whole run and decides whether the run passes. Only
//! error-severity findings fail a run.

use serde::Serialize;

use crate::diagnostic::{DiagnosticKind, Severity};
use crate::model::FinalizedDocument;

/// A classified diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// What was found.
    pub kind: DiagnosticKind,
    /// Severity derived from the kind.
    pub severity: Severity,
    /// Property the finding is about.
    pub subject: String,
    /// Human-readable explanation.
    pub detail: String,
}

/// Findings for a single resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Resource type name.
    pub resource_name: String,
    /// Findings in diagnostic order.
    pub findings: Vec<Finding>,
}

impl Report {
    /// Number of error-severity findings.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Number of warning-severity findings.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Returns `true` when any finding is an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.findings
            .iter()
            .any(|finding| finding.severity == Severity::Error)
    }

    fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|finding| finding.severity == severity)
            .count()
    }
}

/// Classifies the diagnostics of a finalized document.
#[must_use]
pub fn check(doc: &FinalizedDocument) -> Report {
    Report {
        resource_name: doc.resource_type.clone(),
        findings: doc
            .diagnostics
            .iter()
            .map(|diagnostic| Finding {
                kind: diagnostic.kind,
                severity: diagnostic.severity(),
                subject: diagnostic.subject.clone(),
                detail: diagnostic.detail(),
            })
            .collect(),
    }
}

/// Aggregate verdict of a check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// No resource produced an error.
    Passing,
    /// At least one resource produced an error.
    Failing,
}

impl RunOutcome {
    /// Returns `true` for [`RunOutcome::Failing`].
    #[must_use]
    pub const fn is_failing(self) -> bool {
        matches!(self, Self::Failing)
    }
}

/// Reports for every resource of a run, sorted by resource name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Per-resource reports.
    pub reports: Vec<Report>,
}

impl RunReport {
    /// Builds a run report, sorting reports by resource name.
    ///
    /// The sort is stable, so resources sharing a name keep input order.
    #[must_use]
    pub fn new(mut reports: Vec<Report>) -> Self {
        reports.sort_by(|left, right| left.resource_name.cmp(&right.resource_name));
        Self { reports }
    }

    /// Passing unless some report holds an error.
    #[must_use]
    pub fn outcome(&self) -> RunOutcome {
        if self.reports.iter().any(Report::has_errors) {
            RunOutcome::Failing
        } else {
            RunOutcome::Passing
        }
    }

    /// Total error-severity findings.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.reports.iter().map(Report::error_count).sum()
    }

    /// Total warning-severity findings.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.reports.iter().map(Report::warning_count).sum()
    }

    /// Iterates over every finding paired with its resource name.
    pub fn findings(&self) -> impl Iterator<Item = (&str, &Finding)> {
        self.reports.iter().flat_map(|report| {
            report
                .findings
                .iter()
                .map(move |finding| (report.resource_name.as_str(), finding))
        })
    }
}
