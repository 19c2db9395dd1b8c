//! Findings produced while cross-referencing documentation with a schema.

use std::fmt;

use serde::Serialize;

/// How seriously a finding affects a check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Reported, but does not fail a run.
    Warning,
    /// Fails a check run.
    Error,
}

impl Severity {
    /// Lower-case label used in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a cross-reference finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A schema property has neither a description nor property metadata.
    UndocumentedProperty,
    /// A `property:` key names a property missing from the schema.
    StaleReference,
}

impl DiagnosticKind {
    /// Severity assigned to this kind of finding.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::UndocumentedProperty => Severity::Warning,
            Self::StaleReference => Severity::Error,
        }
    }

    /// Stable snake-case code for reports.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::UndocumentedProperty => "undocumented_property",
            Self::StaleReference => "stale_reference",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One finding about a property of a resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Diagnostic {
    /// What was found.
    pub kind: DiagnosticKind,
    /// Property name the finding is about.
    pub subject: String,
}

impl Diagnostic {
    /// A property without any documentation.
    #[must_use]
    pub fn undocumented_property(name: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::UndocumentedProperty,
            subject: name.into(),
        }
    }

    /// A reference to a property the schema does not declare.
    #[must_use]
    pub fn stale_reference(name: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::StaleReference,
            subject: name.into(),
        }
    }

    /// Severity derived from the kind.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.kind.severity()
    }

    /// Human-readable description of the finding.
    #[must_use]
    pub fn detail(&self) -> String {
        match self.kind {
            DiagnosticKind::UndocumentedProperty => format!(
                "property '{}' has no schema description and no 'property:{}' metadata",
                self.subject, self.subject
            ),
            DiagnosticKind::StaleReference => format!(
                "'property:{}' refers to a property that is not in the schema",
                self.subject
            ),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity(), self.kind, self.detail())
    }
}
