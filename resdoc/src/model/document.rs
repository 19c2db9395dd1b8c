//! Resolved document structures produced by the pipeline stages.

use super::annotation::{CustomSection, Heading};
use super::descriptor::PropertySchemaEntry;
use super::ordered::{FrontMatter, OrderedMap};
use crate::diagnostic::Diagnostic;

/// Fence language used when an example declares none.
pub const DEFAULT_EXAMPLE_LANGUAGE: &str = "bicep";

/// Example snippet with its fence language resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    /// Example title.
    pub title: String,
    /// Paragraph describing the example.
    pub description: String,
    /// Code emitted verbatim.
    pub code: String,
    /// Fence language, never blank.
    pub language: String,
}

/// Documentation for one resource after folding its annotations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceDocModel {
    /// Effective heading, if any heading was declared.
    pub heading: Option<Heading>,
    /// Front matter grouped by block index.
    pub front_matter: FrontMatter,
    /// Unrendered metadata.
    pub metadata: OrderedMap,
    /// Examples in declaration order.
    pub examples: Vec<Example>,
    /// Custom sections in declaration order.
    pub custom_sections: Vec<CustomSection>,
}

impl ResourceDocModel {
    /// Returns `true` when no annotation contributed anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heading.is_none()
            && self.front_matter.is_empty()
            && self.metadata.is_empty()
            && self.examples.is_empty()
            && self.custom_sections.is_empty()
    }
}

/// A resolved document joined with its property schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalizedDocument {
    /// Resource type name the document describes.
    pub resource_type: String,
    /// Folded annotations.
    pub model: ResourceDocModel,
    /// Schema entries in schema order.
    pub properties: Vec<PropertySchemaEntry>,
    /// Findings collected while cross-referencing.
    pub diagnostics: Vec<Diagnostic>,
}

impl FinalizedDocument {
    /// Returns the resource type name without namespace, path or version.
    ///
    /// `Contoso.Storage/accounts@2024-01-01` becomes `accounts`.
    #[must_use]
    pub fn bare_type_name(&self) -> &str {
        bare_type_name(&self.resource_type)
    }

    /// Returns the file stem the rendered document is saved under.
    ///
    /// This is the bare type name reduced to characters that are safe in a
    /// single path component.
    #[must_use]
    pub fn file_stem(&self) -> String {
        file_stem(&self.resource_type)
    }
}

pub(crate) fn bare_type_name(resource_type: &str) -> &str {
    let unversioned = resource_type
        .split_once('@')
        .map_or(resource_type, |(name, _)| name);
    unversioned
        .rsplit(['.', '/', ':'])
        .find(|segment| !segment.trim().is_empty())
        .unwrap_or(resource_type)
}

/// Stem used when a resource type name has nothing usable in it.
pub const FALLBACK_FILE_STEM: &str = "resource";

pub(crate) fn file_stem(resource_type: &str) -> String {
    let sanitised: String = bare_type_name(resource_type)
        .trim()
        .chars()
        .map(|ch| {
            if ch.is_alphanumeric() || matches!(ch, '-' | '_' | '.') {
                ch
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = sanitised.trim_matches('.');
    if trimmed.is_empty() {
        FALLBACK_FILE_STEM.to_owned()
    } else {
        trimmed.to_owned()
    }
}
