//! End-to-end processing of model descriptors.
//!
//! Each resource runs `resolve → cross_reference → render|check` as one unit
//! of work with no state shared between resources. Batches are processed in
//! parallel and sorted by resource type name afterwards, so output order
//! never depends on scheduling.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::check::{RunReport, check};
use crate::crossref::cross_reference;
use crate::diagnostic::Diagnostic;
use crate::model::{FinalizedDocument, ModelDescriptor};
use crate::render::render;
use crate::resolve::resolve;

/// Markdown produced for one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// Resource type name.
    pub resource_type: String,
    /// File stem: the bare type name made safe for use as a file name.
    pub file_stem: String,
    /// Rendered Markdown text.
    pub markdown: String,
    /// Diagnostics collected while cross-referencing.
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolves and cross-references a single descriptor.
#[must_use]
#[tracing::instrument(level = "debug", skip_all, fields(resource = %descriptor.resource_type))]
pub fn finalize(descriptor: &ModelDescriptor) -> FinalizedDocument {
    let model = resolve(descriptor);
    let doc = cross_reference(model, descriptor);
    debug!(
        properties = doc.properties.len(),
        diagnostics = doc.diagnostics.len(),
        "cross-referenced resource"
    );
    doc
}

/// Renders one descriptor to Markdown.
#[must_use]
pub fn generate(descriptor: &ModelDescriptor) -> RenderedDocument {
    let doc = finalize(descriptor);
    let markdown = render(&doc);
    RenderedDocument {
        file_stem: doc.file_stem(),
        resource_type: doc.resource_type,
        markdown,
        diagnostics: doc.diagnostics,
    }
}

/// Renders every descriptor, sorted by resource type name.
#[must_use]
pub fn generate_all(descriptors: &[ModelDescriptor]) -> Vec<RenderedDocument> {
    let mut rendered: Vec<RenderedDocument> = descriptors.par_iter().map(generate).collect();
    rendered.sort_by(|left, right| left.resource_type.cmp(&right.resource_type));
    info!(resources = rendered.len(), "rendered resource documentation");
    rendered
}

/// Checks every descriptor and aggregates the reports.
#[must_use]
pub fn check_all(descriptors: &[ModelDescriptor]) -> RunReport {
    let reports = descriptors
        .par_iter()
        .map(|descriptor| check(&finalize(descriptor)))
        .collect();
    let run = RunReport::new(reports);
    info!(
        resources = run.reports.len(),
        errors = run.error_count(),
        warnings = run.warning_count(),
        "checked documentation coverage"
    );
    run
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawAnnotation;
    use rstest::rstest;

    #[rstest]
    fn batches_are_sorted_by_resource_type() {
        let descriptors: Vec<_> = ["Zeta", "Alpha", "Mu"]
            .into_iter()
            .map(ModelDescriptor::new)
            .collect();
        let names: Vec<_> = generate_all(&descriptors)
            .into_iter()
            .map(|doc| doc.resource_type)
            .collect();
        assert_eq!(names, vec!["Alpha", "Mu", "Zeta"]);
    }

    #[rstest]
    fn file_stems_never_carry_path_separators() {
        let rendered = generate(&ModelDescriptor::new("../.."));
        assert_eq!(rendered.file_stem, "_");
        assert_eq!(rendered.resource_type, "../..");
    }

    #[rstest]
    fn generate_and_check_share_diagnostics() {
        let descriptor = ModelDescriptor::new("Widget")
            .with_annotation(RawAnnotation::metadata("property:Gone", "old"));
        let rendered = generate(&descriptor);
        let run = check_all(std::slice::from_ref(&descriptor));
        assert_eq!(rendered.diagnostics.len(), run.error_count());
        assert!(run.outcome().is_failing());
    }
}
