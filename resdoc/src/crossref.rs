//! Joins a resolved document model with the resource's property schema.
//!
//! Metadata and front-matter keys of the form `property:<Name>` refer to the
//! schema property `<Name>`. A metadata entry under such a key with a
//! non-blank value counts as documentation for the property. Any such key
//! naming a property the schema lacks is reported as a stale reference.
//! Without convention keys the stale-reference check reports nothing.

use std::collections::HashSet;

use crate::diagnostic::Diagnostic;
use crate::model::{FinalizedDocument, ModelDescriptor, PropertySchemaEntry, ResourceDocModel};

/// Key prefix marking a metadata or front-matter key as a property reference.
pub const PROPERTY_KEY_PREFIX: &str = "property:";

/// Returns the property named by a `property:<Name>` key.
///
/// ```
/// use resdoc::crossref::property_reference;
///
/// assert_eq!(property_reference("property:Name"), Some("Name"));
/// assert_eq!(property_reference("category"), None);
/// assert_eq!(property_reference("property:"), None);
/// ```
#[must_use]
pub fn property_reference(key: &str) -> Option<&str> {
    key.strip_prefix(PROPERTY_KEY_PREFIX)
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

/// Cross-references a model against the descriptor's schema.
#[must_use]
pub fn cross_reference(model: ResourceDocModel, descriptor: &ModelDescriptor) -> FinalizedDocument {
    cross_reference_schema(&descriptor.resource_type, model, &descriptor.properties)
}

/// Cross-references a model against an explicit schema.
///
/// The schema is copied in order; diagnostics list undocumented properties
/// in schema order, then stale references in key order.
#[must_use]
pub fn cross_reference_schema(
    resource_type: &str,
    model: ResourceDocModel,
    schema: &[PropertySchemaEntry],
) -> FinalizedDocument {
    let mut diagnostics = undocumented_properties(&model, schema);
    diagnostics.extend(stale_references(&model, schema));

    FinalizedDocument {
        resource_type: resource_type.to_owned(),
        model,
        properties: schema.to_vec(),
        diagnostics,
    }
}

fn undocumented_properties(
    model: &ResourceDocModel,
    schema: &[PropertySchemaEntry],
) -> Vec<Diagnostic> {
    let documented: HashSet<&str> = model
        .metadata
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .filter_map(|(key, _)| property_reference(key))
        .collect();

    let mut reported = HashSet::new();
    schema
        .iter()
        .filter(|property| property.is_undescribed())
        .filter(|property| !documented.contains(property.name.as_str()))
        .filter(|property| reported.insert(property.name.as_str()))
        .map(|property| Diagnostic::undocumented_property(property.name.as_str()))
        .collect()
}

fn stale_references(model: &ResourceDocModel, schema: &[PropertySchemaEntry]) -> Vec<Diagnostic> {
    let known: HashSet<&str> = schema.iter().map(|property| property.name.as_str()).collect();

    let mut reported = HashSet::new();
    model
        .metadata
        .keys()
        .chain(model.front_matter.keys())
        .filter_map(property_reference)
        .filter(|name| !known.contains(name))
        .filter(|name| reported.insert(*name))
        .map(Diagnostic::stale_reference)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::DiagnosticKind;
    use crate::model::RawAnnotation;
    use crate::resolve::resolve;
    use rstest::rstest;

    fn finalize(annotations: Vec<RawAnnotation>, schema: Vec<PropertySchemaEntry>) -> FinalizedDocument {
        let descriptor = ModelDescriptor {
            resource_type: "Widget".to_owned(),
            annotations,
            properties: schema,
        };
        cross_reference(resolve(&descriptor), &descriptor)
    }

    fn subjects(doc: &FinalizedDocument, kind: DiagnosticKind) -> Vec<&str> {
        doc.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.kind == kind)
            .map(|diagnostic| diagnostic.subject.as_str())
            .collect()
    }

    #[rstest]
    fn schema_is_copied_in_order() {
        let schema = vec![
            PropertySchemaEntry::new("zeta", "Last letter."),
            PropertySchemaEntry::new("alpha", "First letter."),
        ];
        let doc = finalize(Vec::new(), schema.clone());
        assert_eq!(doc.properties, schema);
        assert!(doc.diagnostics.is_empty());
    }

    #[rstest]
    fn reports_each_undocumented_property_once() {
        let doc = finalize(
            Vec::new(),
            vec![
                PropertySchemaEntry::new("name", ""),
                PropertySchemaEntry::new("size", "Disk size."),
                PropertySchemaEntry::new("tier", "  "),
                PropertySchemaEntry::new("name", ""),
            ],
        );
        assert_eq!(subjects(&doc, DiagnosticKind::UndocumentedProperty), vec!["name", "tier"]);
    }

    #[rstest]
    #[case("Documented via metadata.", 0)]
    #[case("", 1)]
    fn property_metadata_documents_a_property(#[case] value: &str, #[case] expected: usize) {
        let doc = finalize(
            vec![RawAnnotation::metadata("property:name", value)],
            vec![PropertySchemaEntry::new("name", "")],
        );
        assert_eq!(subjects(&doc, DiagnosticKind::UndocumentedProperty).len(), expected);
    }

    #[rstest]
    fn reports_stale_metadata_and_front_matter_references() {
        let doc = finalize(
            vec![
                RawAnnotation::metadata("property:NonExistent", "Old docs."),
                RawAnnotation::metadata("property:name", "Name docs."),
                RawAnnotation::front_matter(2, "property:Removed", "x"),
                RawAnnotation::front_matter(1, "property:NonExistent", "y"),
            ],
            vec![PropertySchemaEntry::new("name", "")],
        );
        assert_eq!(
            subjects(&doc, DiagnosticKind::StaleReference),
            vec!["NonExistent", "Removed"]
        );
    }

    #[rstest]
    fn keys_without_prefix_are_ignored() {
        let doc = finalize(
            vec![
                RawAnnotation::metadata("category", "storage"),
                RawAnnotation::front_matter(1, "title", "Widget"),
            ],
            Vec::new(),
        );
        assert!(doc.diagnostics.is_empty());
    }
}
