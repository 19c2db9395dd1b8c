//! Canonical descriptors exercised by the workspace test suites.

use resdoc::{CapabilityFlag, ExampleAnnotation, ModelDescriptor, PropertySchemaEntry, RawAnnotation};

/// `MyOwnResource`: one heading and a required identifier without a
/// description.
#[must_use]
pub fn my_own_resource() -> ModelDescriptor {
    ModelDescriptor::new("MyOwnResource")
        .with_annotation(RawAnnotation::heading(
            "MyOwnResource",
            "Manages MyOwnResource resources.",
        ))
        .with_property(
            PropertySchemaEntry::new("Resource", "")
                .with_flags([CapabilityFlag::required(), CapabilityFlag::identifier()]),
        )
}

/// A descriptor whose metadata references the missing property
/// `NonExistent`.
#[must_use]
pub fn stale_reference() -> ModelDescriptor {
    ModelDescriptor::new("StaleWidget")
        .with_annotation(RawAnnotation::heading("StaleWidget", "Widget with stale docs."))
        .with_annotation(RawAnnotation::metadata(
            "property:NonExistent",
            "Documentation for a removed property.",
        ))
        .with_property(PropertySchemaEntry::new("name", "Widget name."))
}

/// A storage account declared on a derived type that inherits annotations
/// from a shared base type.
///
/// The annotation list is already flattened base-first, as discovery
/// collaborators hand it over.
#[must_use]
pub fn storage_account() -> ModelDescriptor {
    ModelDescriptor::new("Contoso.Storage/accounts@2024-01-01")
        // Base type annotations.
        .with_annotation(RawAnnotation::heading("Resource", "Base resource."))
        .with_annotation(RawAnnotation::front_matter(1, "title", "A"))
        .with_annotation(RawAnnotation::front_matter(1, "category", "storage"))
        .with_annotation(RawAnnotation::metadata("owner", "platform"))
        // Derived type annotations.
        .with_annotation(RawAnnotation::heading(
            "Storage account",
            "Creates a storage account.",
        ))
        .with_annotation(RawAnnotation::front_matter(1, "title", "B"))
        .with_annotation(RawAnnotation::front_matter(2, "weight", "20"))
        .with_annotation(RawAnnotation::metadata("property:sku", "Pricing tier."))
        .with_annotation(RawAnnotation::example(
            "Basic account",
            "Creates an account with defaults.",
            "resource account 'Contoso.Storage/accounts@2024-01-01' = {\n  name: 'demo'\n}",
        ))
        .with_annotation(RawAnnotation::Example(ExampleAnnotation {
            title: "Parameters file".to_owned(),
            description: String::new(),
            code: "{\n  \"name\": \"demo\"\n}\n".to_owned(),
            language: Some("json".to_owned()),
        }))
        .with_annotation(RawAnnotation::custom_section(
            "Limits",
            "Accounts are subject to quotas.",
            "- 250 accounts per subscription\n- 5 PiB per account",
        ))
        .with_property(
            PropertySchemaEntry::new("name", "Account name.")
                .with_flags([CapabilityFlag::required(), CapabilityFlag::identifier()]),
        )
        .with_property(PropertySchemaEntry::new("sku", ""))
        .with_property(PropertySchemaEntry::new("location", ""))
        .with_property(
            PropertySchemaEntry::new("primaryEndpoint", "Blob endpoint.")
                .with_flags([CapabilityFlag::read_only()]),
        )
}

/// Serialises descriptors to pretty JSON, as discovery input files hold them.
///
/// # Errors
///
/// Returns an error when serialisation fails.
pub fn to_json(descriptors: &[ModelDescriptor]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(descriptors)?)
}
