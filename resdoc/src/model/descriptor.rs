//! Pipeline inputs supplied by the discovery collaborator.

use serde::{Deserialize, Serialize};

use super::annotation::RawAnnotation;
use super::flags::{CapabilityFlag, CapabilityFlags};

/// One resource type together with its annotations and property schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Stable resource type name, used for ordering and fallback headings.
    pub resource_type: String,
    /// Annotations ordered base type first, then by declaration.
    #[serde(default)]
    pub annotations: Vec<RawAnnotation>,
    /// Property schema in declaration order.
    #[serde(default)]
    pub properties: Vec<PropertySchemaEntry>,
}

impl ModelDescriptor {
    /// Creates a descriptor with no annotations and an empty schema.
    #[must_use]
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            annotations: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Appends an annotation after those already present.
    #[must_use]
    pub fn with_annotation(mut self, annotation: RawAnnotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Appends a property to the schema.
    #[must_use]
    pub fn with_property(mut self, property: PropertySchemaEntry) -> Self {
        self.properties.push(property);
        self
    }
}

/// Schema entry for one declared property of a resource type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySchemaEntry {
    /// Property name as declared by the type system.
    pub name: String,
    /// Description reported by the type system; may be empty.
    #[serde(default)]
    pub description: String,
    /// Capability flags reported by the type system.
    #[serde(default)]
    pub flags: CapabilityFlags,
}

impl PropertySchemaEntry {
    /// Creates an entry without capability flags.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            flags: CapabilityFlags::default(),
        }
    }

    /// Replaces the entry's flags.
    #[must_use]
    pub fn with_flags(mut self, flags: impl IntoIterator<Item = CapabilityFlag>) -> Self {
        self.flags = flags.into_iter().collect();
        self
    }

    /// Returns `true` when the schema description is empty or whitespace.
    #[must_use]
    pub fn is_undescribed(&self) -> bool {
        self.description.trim().is_empty()
    }
}
