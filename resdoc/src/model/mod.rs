//! Data model shared by every pipeline stage.
//!
//! Input types ([`ModelDescriptor`], [`RawAnnotation`], [`PropertySchemaEntry`])
//! are deserialisable so discovery collaborators can hand them over as JSON.
//! Output types ([`ResourceDocModel`], [`FinalizedDocument`]) are created
//! fresh for every resource and never shared between runs.

mod annotation;
mod descriptor;
mod document;
mod flags;
mod ordered;

pub use annotation::{
    CustomSection, ExampleAnnotation, FrontMatterAnnotation, Heading, MetadataAnnotation,
    RawAnnotation,
};
pub use descriptor::{ModelDescriptor, PropertySchemaEntry};
pub use document::{
    DEFAULT_EXAMPLE_LANGUAGE, Example, FALLBACK_FILE_STEM, FinalizedDocument, ResourceDocModel,
};
pub use flags::{CapabilityFlag, CapabilityFlags};
pub use ordered::{FrontMatter, OrderedMap};
