//! Core pipeline for generating resource reference documentation.
//!
//! A [`ModelDescriptor`] carries the raw documentation annotations declared on
//! a resource type (base types first) together with the property schema
//! reported by the type system. The pipeline folds the annotations into a
//! [`ResourceDocModel`], cross-references it against the schema to produce a
//! [`FinalizedDocument`], and then either renders Markdown or classifies the
//! collected diagnostics into a coverage [`Report`].
//!
//! ```
//! use resdoc::{CapabilityFlag, ModelDescriptor, PropertySchemaEntry, RawAnnotation};
//!
//! let descriptor = ModelDescriptor::new("MyOwnResource")
//!     .with_annotation(RawAnnotation::heading(
//!         "MyOwnResource",
//!         "Manages MyOwnResource resources.",
//!     ))
//!     .with_property(PropertySchemaEntry::new("Resource", "").with_flags([
//!         CapabilityFlag::required(),
//!         CapabilityFlag::identifier(),
//!     ]));
//!
//! let rendered = resdoc::pipeline::generate(&descriptor);
//! assert!(rendered.markdown.starts_with("# MyOwnResource\n"));
//! ```

pub mod check;
pub mod crossref;
pub mod diagnostic;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod resolve;

pub use check::{Finding, Report, RunOutcome, RunReport, check};
pub use crossref::{PROPERTY_KEY_PREFIX, cross_reference, cross_reference_schema};
pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};
pub use model::{
    CapabilityFlag, CapabilityFlags, CustomSection, DEFAULT_EXAMPLE_LANGUAGE, Example,
    ExampleAnnotation, FinalizedDocument, FrontMatter, FrontMatterAnnotation, Heading,
    MetadataAnnotation, ModelDescriptor, OrderedMap, PropertySchemaEntry, RawAnnotation,
    ResourceDocModel,
};
pub use pipeline::RenderedDocument;
pub use render::render;
pub use resolve::resolve;
