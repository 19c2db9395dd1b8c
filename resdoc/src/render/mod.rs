//! Markdown renderer for finalized resource documents.
//!
//! The output layout is fixed:
//!
//! 1. YAML front matter (only when declared);
//! 2. `# Title` and the heading description;
//! 3. `## Example usage` with one `###` subsection per example;
//! 4. one `##` section per custom section;
//! 5. `## Argument reference` listing every schema property in order.
//!
//! Blocks are separated by one blank line and the document ends with a
//! single newline. Diagnostics are never rendered.

pub mod escape;
mod sections;

pub use sections::{ARGUMENTS_HEADING, EXAMPLES_HEADING, property_item};

use crate::model::FinalizedDocument;

/// Renders a finalized document to Markdown.
///
/// Rendering is pure: the same document always yields byte-identical text.
#[must_use]
pub fn render(doc: &FinalizedDocument) -> String {
    let mut blocks: Vec<String> = Vec::with_capacity(6 + doc.model.custom_sections.len());
    blocks.extend(sections::front_matter(&doc.model.front_matter));
    blocks.push(sections::title(doc));
    blocks.extend(sections::description(doc));
    blocks.extend(sections::examples(&doc.model.examples));
    blocks.extend(sections::custom_sections(&doc.model.custom_sections));
    blocks.extend(sections::arguments(&doc.properties));

    let mut content = blocks.join("\n\n");
    content.push('\n');
    content
}
