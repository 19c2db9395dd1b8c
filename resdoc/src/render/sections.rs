//! Block generators for each part of a resource document.
//!
//! Every generator returns complete blocks without trailing newlines; the
//! caller joins them with a blank line.

use crate::model::{CustomSection, Example, FinalizedDocument, FrontMatter, PropertySchemaEntry};

use super::escape::{code_fence, yaml_scalar};

/// Heading of the generated example section.
pub const EXAMPLES_HEADING: &str = "## Example usage";
/// Heading of the generated property section.
pub const ARGUMENTS_HEADING: &str = "## Argument reference";

const FRONT_MATTER_DELIMITER: &str = "---";

/// Emits the merged front matter, or nothing when no block holds a key.
pub fn front_matter(front_matter: &FrontMatter) -> Option<String> {
    if front_matter.is_empty() {
        return None;
    }
    let mut lines = vec![FRONT_MATTER_DELIMITER.to_owned()];
    lines.extend(
        front_matter
            .merged()
            .iter()
            .map(|(key, value)| format!("{}: {}", yaml_scalar(key), yaml_scalar(value))),
    );
    lines.push(FRONT_MATTER_DELIMITER.to_owned());
    Some(lines.join("\n"))
}

/// Emits the level-one title, falling back to the bare type name.
pub fn title(doc: &FinalizedDocument) -> String {
    let heading = doc
        .model
        .heading
        .as_ref()
        .map(|heading| heading.title.trim())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| doc.bare_type_name());
    format!("# {heading}")
}

/// Emits the heading description, when the heading has one.
pub fn description(doc: &FinalizedDocument) -> Option<String> {
    doc.model
        .heading
        .as_ref()
        .and_then(|heading| paragraph(&heading.description))
}

/// Emits the example section with one subsection per example.
pub fn examples(examples: &[Example]) -> Option<String> {
    if examples.is_empty() {
        return None;
    }
    let mut blocks = vec![EXAMPLES_HEADING.to_owned()];
    for example in examples {
        blocks.push(format!("### {}", example.title.trim()));
        blocks.extend(paragraph(&example.description));
        blocks.push(fenced_code(&example.code, &example.language));
    }
    Some(blocks.join("\n\n"))
}

/// Emits one level-two section per custom section.
pub fn custom_sections(sections: &[CustomSection]) -> Vec<String> {
    sections
        .iter()
        .map(|section| {
            let mut blocks = vec![format!("## {}", section.title.trim())];
            blocks.extend(paragraph(&section.description));
            blocks.extend(paragraph(&section.body));
            blocks.join("\n\n")
        })
        .collect()
}

/// Emits the property list in schema order.
pub fn arguments(properties: &[PropertySchemaEntry]) -> Option<String> {
    if properties.is_empty() {
        return None;
    }
    let mut lines = vec![ARGUMENTS_HEADING.to_owned(), String::new()];
    lines.extend(properties.iter().map(property_item));
    Some(lines.join("\n"))
}

/// Formats one property as `- **name** (qualifiers) — description`.
#[must_use]
pub fn property_item(property: &PropertySchemaEntry) -> String {
    format!(
        "- **{}** ({}) — {}",
        property.name,
        property.flags.qualifiers().join(", "),
        property.description.trim()
    )
}

fn fenced_code(code: &str, language: &str) -> String {
    let fence = code_fence(code);
    let body = code.strip_suffix('\n').unwrap_or(code);
    format!("{fence}{language}\n{body}\n{fence}")
}

fn paragraph(text: &str) -> Option<String> {
    let trimmed = text.trim_end();
    if trimmed.trim_start().is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
