//! Raw documentation annotations as declared on a resource type.

use serde::{Deserialize, Serialize};

/// Title and description heading a resource document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Level-one heading text.
    #[serde(default)]
    pub title: String,
    /// Paragraph rendered beneath the heading.
    #[serde(default)]
    pub description: String,
}

/// A single front-matter key/value pair destined for a numbered block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontMatterAnnotation {
    /// Block index; values below one are clamped to one during resolution.
    #[serde(default = "default_block")]
    pub block: i64,
    /// Front-matter key.
    pub key: String,
    /// Opaque value emitted verbatim.
    #[serde(default)]
    pub value: String,
}

/// Generator-side metadata that is never rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataAnnotation {
    /// Metadata key; `property:<Name>` keys reference schema properties.
    pub key: String,
    /// Metadata value.
    #[serde(default)]
    pub value: String,
}

/// Example snippet as declared, before the language default is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleAnnotation {
    /// Example title rendered as a level-three heading.
    #[serde(default)]
    pub title: String,
    /// Paragraph describing the example.
    #[serde(default)]
    pub description: String,
    /// Code emitted verbatim inside a fenced block.
    #[serde(default)]
    pub code: String,
    /// Fence language; absent or blank means the default language.
    #[serde(default)]
    pub language: Option<String>,
}

/// Free-form section appended after the examples.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomSection {
    /// Level-two heading text.
    #[serde(default)]
    pub title: String,
    /// Paragraph rendered beneath the heading.
    #[serde(default)]
    pub description: String,
    /// Markdown body emitted verbatim.
    #[serde(default)]
    pub body: String,
}

/// One documentation annotation attached to a resource type.
///
/// Descriptors list annotations base type first, then in declaration order
/// within each type. That order decides every override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RawAnnotation {
    /// Document heading; the most-derived declaration wins.
    Heading(Heading),
    /// Front-matter entry merged into its block.
    FrontMatter(FrontMatterAnnotation),
    /// Unrendered metadata entry.
    DocMetadata(MetadataAnnotation),
    /// Usage example, appended in order.
    Example(ExampleAnnotation),
    /// Custom section, appended in order.
    CustomSection(CustomSection),
}

impl RawAnnotation {
    /// Builds a heading annotation.
    #[must_use]
    pub fn heading(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::Heading(Heading {
            title: title.into(),
            description: description.into(),
        })
    }

    /// Builds a front-matter annotation for the given block.
    #[must_use]
    pub fn front_matter(block: i64, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::FrontMatter(FrontMatterAnnotation {
            block,
            key: key.into(),
            value: value.into(),
        })
    }

    /// Builds a metadata annotation.
    #[must_use]
    pub fn metadata(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::DocMetadata(MetadataAnnotation {
            key: key.into(),
            value: value.into(),
        })
    }

    /// Builds an example annotation using the default language.
    #[must_use]
    pub fn example(
        title: impl Into<String>,
        description: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self::Example(ExampleAnnotation {
            title: title.into(),
            description: description.into(),
            code: code.into(),
            language: None,
        })
    }

    /// Builds a custom section annotation.
    #[must_use]
    pub fn custom_section(
        title: impl Into<String>,
        description: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self::CustomSection(CustomSection {
            title: title.into(),
            description: description.into(),
            body: body.into(),
        })
    }
}

const fn default_block() -> i64 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn front_matter_block_defaults_to_one() {
        let parsed: RawAnnotation =
            serde_json::from_str(r#"{"kind":"front_matter","key":"title","value":"A"}"#)
                .expect("parse annotation");
        assert_eq!(parsed, RawAnnotation::front_matter(1, "title", "A"));
    }

    #[rstest]
    fn example_language_is_optional() {
        let parsed: RawAnnotation = serde_json::from_str(
            r#"{"kind":"example","title":"Basic","description":"","code":"resource x"}"#,
        )
        .expect("parse annotation");
        assert_eq!(parsed, RawAnnotation::example("Basic", "", "resource x"));
    }
}
