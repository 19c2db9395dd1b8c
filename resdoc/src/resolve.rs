//! Folds raw annotations into a [`ResourceDocModel`].
//!
//! Annotations arrive pre-ordered: base types first, then declaration order
//! within each type. The fold walks them left to right, so later entries
//! override earlier ones wherever an override is defined:
//!
//! - headings: last one wins;
//! - front matter: per-block key overwrite;
//! - metadata: key overwrite;
//! - examples and custom sections: appended, never merged.

use crate::model::{
    DEFAULT_EXAMPLE_LANGUAGE, Example, ExampleAnnotation, FrontMatter, ModelDescriptor,
    RawAnnotation, ResourceDocModel,
};

/// Resolves a descriptor's annotations into a document model.
///
/// This never fails; a descriptor without annotations yields an empty model.
#[must_use]
pub fn resolve(descriptor: &ModelDescriptor) -> ResourceDocModel {
    resolve_annotations(&descriptor.annotations)
}

/// Folds an ordered annotation list into a document model.
#[must_use]
pub fn resolve_annotations<'a, I>(annotations: I) -> ResourceDocModel
where
    I: IntoIterator<Item = &'a RawAnnotation>,
{
    annotations
        .into_iter()
        .fold(ResourceDocModel::default(), apply)
}

fn apply(mut model: ResourceDocModel, annotation: &RawAnnotation) -> ResourceDocModel {
    match annotation {
        RawAnnotation::Heading(heading) => model.heading = Some(heading.clone()),
        RawAnnotation::FrontMatter(entry) => {
            model.front_matter.insert(
                FrontMatter::normalise_block(entry.block),
                entry.key.as_str(),
                entry.value.as_str(),
            );
        }
        RawAnnotation::DocMetadata(entry) => {
            model.metadata.insert(entry.key.as_str(), entry.value.as_str());
        }
        RawAnnotation::Example(example) => model.examples.push(resolve_example(example)),
        RawAnnotation::CustomSection(section) => model.custom_sections.push(section.clone()),
    }
    model
}

fn resolve_example(example: &ExampleAnnotation) -> Example {
    let language = example
        .language
        .as_deref()
        .map(str::trim)
        .filter(|language| !language.is_empty())
        .unwrap_or(DEFAULT_EXAMPLE_LANGUAGE);
    Example {
        title: example.title.clone(),
        description: example.description.clone(),
        code: example.code.clone(),
        language: language.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Heading;
    use rstest::rstest;

    fn descriptor(annotations: Vec<RawAnnotation>) -> ModelDescriptor {
        ModelDescriptor {
            resource_type: "Widget".to_owned(),
            annotations,
            properties: Vec::new(),
        }
    }

    #[rstest]
    fn empty_descriptor_yields_empty_model() {
        let model = resolve(&descriptor(Vec::new()));
        assert!(model.is_empty());
        assert_eq!(model, ResourceDocModel::default());
    }

    #[rstest]
    fn most_derived_heading_wins() {
        let model = resolve(&descriptor(vec![
            RawAnnotation::heading("Base", "From the base type."),
            RawAnnotation::heading("Derived", ""),
        ]));
        assert_eq!(
            model.heading,
            Some(Heading {
                title: "Derived".to_owned(),
                description: String::new(),
            })
        );
    }

    #[rstest]
    fn derived_front_matter_overrides_base() {
        let model = resolve(&descriptor(vec![
            RawAnnotation::front_matter(1, "title", "A"),
            RawAnnotation::front_matter(1, "layout", "page"),
            RawAnnotation::front_matter(1, "title", "B"),
        ]));
        assert_eq!(model.front_matter.get(1, "title"), Some("B"));
        let keys: Vec<_> = model.front_matter.keys().collect();
        assert_eq!(keys, vec!["title", "layout"]);
    }

    #[rstest]
    fn front_matter_merge_is_idempotent() {
        let once = resolve(&descriptor(vec![RawAnnotation::front_matter(
            1, "title", "A",
        )]));
        let twice = resolve(&descriptor(vec![
            RawAnnotation::front_matter(1, "title", "A"),
            RawAnnotation::front_matter(1, "title", "A"),
        ]));
        assert_eq!(once.front_matter, twice.front_matter);
    }

    #[rstest]
    #[case(-3)]
    #[case(0)]
    fn invalid_block_indices_land_in_first_block(#[case] block: i64) {
        let model = resolve(&descriptor(vec![RawAnnotation::front_matter(
            block, "title", "A",
        )]));
        assert_eq!(model.front_matter.get(FrontMatter::FIRST_BLOCK, "title"), Some("A"));
    }

    #[rstest]
    fn metadata_is_last_wins() {
        let model = resolve(&descriptor(vec![
            RawAnnotation::metadata("category", "storage"),
            RawAnnotation::metadata("category", "network"),
        ]));
        assert_eq!(model.metadata.get("category"), Some("network"));
        assert_eq!(model.metadata.len(), 1);
    }

    #[rstest]
    fn examples_keep_order_and_duplicates() {
        let model = resolve(&descriptor(vec![
            RawAnnotation::example("E1", "", "one"),
            RawAnnotation::example("E2", "", "two"),
            RawAnnotation::example("E1", "", "again"),
        ]));
        let titles: Vec<_> = model.examples.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["E1", "E2", "E1"]);
    }

    #[rstest]
    #[case(None, "bicep")]
    #[case(Some(""), "bicep")]
    #[case(Some("   "), "bicep")]
    #[case(Some("json"), "json")]
    fn example_language_defaults(#[case] declared: Option<&str>, #[case] expected: &str) {
        let model = resolve(&descriptor(vec![RawAnnotation::Example(ExampleAnnotation {
            title: "Basic".to_owned(),
            description: String::new(),
            code: "x".to_owned(),
            language: declared.map(str::to_owned),
        })]));
        let example = model.examples.first().expect("one example");
        assert_eq!(example.language, expected);
    }

    #[rstest]
    fn custom_sections_are_appended_verbatim() {
        let model = resolve(&descriptor(vec![
            RawAnnotation::custom_section("Limits", "Quotas apply.", "- one\n- two"),
            RawAnnotation::custom_section("Limits", "", ""),
        ]));
        assert_eq!(model.custom_sections.len(), 2);
        let first = model.custom_sections.first().expect("first section");
        assert_eq!(first.body, "- one\n- two");
    }
}
