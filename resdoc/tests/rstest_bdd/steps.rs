//! Step definitions for coverage check scenarios.

use anyhow::{Result, anyhow, ensure};
use resdoc::{ModelDescriptor, PropertySchemaEntry, RawAnnotation, RunOutcome, RunReport};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, then, when};
use test_helpers::text::unquote;

/// Scenario state shared between coverage steps.
#[derive(Debug, Default, ScenarioState)]
pub struct CheckContext {
    /// Descriptor assembled by the `Given` steps.
    pub descriptor: Slot<ModelDescriptor>,
    /// Report captured by the `When` step.
    pub report: Slot<RunReport>,
}

/// Provides a fresh context for each scenario.
#[fixture]
pub fn check_context() -> CheckContext {
    CheckContext::default()
}

#[given("a resource {name} with property {property}")]
fn resource_with_property(check_context: &CheckContext, name: String, property: String) {
    let descriptor = ModelDescriptor::new(unquote(&name))
        .with_property(PropertySchemaEntry::new(unquote(&property), ""));
    check_context.descriptor.set(descriptor);
}

#[given("a resource {name} with documented property {property}")]
fn resource_with_documented_property(check_context: &CheckContext, name: String, property: String) {
    let descriptor = ModelDescriptor::new(unquote(&name)).with_property(PropertySchemaEntry::new(
        unquote(&property),
        "Described by the schema.",
    ));
    check_context.descriptor.set(descriptor);
}

#[given("the resource has metadata key {key}")]
fn resource_metadata(check_context: &CheckContext, key: String) -> Result<()> {
    let descriptor = check_context
        .descriptor
        .take()
        .ok_or_else(|| anyhow!("resource must be declared first"))?;
    check_context
        .descriptor
        .set(descriptor.with_annotation(RawAnnotation::metadata(
            unquote(&key),
            "Documented through metadata.",
        )));
    Ok(())
}

#[when("I check documentation coverage")]
fn run_check(check_context: &CheckContext) -> Result<()> {
    let descriptor = check_context
        .descriptor
        .with_ref(Clone::clone)
        .ok_or_else(|| anyhow!("resource must be declared first"))?;
    check_context
        .report
        .set(resdoc::pipeline::check_all(&[descriptor]));
    Ok(())
}

#[then("the run is failing")]
fn run_is_failing(check_context: &CheckContext) -> Result<()> {
    let outcome = outcome(check_context)?;
    ensure!(outcome == RunOutcome::Failing, "expected failing run, got {outcome:?}");
    Ok(())
}

#[then("the run is passing")]
fn run_is_passing(check_context: &CheckContext) -> Result<()> {
    let outcome = outcome(check_context)?;
    ensure!(outcome == RunOutcome::Passing, "expected passing run, got {outcome:?}");
    Ok(())
}

#[then("the errors reported for {name} number {count}")]
fn reports_errors(check_context: &CheckContext, name: String, count: usize) -> Result<()> {
    let actual = count_for(check_context, &name, resdoc::Report::error_count)?;
    ensure!(actual == count, "expected {count} errors for {name}, got {actual}");
    Ok(())
}

#[then("the warnings reported for {name} number {count}")]
fn reports_warnings(check_context: &CheckContext, name: String, count: usize) -> Result<()> {
    let actual = count_for(check_context, &name, resdoc::Report::warning_count)?;
    ensure!(actual == count, "expected {count} warnings for {name}, got {actual}");
    Ok(())
}

fn outcome(check_context: &CheckContext) -> Result<RunOutcome> {
    check_context
        .report
        .with_ref(RunReport::outcome)
        .ok_or_else(|| anyhow!("coverage was not checked"))
}

fn count_for(
    check_context: &CheckContext,
    name: &str,
    count: impl Fn(&resdoc::Report) -> usize,
) -> Result<usize> {
    let resource = unquote(name);
    check_context
        .report
        .with_ref(|run| {
            run.reports
                .iter()
                .find(|report| report.resource_name == resource)
                .map(&count)
        })
        .flatten()
        .ok_or_else(|| anyhow!("no report for {resource}"))
}
