//! Binds the coverage feature file to the step registry.

use super::steps::{CheckContext, check_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/coverage_check.feature",
    fixtures = [check_context: CheckContext]
);
