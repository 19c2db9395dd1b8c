//! Behavioural tests for the coverage check using `rstest-bdd`.
//!
//! Step implementations live in [`steps`]; [`scenarios`] binds the feature
//! file to the shared fixture.

mod scenarios;
mod steps;
