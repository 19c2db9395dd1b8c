//! Test helpers shared across crates in the resdoc workspace.
//!
//! [`descriptors`] builds the resource descriptors used by golden and
//! behavioural tests, [`figment`] wraps `figment::Jail` for configuration
//! tests, and [`text`] inspects rendered Markdown.

pub mod descriptors;
pub mod figment;
pub mod text;
