//! Capability flags reported by the external type system.
//!
//! The vocabulary belongs to the type system, so flags are stored by name.
//! Only the well-known names below receive a fixed rendering position; any
//! other flag is kept and rendered after them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A named capability of a property, such as `Required`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityFlag(String);

impl CapabilityFlag {
    /// Name of the flag marking a property as required.
    pub const REQUIRED: &'static str = "Required";
    /// Name of the flag marking a property as the resource identifier.
    pub const IDENTIFIER: &'static str = "Identifier";
    /// Name of the flag marking a property as output only.
    pub const READ_ONLY: &'static str = "ReadOnly";
    /// Name of the flag marking a property as input only.
    pub const WRITE_ONLY: &'static str = "WriteOnly";
    /// Name of the flag marking a discriminator value.
    pub const DISCRIMINATOR_VALUE: &'static str = "DiscriminatorValue";

    /// Creates a flag from its type-system name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The `Required` flag.
    #[must_use]
    pub fn required() -> Self {
        Self::new(Self::REQUIRED)
    }

    /// The `Identifier` flag.
    #[must_use]
    pub fn identifier() -> Self {
        Self::new(Self::IDENTIFIER)
    }

    /// The `ReadOnly` flag.
    #[must_use]
    pub fn read_only() -> Self {
        Self::new(Self::READ_ONLY)
    }

    /// The `WriteOnly` flag.
    #[must_use]
    pub fn write_only() -> Self {
        Self::new(Self::WRITE_ONLY)
    }

    /// The `DiscriminatorValue` flag.
    #[must_use]
    pub fn discriminator_value() -> Self {
        Self::new(Self::DISCRIMINATOR_VALUE)
    }

    /// Returns the type-system name of the flag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the qualifier shown in rendered property lists.
    #[must_use]
    pub fn label(&self) -> String {
        match self.as_str() {
            Self::REQUIRED => "required".to_owned(),
            Self::IDENTIFIER => "identifier".to_owned(),
            Self::READ_ONLY => "read-only".to_owned(),
            Self::WRITE_ONLY => "write-only".to_owned(),
            Self::DISCRIMINATOR_VALUE => "discriminator".to_owned(),
            other => kebab_case(other),
        }
    }

    fn rank(&self) -> u8 {
        match self.as_str() {
            Self::REQUIRED => 0,
            Self::IDENTIFIER => 1,
            Self::READ_ONLY | Self::WRITE_ONLY => 2,
            Self::DISCRIMINATOR_VALUE => 3,
            _ => 4,
        }
    }
}

/// Set of capability flags attached to a property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityFlags(BTreeSet<CapabilityFlag>);

impl CapabilityFlags {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Returns `true` when a flag with this name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.iter().any(|flag| flag.as_str() == name)
    }

    /// Returns `true` when the `Required` flag is present.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.contains(CapabilityFlag::REQUIRED)
    }

    /// Iterates over the flags in name order.
    pub fn iter(&self) -> impl Iterator<Item = &CapabilityFlag> {
        self.0.iter()
    }

    /// Number of flags in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no flags are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the rendered qualifiers in their fixed order.
    ///
    /// `required` or `optional` always comes first, followed by
    /// `identifier`, `read-only`/`write-only`, `discriminator`, and finally
    /// any flags outside the well-known vocabulary.
    #[must_use]
    pub fn qualifiers(&self) -> Vec<String> {
        let mut remaining: Vec<&CapabilityFlag> = self
            .iter()
            .filter(|flag| flag.as_str() != CapabilityFlag::REQUIRED)
            .collect();
        remaining.sort_by_key(|flag| flag.rank());

        let presence = if self.is_required() {
            "required"
        } else {
            "optional"
        };
        std::iter::once(presence.to_owned())
            .chain(remaining.into_iter().map(CapabilityFlag::label))
            .collect()
    }
}

impl FromIterator<CapabilityFlag> for CapabilityFlags {
    fn from_iter<I: IntoIterator<Item = CapabilityFlag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CapabilityFlags {
    type Item = &'a CapabilityFlag;
    type IntoIter = std::collections::btree_set::Iter<'a, CapabilityFlag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn kebab_case(name: &str) -> String {
    let mut output = String::with_capacity(name.len() + 4);
    let mut previous_lower = false;
    for ch in name.chars() {
        if ch.is_uppercase() {
            if previous_lower {
                output.push('-');
            }
            output.extend(ch.to_lowercase());
            previous_lower = false;
        } else if ch == '_' || ch == ' ' {
            output.push('-');
            previous_lower = false;
        } else {
            output.push(ch);
            previous_lower = ch.is_lowercase() || ch.is_ascii_digit();
        }
    }
    output
}
