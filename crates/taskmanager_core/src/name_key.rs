//! Comparison keys for project names and task titles.
//!
//! # Responsibility
//! - Collapse a display string into the key used for every equality check.
//!
//! # Invariants
//! - Keys are built by NFD decomposition, dropping all `Mark` code points,
//!   then lowercasing the whole string. The same function backs insert,
//!   lookup and removal.
//! - Key construction is total and never fails.

use std::fmt::{Display, Formatter};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Accent-stripped, case-folded form of a display string.
///
/// Two display strings name the same project (or task) iff their keys are
/// equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NameKey(String);

impl NameKey {
    /// Builds the key for `value`.
    pub fn new(value: &str) -> Self {
        Self(normalize(value))
    }

    /// Returns the normalized key text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns whether `value` maps to this key.
    pub fn matches(&self, value: &str) -> bool {
        *self == Self::new(value)
    }
}

impl Display for NameKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NameKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Returns the comparison key for `value`.
pub fn name_key(value: &str) -> NameKey {
    NameKey::new(value)
}

fn normalize(value: &str) -> String {
    let stripped: String = value
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect();
    // Whole-string lowercasing applies context rules such as final sigma.
    stripped.to_lowercase()
}
