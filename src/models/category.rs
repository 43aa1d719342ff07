//! Category set model
//!
//! Expense categories are a fixed, ordered set configured at ledger
//! construction rather than a mutable global. The default set holds the ten
//! predefined labels; tests can substitute a smaller set.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The ten predefined expense categories, in display order
pub const DEFAULT_CATEGORIES: [&str; 10] = [
    "Food",
    "Transport",
    "Housing",
    "Utilities",
    "Entertainment",
    "Health",
    "Education",
    "Clothing",
    "Gifts",
    "Miscellaneous",
];

/// An immutable, ordered set of category labels
///
/// Order is meaningful: aggregations and choice prompts follow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySet {
    labels: Vec<String>,
}

impl CategorySet {
    /// Build a set from arbitrary labels, preserving their order
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a label belongs to the set
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|c| c == label)
    }

    /// Iterate the labels in set order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// The labels as a slice, in set order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of categories in the set
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES)
    }
}

// Comma-joined rendering for prompts ("choose from Food, Transport, ...")
impl fmt::Display for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels.join(", "))
    }
}
