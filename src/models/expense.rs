//! Expense model
//!
//! A single expense record: amount, category, date, and an optional free-text
//! description. Records carry no identity field; two records with identical
//! fields are distinct entries, distinguished only by their position in the
//! ledger.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Amount in currency units (positive for any record the ledger accepts)
    pub amount: f64,

    /// Category label; membership in the fixed set is checked by the ledger,
    /// not here
    pub category: String,

    /// Calendar date of the expense (no time-of-day component)
    pub date: NaiveDate,

    /// Free text; may be empty and is never a uniqueness key
    #[serde(default)]
    pub description: String,
}

impl Expense {
    /// Create a new expense with an empty description
    pub fn new(amount: f64, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            category: category.into(),
            date,
            description: String::new(),
        }
    }

    /// Create a new expense with a description
    pub fn with_description(
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            date,
            description: description.into(),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {:.2} | {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount,
            self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_expense() {
        let e = Expense::new(12.5, "Food", date(2024, 1, 1));
        assert_eq!(e.amount, 12.5);
        assert_eq!(e.category, "Food");
        assert_eq!(e.description, "");
    }

    #[test]
    fn test_display_format() {
        let e = Expense::with_description(50.0, "Food", date(2024, 1, 1), "lunch");
        assert_eq!(e.to_string(), "2024-01-01 | Food | 50.00 | lunch");
    }

    #[test]
    fn test_display_empty_description() {
        let e = Expense::new(9.99, "Transport", date(2024, 3, 15));
        assert_eq!(e.to_string(), "2024-03-15 | Transport | 9.99 | ");
    }

    #[test]
    fn test_duplicates_are_equal_but_distinct_entries() {
        let a = Expense::with_description(5.0, "Gifts", date(2024, 2, 2), "card");
        let b = a.clone();
        assert_eq!(a, b);
    }
}
