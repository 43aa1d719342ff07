//! Expense ledger
//!
//! Owns the ordered collection of expense records and provides validation,
//! filtering, and aggregation over it. The ledger is safe for concurrent
//! callers: every public operation is a single critical section guarded by
//! one per-instance lock, so no caller ever observes a half-applied
//! mutation. Persistence happens outside the lock, on a snapshot obtained
//! via [`Ledger::all`].
//!
//! Records handed out are clones. There is no in-place edit operation: a
//! stored record can only change by constructing a new [`Expense`] and going
//! back through [`Ledger::add`]'s validation.

use std::sync::Mutex;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::{OutlayError, OutlayResult};
use crate::models::{CategorySet, Expense};

/// The in-memory expense ledger
///
/// Insertion order is preserved and meaningful: it is the order records are
/// listed and exported in.
pub struct Ledger {
    categories: CategorySet,
    expenses: Mutex<Vec<Expense>>,
}

impl Ledger {
    /// Create an empty ledger with the default ten-category set
    pub fn new() -> Self {
        Self::with_categories(CategorySet::default())
    }

    /// Create an empty ledger with a custom category set
    pub fn with_categories(categories: CategorySet) -> Self {
        debug!(categories = categories.len(), "ledger initialized");
        Self {
            categories,
            expenses: Mutex::new(Vec::new()),
        }
    }

    /// The category set this ledger validates against
    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    /// Add an expense, rejecting invalid records
    ///
    /// Fails with a validation error when the amount is not positive or the
    /// category is not in the fixed set. On success the record is appended
    /// at the end of the sequence.
    pub fn add(&self, expense: Expense) -> OutlayResult<()> {
        if expense.amount <= 0.0 {
            warn!(amount = expense.amount, "rejected expense: non-positive amount");
            return Err(OutlayError::non_positive_amount(expense.amount));
        }

        if !self.categories.contains(&expense.category) {
            warn!(category = %expense.category, "rejected expense: unknown category");
            return Err(OutlayError::unknown_category(&expense.category));
        }

        let mut expenses = self.lock();
        expenses.push(expense);
        info!(count = expenses.len(), "expense added");
        Ok(())
    }

    /// Add an expense, silently discarding invalid records
    ///
    /// Same validation as [`Ledger::add`]; a failure is logged and dropped
    /// instead of propagated. Used for bulk-loading persisted data so that
    /// corrupt or legacy rows don't abort startup.
    pub fn add_ignoring_errors(&self, expense: Expense) {
        if let Err(err) = self.add(expense) {
            warn!(%err, "expense skipped during bulk load");
        }
    }

    /// All expenses, in insertion order
    ///
    /// Returns an independent copy; mutating it does not affect the ledger.
    pub fn all(&self) -> Vec<Expense> {
        self.lock().clone()
    }

    /// All expenses with the given category, in ledger order
    ///
    /// An unknown category yields an empty vec, not an error.
    pub fn by_category(&self, category: &str) -> Vec<Expense> {
        self.lock()
            .iter()
            .filter(|e| e.category == category)
            .cloned()
            .collect()
    }

    /// All expenses on the given date, in ledger order
    pub fn by_date(&self, date: NaiveDate) -> Vec<Expense> {
        self.lock()
            .iter()
            .filter(|e| e.date == date)
            .cloned()
            .collect()
    }

    /// Sum of all expense amounts; `0.0` for an empty ledger
    pub fn total(&self) -> f64 {
        sum_amounts(&self.lock())
    }

    /// Per-category totals, one entry per category of the fixed set
    ///
    /// Entries follow the category set's order (not the ledger's), and
    /// categories without records report `0.0`.
    pub fn totals_by_category(&self) -> Vec<(String, f64)> {
        let expenses = self.lock();
        self.categories
            .iter()
            .map(|c| (c.to_string(), sum_for_category(&expenses, c)))
            .collect()
    }

    /// Percentage of the grand total spent in the given category
    ///
    /// Rounded to two decimals with `f64::round`
    /// (round-half-away-from-zero, i.e. round-half-up for the non-negative
    /// ratios that occur here). Returns `0.0` when the grand total is zero,
    /// for any category string; no existence check is made.
    pub fn percentage(&self, category: &str) -> f64 {
        let expenses = self.lock();
        let total = sum_amounts(&expenses);
        if total == 0.0 {
            return 0.0;
        }

        let cat_total = sum_for_category(&expenses, category);
        (cat_total / total * 10000.0).round() / 100.0
    }

    /// Number of records in the ledger
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the ledger holds no records
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Expense>> {
        self.expenses.lock().expect("ledger lock poisoned")
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

fn sum_amounts(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).fold(0.0, |acc, a| acc + a)
}

fn sum_for_category(expenses: &[Expense], category: &str) -> f64 {
    expenses
        .iter()
        .filter(|e| e.category == category)
        .map(|e| e.amount)
        .fold(0.0, |acc, a| acc + a)
}
