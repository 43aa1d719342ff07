//! JSON Export functionality
//!
//! Exports the full record list to JSON with schema versioning, for
//! machine-readable backups and interchange.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::OutlayResult;
use crate::models::Expense;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Application version that created the export
    pub app_version: String,

    /// Total number of records
    pub expense_count: usize,

    /// Date range of records (earliest)
    pub earliest_expense: Option<String>,

    /// Date range of records (latest)
    pub latest_expense: Option<String>,

    /// All expense records, in ledger order
    pub expenses: Vec<Expense>,
}

impl FullExport {
    /// Build an export from a ledger snapshot
    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        let earliest_expense = expenses.iter().map(|e| e.date).min().map(|d| d.to_string());
        let latest_expense = expenses.iter().map(|e| e.date).max().map(|d| d.to_string());

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expense_count: expenses.len(),
            earliest_expense,
            latest_expense,
            expenses,
        }
    }
}

/// Export the full record list as pretty-printed JSON
pub fn export_full_json<W: Write>(expenses: Vec<Expense>, writer: &mut W) -> OutlayResult<()> {
    let export = FullExport::from_expenses(expenses);
    serde_json::to_writer_pretty(writer, &export)?;
    Ok(())
}
