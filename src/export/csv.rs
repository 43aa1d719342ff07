//! CSV Export functionality
//!
//! Exports expense records to CSV with one header row
//! (`Date,Category,Amount,Description`) and one data row per record, in the
//! order given. Amounts are rendered to two decimals; text fields get CSV
//! quoting from the csv crate.

use std::io::Write;

use tracing::{info, warn};

use crate::error::{OutlayError, OutlayResult};
use crate::models::Expense;

/// Export expenses to CSV
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> OutlayResult<()> {
    if expenses.is_empty() {
        warn!("no expenses to export");
    }

    write_table(expenses, writer)?;
    info!(count = expenses.len(), "expenses exported to CSV");
    Ok(())
}

/// Export a single category's expenses to CSV
///
/// The category name labels the export (log lines, default file names); no
/// filtering happens here. Callers pass a pre-filtered slice, normally from
/// [`Ledger::by_category`](crate::ledger::Ledger::by_category).
pub fn export_category_csv<W: Write>(
    expenses: &[Expense],
    category: &str,
    writer: &mut W,
) -> OutlayResult<()> {
    if expenses.is_empty() {
        warn!(category, "no expenses to export for category");
    }

    write_table(expenses, writer)?;
    info!(count = expenses.len(), category, "category exported to CSV");
    Ok(())
}

fn write_table<W: Write>(expenses: &[Expense], writer: &mut W) -> OutlayResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Date", "Category", "Amount", "Description"])
        .map_err(|e| OutlayError::Export(e.to_string()))?;

    for expense in expenses {
        csv_writer
            .write_record([
                expense.date.format("%Y-%m-%d").to_string(),
                expense.category.clone(),
                format!("{:.2}", expense.amount),
                expense.description.clone(),
            ])
            .map_err(|e| OutlayError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| OutlayError::Export(e.to_string()))?;

    Ok(())
}
