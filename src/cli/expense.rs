//! Expense CLI commands
//!
//! Implements the `add` and `list` commands.

use chrono::{Local, NaiveDate};

use crate::config::OutlayPaths;
use crate::display::format_expense_list;
use crate::error::{OutlayError, OutlayResult};
use crate::ledger::Ledger;
use crate::models::Expense;
use crate::storage;

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_cli_date(input: &str) -> OutlayResult<NaiveDate> {
    input
        .parse()
        .map_err(|_| OutlayError::Validation(format!("invalid date (expected YYYY-MM-DD): {}", input)))
}

/// Handle the `add` command: validate, append, persist
pub fn handle_add_command(
    ledger: &Ledger,
    paths: &OutlayPaths,
    amount: f64,
    category: String,
    date: Option<String>,
    description: String,
) -> OutlayResult<()> {
    let date = match date {
        Some(raw) => parse_cli_date(&raw)?,
        None => Local::now().date_naive(),
    };

    let expense = Expense::with_description(amount, category, date, description);
    ledger.add(expense.clone())?;

    // Persist outside the ledger lock, from a snapshot.
    storage::save(paths.ledger_file(), &ledger.all())?;

    println!("Expense added: {}", expense);
    Ok(())
}

/// Handle the `list` command with optional category/date filters
pub fn handle_list_command(
    ledger: &Ledger,
    category: Option<String>,
    date: Option<String>,
) -> OutlayResult<()> {
    let expenses = match (category, date) {
        (Some(cat), None) => ledger.by_category(&cat),
        (None, Some(raw)) => ledger.by_date(parse_cli_date(&raw)?),
        (Some(cat), Some(raw)) => {
            let date = parse_cli_date(&raw)?;
            ledger
                .by_category(&cat)
                .into_iter()
                .filter(|e| e.date == date)
                .collect()
        }
        (None, None) => ledger.all(),
    };

    print!("{}", ensure_trailing_newline(format_expense_list(&expenses)));
    Ok(())
}

fn ensure_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
