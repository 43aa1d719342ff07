//! Statistics CLI command
//!
//! Shows the grand total with every category's share, or a single
//! category's breakdown including its records.

use crate::display::{format_category_stats, format_statistics};
use crate::error::OutlayResult;
use crate::ledger::Ledger;

/// Handle the `stats` command
pub fn handle_stats_command(ledger: &Ledger, category: Option<String>) -> OutlayResult<()> {
    match category {
        Some(cat) => print!("{}", format_category_stats(ledger, &cat)),
        None => print!("{}", format_statistics(ledger)),
    }
    Ok(())
}
