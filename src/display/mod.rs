//! Display formatting for terminal output
//!
//! Formats ledger data for terminal display. All functions return strings;
//! printing is left to the CLI handlers.

pub mod expense;
pub mod stats;

pub use expense::format_expense_list;
pub use stats::{format_category_stats, format_statistics};
