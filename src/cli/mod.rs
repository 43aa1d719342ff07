//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the ledger core. Handlers stay thin: parse
//! input, call the ledger/storage/export operations, print via the display
//! layer.

pub mod expense;
pub mod export;
pub mod stats;

pub use expense::{handle_add_command, handle_list_command, parse_cli_date};
pub use export::{handle_export_command, ExportCommands};
pub use stats::handle_stats_command;
