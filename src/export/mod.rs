//! Export module for Outlay
//!
//! Renders ledger snapshots to external formats:
//! - CSV: spreadsheet-compatible expense tables
//! - JSON: machine-readable full export
//!
//! Exporters are pure renderers over an ordered record slice; filtering is
//! the caller's job (via the ledger's query operations).

pub mod csv;
pub mod json;

pub use csv::{export_category_csv, export_expenses_csv};
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
