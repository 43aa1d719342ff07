//! Ledger file storage
//!
//! Reads and writes the persisted ledger file through the line codec. This
//! layer owns nothing but I/O: content problems are handled line by line
//! inside [`codec::decode`], while inability to touch the file at all maps
//! to [`OutlayError::Storage`] and propagates to the caller.

pub mod codec;

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{OutlayError, OutlayResult};
use crate::models::Expense;

pub use codec::DecodeReport;

/// Save records to the ledger file, replacing its previous content
pub fn save<P: AsRef<Path>>(path: P, expenses: &[Expense]) -> OutlayResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            OutlayError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    fs::write(path, codec::encode(expenses)).map_err(|e| {
        OutlayError::Storage(format!("Failed to write {}: {}", path.display(), e))
    })?;

    info!(count = expenses.len(), path = %path.display(), "ledger saved");
    Ok(())
}

/// Load records from the ledger file
///
/// An absent file is an empty ledger, not an error. Malformed lines are
/// skipped and counted in the returned report.
pub fn load<P: AsRef<Path>>(path: P) -> OutlayResult<DecodeReport> {
    let path = path.as_ref();

    if !path.exists() {
        info!(path = %path.display(), "ledger file not found, starting empty");
        return Ok(DecodeReport::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        OutlayError::Storage(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let report = codec::decode(&content);
    if report.skipped > 0 {
        warn!(skipped = report.skipped, "malformed lines skipped during load");
    }
    info!(count = report.expenses.len(), path = %path.display(), "ledger loaded");

    Ok(report)
}
