//! Export CLI commands
//!
//! Implements `export csv` and `export json`, writing a ledger snapshot to
//! a file or stdout.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{OutlayError, OutlayResult};
use crate::export::{export_category_csv, export_expenses_csv, export_full_json};
use crate::ledger::Ledger;
use crate::models::Expense;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export expenses as CSV
    Csv {
        /// Restrict the export to one category
        #[arg(short, long)]
        category: Option<String>,
        /// Output file (defaults to expenses.csv, or category_<NAME>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write to stdout instead of a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
    /// Export the full ledger as JSON
    Json {
        /// Output file (defaults to expenses.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write to stdout instead of a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
}

/// Handle an export command
pub fn handle_export_command(ledger: &Ledger, cmd: ExportCommands) -> OutlayResult<()> {
    match cmd {
        ExportCommands::Csv {
            category,
            output,
            stdout,
        } => {
            let (expenses, default_name) = match &category {
                Some(cat) => (ledger.by_category(cat), format!("category_{}.csv", cat)),
                None => (ledger.all(), "expenses.csv".to_string()),
            };

            if stdout {
                let mut out = io::stdout();
                write_csv(&expenses, category.as_deref(), &mut out)?;
            } else {
                let path = output.unwrap_or_else(|| PathBuf::from(default_name));
                let mut file = create_output_file(&path)?;
                write_csv(&expenses, category.as_deref(), &mut file)?;
                println!("Exported {} expenses to {}", expenses.len(), path.display());
            }
        }

        ExportCommands::Json { output, stdout } => {
            let expenses = ledger.all();
            let count = expenses.len();

            if stdout {
                export_full_json(expenses, &mut io::stdout())?;
                println!();
            } else {
                let path = output.unwrap_or_else(|| PathBuf::from("expenses.json"));
                let mut file = create_output_file(&path)?;
                export_full_json(expenses, &mut file)?;
                println!("Exported {} expenses to {}", count, path.display());
            }
        }
    }

    Ok(())
}

fn write_csv<W: Write>(
    expenses: &[Expense],
    category: Option<&str>,
    writer: &mut W,
) -> OutlayResult<()> {
    match category {
        Some(cat) => export_category_csv(expenses, cat, writer),
        None => export_expenses_csv(expenses, writer),
    }
}

fn create_output_file(path: &PathBuf) -> OutlayResult<File> {
    File::create(path)
        .map_err(|e| OutlayError::Export(format!("Failed to create {}: {}", path.display(), e)))
}
