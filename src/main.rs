use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use outlay::cli::{
    handle_add_command, handle_export_command, handle_list_command, handle_stats_command,
    ExportCommands,
};
use outlay::config::OutlayPaths;
use outlay::ledger::Ledger;
use outlay::storage;

#[derive(Parser)]
#[command(
    name = "outlay",
    version,
    about = "Command-line expense tracker",
    long_about = "Outlay is a command-line expense tracker. It records expenses \
                  against a fixed category set, keeps them in a local ledger file, \
                  and reports totals and per-category statistics."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new expense
    Add {
        /// Amount spent (must be positive)
        amount: f64,
        /// Category (see 'outlay categories')
        category: String,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// List expenses
    List {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show spending statistics
    Stats {
        /// Show a single category's breakdown
        category: Option<String>,
    },

    /// Export expenses
    #[command(subcommand)]
    Export(ExportCommands),

    /// List the available categories
    Categories,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = OutlayPaths::new()?;
    let ledger = Ledger::new();

    // Populate from the persisted file; corrupt rows are dropped, not fatal.
    let report = storage::load(paths.ledger_file())?;
    for expense in report.expenses {
        ledger.add_ignoring_errors(expense);
    }
    if report.skipped > 0 {
        eprintln!(
            "Warning: {} malformed line(s) in {} were skipped",
            report.skipped,
            paths.ledger_file().display()
        );
    }

    match cli.command {
        Some(Commands::Add {
            amount,
            category,
            date,
            description,
        }) => {
            handle_add_command(&ledger, &paths, amount, category, date, description)?;
        }
        Some(Commands::List { category, date }) => {
            handle_list_command(&ledger, category, date)?;
        }
        Some(Commands::Stats { category }) => {
            handle_stats_command(&ledger, category)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&ledger, cmd)?;
        }
        Some(Commands::Categories) => {
            for category in ledger.categories().iter() {
                println!("{}", category);
            }
        }
        Some(Commands::Config) => {
            println!("Outlay Configuration");
            println!("====================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!("Expenses:       {}", ledger.len());
        }
        None => {
            println!("Outlay - command-line expense tracker");
            println!();
            println!("Run 'outlay --help' for usage information.");
        }
    }

    Ok(())
}
