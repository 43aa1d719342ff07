//! Outlay - Command-line expense tracker
//!
//! This library provides the core functionality for the Outlay expense
//! tracker: an in-memory expense ledger with validation and category
//! aggregation, a durable text codec for the persisted ledger file, and
//! CSV/JSON exporters over ledger snapshots.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management for the data directory
//! - `error`: Custom error types
//! - `models`: Core data models (expense records, the fixed category set)
//! - `ledger`: The thread-safe expense ledger and its aggregations
//! - `storage`: The line codec and ledger-file I/O
//! - `export`: CSV and JSON renderers over ledger snapshots
//! - `display`: Terminal formatting
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use outlay::ledger::Ledger;
//! use outlay::models::Expense;
//!
//! let ledger = Ledger::new();
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! ledger.add(Expense::with_description(50.0, "Food", date, "lunch"))?;
//! assert_eq!(ledger.total(), 50.0);
//! # Ok::<(), outlay::OutlayError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod storage;

pub use error::{OutlayError, OutlayResult};
