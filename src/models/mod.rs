//! Core data models for Outlay
//!
//! This module contains the data structures that represent the expense
//! tracking domain: expense records and the fixed category set.

pub mod category;
pub mod expense;

pub use category::CategorySet;
pub use expense::Expense;
