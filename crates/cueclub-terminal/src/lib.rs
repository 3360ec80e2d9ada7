//! Terminal output formatting for cueclub
//!
//! This crate provides table and JSON formatters for the table board,
//! end-of-game receipts, session history, and earnings.

pub mod output;

pub use output::{JsonFormatter, OutputFormatter, TableFormatter, get_formatter};
