//! Core types, traits, and utilities for cueclub
//!
//! This crate provides the foundational types, error handling,
//! timezone and club configuration, the table board, and the
//! session service seam used by all other cueclub crates.

pub mod board;
pub mod config;
pub mod error;
pub mod service;
pub mod timezone;
pub mod types;

// Re-export commonly used types
pub use error::{CueclubError, Result};
pub use types::{BillBreakdown, RatePolicy, StaffInfo, TableId, TimeInterval};
