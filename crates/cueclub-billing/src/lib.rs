//! Session bill calculator for cueclub
//!
//! This crate turns the start and end of a table session into a bill
//! under the club's hourly/per-minute rate policy.

pub mod bill_calculator;

pub use bill_calculator::BillCalculator;
