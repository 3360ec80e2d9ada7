//! Error types for cueclub
//!
//! This module defines the error types used throughout the cueclub crates.
//! All errors are derived from `thiserror` for convenient error handling
//! and automatic `From` implementations.
//!
//! Bill computation itself never fails; these errors come from the layers
//! around it (configuration, the session API, table lookups).
//!
//! # Example
//!
//! ```
//! use cueclub_core::error::{CueclubError, Result};
//!
//! fn example_function() -> Result<()> {
//!     // This will automatically convert io::Error to CueclubError
//!     let _file = std::fs::read_to_string("nonexistent.txt")?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

use crate::types::TableId;

/// Main error type for cueclub operations
#[derive(Error, Debug)]
pub enum CueclubError {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The session API answered with a non-success status
    #[error("Session API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Reason phrase or response body
        message: String,
    },

    /// Invalid date format
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    /// Invalid timezone
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Invalid hourly rate
    #[error("Invalid hourly rate: {0}")]
    InvalidRate(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Table id outside the configured range
    #[error("Table {0} does not exist")]
    TableNotFound(TableId),

    /// A game is already running on the table
    #[error("Table {0} is already occupied")]
    TableOccupied(TableId),

    /// No game is running on the table
    #[error("Table {0} has no active game")]
    TableNotOccupied(TableId),

    /// Start requested without a player name
    #[error("Please enter player's name to continue")]
    MissingPlayerName,
}

/// Convenience type alias for Results in cueclub
///
/// # Example
///
/// ```
/// use cueclub_core::Result;
///
/// fn process_data() -> Result<String> {
///     Ok("Processed successfully".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, CueclubError>;
