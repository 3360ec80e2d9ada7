//! cueclub - Pool-table rental dashboard
//!
//! This library provides functionality to:
//! - Show which tables are free and which have a game running
//! - Start and end timed games through the club's session API
//! - Bill ended games under the hourly/per-minute rate policy
//! - Report session history and earnings in table and JSON formats
//!
//! # Examples
//!
//! ```no_run
//! use cueclub::{
//!     client::HttpSessionClient,
//!     config::ClubConfig,
//!     dashboard::Dashboard,
//! };
//!
//! #[tokio::main]
//! async fn main() -> cueclub::Result<()> {
//!     let config = ClubConfig::default();
//!     let client = HttpSessionClient::from_config(&config);
//!     let dashboard = Dashboard::new(client, config);
//!
//!     let board = dashboard.board().await?;
//!     println!("{} tables in use", board.occupied_count());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod dashboard;

// Re-export workspace crates under their concern names
pub use cueclub_billing as billing;
pub use cueclub_client as client;
pub use cueclub_core::{board, config, error, service, timezone, types};
pub use cueclub_terminal::output;

// Re-export commonly used types
pub use error::{CueclubError, Result};
pub use types::{BillBreakdown, RatePolicy, StaffInfo, TableId, TimeInterval};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
