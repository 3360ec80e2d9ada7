//! CLI interface for cueclub
//!
//! This module defines the command-line interface using clap. Club-wide
//! settings are global flags that can also come from the environment, so a
//! counter machine can be configured once:
//!
//! | Flag | Environment |
//! |---|---|
//! | `--api-url` | `CUECLUB_API_URL` |
//! | `--rate` | `CUECLUB_HOURLY_RATE` |
//! | `--tables` | `CUECLUB_TABLE_COUNT` |
//! | `--staff-name` | `CUECLUB_STAFF_NAME` |
//! | `--staff-id` | `CUECLUB_STAFF_ID` |
//!
//! # Example
//!
//! ```bash
//! # Show the table board (default command)
//! cueclub
//!
//! # Start a game and end it later
//! cueclub start --table 2 --player Kasun --yes
//! cueclub end --table 2 --yes
//!
//! # Price a session offline
//! cueclub bill --start "2024-03-01 18:00" --end "2024-03-01 19:04"
//! ```

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};

use crate::config::{ClubConfig, DEFAULT_API_BASE_URL, DEFAULT_TABLE_COUNT};
use crate::error::{CueclubError, Result};
use crate::timezone::TimezoneConfig;
use crate::types::{DEFAULT_HOURLY_RATE, StaffInfo, TableId, parse_local_datetime};

/// Manage pool-table rentals: start and end games and bill them
#[derive(Parser, Debug, Clone)]
#[command(name = "cueclub")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Show informational output (default is quiet mode with only warnings and errors)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Base URL of the session API
    #[arg(long, global = true, env = "CUECLUB_API_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_url: String,

    /// Charge for one 60-minute block
    #[arg(long, global = true, env = "CUECLUB_HOURLY_RATE", default_value_t = DEFAULT_HOURLY_RATE)]
    pub rate: f64,

    /// Number of tables on the floor
    #[arg(
        long = "tables",
        global = true,
        env = "CUECLUB_TABLE_COUNT",
        default_value_t = DEFAULT_TABLE_COUNT
    )]
    pub table_count: u32,

    /// Timezone for session times (e.g. "Asia/Colombo", "UTC")
    /// If not specified, uses the system's local timezone
    #[arg(long, short = 'z', global = true)]
    pub timezone: Option<String>,

    /// Use UTC for session times (overrides --timezone)
    #[arg(long, global = true)]
    pub utc: bool,

    /// Name of the staff member at the counter
    #[arg(long, global = true, env = "CUECLUB_STAFF_NAME", default_value = "")]
    pub staff_name: String,

    /// Identifier of the staff member at the counter
    #[arg(long, global = true, env = "CUECLUB_STAFF_ID", default_value = "")]
    pub staff_id: String,

    /// Subcommand to execute (defaults to `tables`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Resolve the club configuration from the global flags
    pub fn club_config(&self) -> Result<ClubConfig> {
        let timezone = TimezoneConfig::from_cli(self.timezone.as_deref(), self.utc)?;
        ClubConfig::new(
            &self.api_url,
            self.rate,
            self.table_count,
            StaffInfo::new(self.staff_name.clone(), self.staff_id.clone()),
            timezone,
        )
    }
}

/// Arguments for starting a game
#[derive(Args, Debug, Clone)]
pub struct StartArgs {
    /// Table number
    #[arg(long, short = 't')]
    pub table: u32,

    /// Player name
    #[arg(long, short = 'p')]
    pub player: String,

    /// Send the request instead of only showing the confirmation
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Arguments for ending a game
#[derive(Args, Debug, Clone)]
pub struct EndArgs {
    /// Table number
    #[arg(long, short = 't')]
    pub table: u32,

    /// Record the bill instead of only showing the receipt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Arguments for an offline bill
#[derive(Args, Debug, Clone)]
pub struct BillArgs {
    /// Start time (YYYY-MM-DD HH:MM[:SS] local, or RFC 3339)
    #[arg(long)]
    pub start: String,

    /// End time (YYYY-MM-DD HH:MM[:SS] local, or RFC 3339)
    #[arg(long)]
    pub end: String,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show every table and whether a game is running
    Tables,
    /// Start a game on an available table
    Start(StartArgs),
    /// End the game on a table and bill it
    End(EndArgs),
    /// Compute a bill for two times without contacting the API
    Bill(BillArgs),
    /// Show all recorded sessions
    History,
    /// Show the earnings summary
    Earnings,
}

/// Parse a table number given on the command line
pub fn parse_table(table: u32) -> Result<TableId> {
    if table == 0 {
        return Err(CueclubError::InvalidArgument(
            "Table numbers start at 1".to_string(),
        ));
    }
    Ok(TableId::new(table))
}

/// Parse a date-time given on the command line
///
/// Accepts `YYYY-MM-DD HH:MM`, `YYYY-MM-DD HH:MM:SS` (also with `T`) in the
/// configured timezone, or RFC 3339 with an explicit offset.
///
/// # Example
///
/// ```
/// use cueclub::cli::parse_time_arg;
/// use cueclub::timezone::TimezoneConfig;
///
/// let tz = TimezoneConfig::utc();
/// let dt = parse_time_arg("2024-03-01 18:30", &tz).unwrap();
/// assert_eq!(dt.to_rfc3339(), "2024-03-01T18:30:00+00:00");
///
/// assert!(parse_time_arg("half past six", &tz).is_err());
/// ```
pub fn parse_time_arg(value: &str, tz: &TimezoneConfig) -> Result<DateTime<Utc>> {
    parse_local_datetime(value, &tz.tz).ok_or_else(|| {
        CueclubError::InvalidDate(format!(
            "'{value}', expected YYYY-MM-DD HH:MM[:SS] or RFC 3339"
        ))
    })
}
