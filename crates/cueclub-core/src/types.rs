//! Core domain types for cueclub
//!
//! This module contains the fundamental types used throughout the cueclub crates:
//! table identifiers, staff identity, the rate policy, the billed time interval,
//! the bill breakdown, and the session records exchanged with the session API.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hourly rate charged by the club when nothing else is configured
pub const DEFAULT_HOURLY_RATE: f64 = 950.0;

/// Strongly-typed table number (1-based)
///
/// # Examples
/// ```
/// use cueclub_core::types::TableId;
///
/// let table = TableId::new(3);
/// assert_eq!(table.get(), 3);
/// assert_eq!(table.to_string(), "3");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct TableId(u32);

impl TableId {
    /// Create a new TableId
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the inner table number
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Staff member performing a start or end action
///
/// Both fields may be empty when the caller has no identity to report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffInfo {
    /// Display name (first name) of the staff member
    pub name: String,
    /// Stable identifier of the staff member
    pub id: String,
}

impl StaffInfo {
    /// Create a new StaffInfo
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}

/// Pricing policy for table time
///
/// The hourly rate buys one 60-minute block; minutes past the last full hour
/// are charged at `hourly_rate / 60`.
///
/// # Examples
/// ```
/// use cueclub_core::types::RatePolicy;
///
/// let rate = RatePolicy::new(600.0);
/// assert_eq!(rate.per_minute_rate(), 10.0);
/// assert_eq!(RatePolicy::default().hourly_rate, 950.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatePolicy {
    /// Currency amount per 60-minute block
    pub hourly_rate: f64,
}

impl RatePolicy {
    /// Create a new RatePolicy
    pub fn new(hourly_rate: f64) -> Self {
        Self { hourly_rate }
    }

    /// Rate charged for each minute beyond the last full hour
    pub fn per_minute_rate(&self) -> f64 {
        self.hourly_rate / 60.0
    }
}

impl Default for RatePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_HOURLY_RATE)
    }
}

/// Time span of a single table session
///
/// Either end may be missing, in which case the session bills nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    /// When the game started
    pub start: Option<DateTime<Utc>>,
    /// When the game ended
    pub end: Option<DateTime<Utc>>,
}

impl TimeInterval {
    /// Create an interval from optional endpoints
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    /// Create an interval with both endpoints known
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self::new(Some(start), Some(end))
    }
}

/// Computed charges for one session
///
/// Produced once when a game ends, shown on the receipt and posted to the
/// session API. Field names serialize in camelCase.
///
/// # Examples
/// ```
/// use cueclub_core::types::BillBreakdown;
///
/// let zero = BillBreakdown::zero();
/// assert!(zero.is_zero());
/// assert_eq!(zero.total_bill, 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillBreakdown {
    /// Charge for the first hour block
    pub initial_charge: f64,
    /// Everything billed beyond the first hour block, never negative
    pub additional_charge: f64,
    /// Total charge rounded to 2 decimal places
    pub total_bill: f64,
    /// Elapsed minutes, rounded up
    pub total_minutes: i64,
    /// Minutes past the last full hour billed at the per-minute rate
    pub additional_minutes: i64,
}

impl BillBreakdown {
    /// Breakdown for a session that bills nothing
    pub fn zero() -> Self {
        Self::default()
    }

    /// Whether nothing was billed
    pub fn is_zero(&self) -> bool {
        self.total_minutes == 0 && self.total_bill == 0.0
    }
}

/// Everything shown to staff when a game ends
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionReceipt {
    /// Table the game ran on
    pub table_id: TableId,
    /// Player name
    pub player_name: String,
    /// When the game started
    pub start_time: Option<DateTime<Utc>>,
    /// End time captured when the receipt was prepared
    pub end_time: DateTime<Utc>,
    /// Computed charges
    pub breakdown: BillBreakdown,
}

/// Session record as returned by the session API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSessionRecord {
    /// Table number
    #[serde(default)]
    pub table_id: Option<u32>,
    /// Player name as entered at start
    #[serde(default)]
    pub player_name: Option<String>,
    /// Start time (RFC 3339 or naive local date-time)
    #[serde(default)]
    pub start_time: Option<String>,
    /// End time (RFC 3339 or naive local date-time)
    #[serde(default)]
    pub end_time: Option<String>,
    /// Recorded total bill, once the game has ended
    #[serde(default)]
    pub total_amount: Option<f64>,
}

/// A session as seen by the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveSession {
    /// Table number, 0 when the API omitted it
    pub table_id: TableId,
    /// Player name, empty when unknown
    pub player_name: String,
    /// When the game started
    pub start_time: Option<DateTime<Utc>>,
    /// When the game ended, if it has
    pub end_time: Option<DateTime<Utc>>,
    /// Recorded total bill, if any
    pub total_amount: Option<f64>,
}

impl ActiveSession {
    /// Convert a wire record, reading naive timestamps in the given timezone
    ///
    /// Unparseable timestamps become `None` rather than failing the record.
    pub fn from_raw(raw: RawSessionRecord, tz: &Tz) -> Self {
        Self {
            table_id: TableId::new(raw.table_id.unwrap_or(0)),
            player_name: raw.player_name.unwrap_or_default(),
            start_time: raw.start_time.as_deref().and_then(|s| session_time(s, tz)),
            end_time: raw.end_time.as_deref().and_then(|s| session_time(s, tz)),
            // A recorded amount of zero means no bill yet
            total_amount: raw.total_amount.filter(|amount| *amount != 0.0),
        }
    }
}

fn session_time(value: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let parsed = parse_local_datetime(value, tz);
    if parsed.is_none() && !value.trim().is_empty() {
        tracing::warn!("Ignoring unparseable session timestamp: {}", value);
    }
    parsed
}

/// Parse a timestamp as the session API or a staff member writes it
///
/// Accepts RFC 3339 (with offset) and naive ISO date-times, the latter
/// interpreted in `tz`. Returns `None` for anything else.
pub fn parse_local_datetime(value: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return tz
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc));
        }
    }

    None
}

/// Earnings totals reported by the session API
///
/// Only the commonly present figures are typed; everything else the API
/// sends is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsSummary {
    /// Earnings across all sessions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_earnings: Option<f64>,
    /// Number of billed sessions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_sessions: Option<u64>,
    /// Earnings for the current day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today_earnings: Option<f64>,
    /// Any other fields, preserved verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
