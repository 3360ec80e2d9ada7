//! Timezone utilities for session times
//!
//! The session API and the staff at the counter both speak local wall-clock
//! time. This module detects the club's timezone, parses it from user input,
//! and renders UTC instants back in it.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::str::FromStr;
use tracing::debug;

use crate::error::{CueclubError, Result};

/// Configuration for timezone handling
#[derive(Debug, Clone)]
pub struct TimezoneConfig {
    /// The timezone used for reading and displaying session times
    pub tz: Tz,
    /// Whether the timezone is UTC
    pub is_utc: bool,
}

impl Default for TimezoneConfig {
    fn default() -> Self {
        let tz = get_local_timezone();
        Self {
            is_utc: tz == Tz::UTC,
            tz,
        }
    }
}

impl TimezoneConfig {
    /// Create a timezone configuration from CLI arguments
    pub fn from_cli(timezone_str: Option<&str>, use_utc: bool) -> Result<Self> {
        if use_utc {
            return Ok(Self::utc());
        }

        if let Some(tz_str) = timezone_str {
            let tz = Tz::from_str(tz_str).map_err(|_| {
                CueclubError::InvalidTimezone(format!(
                    "'{}'. Use format like 'Asia/Colombo', 'Europe/London', or 'UTC'",
                    tz_str
                ))
            })?;
            Ok(Self {
                tz,
                is_utc: tz == Tz::UTC,
            })
        } else {
            Ok(Self::default())
        }
    }

    /// UTC configuration, independent of the host
    pub fn utc() -> Self {
        Self {
            tz: Tz::UTC,
            is_utc: true,
        }
    }

    /// Get the display name for the configured timezone
    pub fn display_name(&self) -> &str {
        if self.is_utc { "UTC" } else { self.tz.name() }
    }

    /// Wall-clock time of day (`HH:MM:SS`) in the configured timezone
    pub fn format_time(&self, dt: &DateTime<Utc>) -> String {
        dt.with_timezone(&self.tz).format("%H:%M:%S").to_string()
    }

    /// Date and time (`YYYY-MM-DD HH:MM`) in the configured timezone
    pub fn format_datetime(&self, dt: &DateTime<Utc>) -> String {
        dt.with_timezone(&self.tz).format("%Y-%m-%d %H:%M").to_string()
    }
}

/// Detect the system's local timezone
///
/// Checks `TZ` first, then asks the operating system. Falls back to UTC.
pub fn get_local_timezone() -> Tz {
    if let Ok(tz_str) = std::env::var("TZ")
        && let Ok(tz) = Tz::from_str(&tz_str)
    {
        debug!("Using timezone from TZ environment variable: {}", tz_str);
        return tz;
    }

    match iana_time_zone::get_timezone() {
        Ok(tz_str) => match Tz::from_str(&tz_str) {
            Ok(tz) => {
                debug!("Using system timezone from iana-time-zone: {}", tz_str);
                tz
            }
            Err(_) => {
                debug!(
                    "Could not parse timezone from iana-time-zone: '{}', falling back to UTC",
                    tz_str
                );
                Tz::UTC
            }
        },
        Err(e) => {
            debug!(
                "Could not detect local timezone via iana-time-zone: {:?}, falling back to UTC",
                e
            );
            Tz::UTC
        }
    }
}
