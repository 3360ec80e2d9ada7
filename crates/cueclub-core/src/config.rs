//! Club configuration
//!
//! Everything that varies between deployments: where the session API lives,
//! what an hour of table time costs, how many tables the floor has, and who
//! is operating the counter.

use tracing::debug;

use crate::error::{CueclubError, Result};
use crate::timezone::TimezoneConfig;
use crate::types::{RatePolicy, StaffInfo};

/// Session API location used when none is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Number of tables on the floor when none is configured
pub const DEFAULT_TABLE_COUNT: u32 = 3;

/// Resolved configuration for one run
#[derive(Debug, Clone)]
pub struct ClubConfig {
    /// Base URL of the session API, without trailing slash
    pub api_base_url: String,
    /// Pricing applied to ended sessions
    pub rate: RatePolicy,
    /// Tables are numbered `1..=table_count`
    pub table_count: u32,
    /// Staff identity attached to start/end requests
    pub staff: StaffInfo,
    /// Timezone for reading and displaying session times
    pub timezone: TimezoneConfig,
}

impl ClubConfig {
    /// Build and validate a configuration
    ///
    /// # Errors
    ///
    /// - `InvalidRate` if the hourly rate is negative or not finite
    /// - `Config` if the base URL is blank or the table count is zero
    pub fn new(
        api_base_url: &str,
        hourly_rate: f64,
        table_count: u32,
        staff: StaffInfo,
        timezone: TimezoneConfig,
    ) -> Result<Self> {
        let api_base_url = api_base_url.trim().trim_end_matches('/');
        if api_base_url.is_empty() {
            return Err(CueclubError::Config(
                "Session API base URL must not be empty".to_string(),
            ));
        }

        if !hourly_rate.is_finite() || hourly_rate < 0.0 {
            return Err(CueclubError::InvalidRate(format!(
                "{hourly_rate}. The hourly rate must be a non-negative amount"
            )));
        }

        if table_count == 0 {
            return Err(CueclubError::Config(
                "The club needs at least one table".to_string(),
            ));
        }

        debug!(
            "Club config: api={}, hourly_rate={}, tables={}, timezone={}",
            api_base_url,
            hourly_rate,
            table_count,
            timezone.display_name()
        );

        Ok(Self {
            api_base_url: api_base_url.to_string(),
            rate: RatePolicy::new(hourly_rate),
            table_count,
            staff,
            timezone,
        })
    }
}

impl Default for ClubConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            rate: RatePolicy::default(),
            table_count: DEFAULT_TABLE_COUNT,
            staff: StaffInfo::default(),
            timezone: TimezoneConfig::default(),
        }
    }
}
