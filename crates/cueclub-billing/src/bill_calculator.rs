//! Bill calculator module for computing session charges
//!
//! A session is billed on whole minutes of wall-clock time:
//!
//! - up to 63 minutes costs exactly one hourly block (the 61st to 63rd
//!   minutes are a grace window),
//! - beyond that, every completed hour costs the hourly rate and the
//!   remaining minutes cost `hourly_rate / 60` each.
//!
//! The total is rounded to 2 decimal places. Missing, empty, or inverted
//! intervals bill nothing.
//!
//! # Examples
//!
//! ```
//! use cueclub_billing::BillCalculator;
//! use cueclub_core::types::RatePolicy;
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let start = Utc.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap();
//! let end = start + Duration::minutes(64);
//!
//! let bill = BillCalculator::compute_bill(Some(start), Some(end), &RatePolicy::new(950.0));
//! assert_eq!(bill.total_minutes, 64);
//! assert_eq!(bill.additional_minutes, 4);
//! assert_eq!(bill.total_bill, 1013.33);
//! ```

use chrono::{DateTime, Timelike, Utc};
use cueclub_core::types::{BillBreakdown, RatePolicy, TimeInterval};
use tracing::debug;

/// Longest session billed as a single hourly block
pub const FLAT_RATE_MAX_MINUTES: i64 = 63;

const MINUTES_PER_HOUR: i64 = 60;
const MILLIS_PER_MINUTE: i64 = 60_000;

/// Computes session bills under a fixed rate policy
#[derive(Debug, Clone, Copy, Default)]
pub struct BillCalculator {
    rate: RatePolicy,
}

impl BillCalculator {
    /// Create a calculator for the given rate policy
    pub fn new(rate: RatePolicy) -> Self {
        Self { rate }
    }

    /// The rate policy in use
    pub fn rate(&self) -> &RatePolicy {
        &self.rate
    }

    /// Bill a session interval
    pub fn compute(&self, interval: &TimeInterval) -> BillBreakdown {
        Self::compute_bill(interval.start, interval.end, &self.rate)
    }

    /// Bill the time between `start` and `end`
    ///
    /// This is a pure function and never fails: a missing endpoint, or an
    /// end that is not after the start once both are cut to the minute,
    /// yields [`BillBreakdown::zero`].
    pub fn compute_bill(
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        rate: &RatePolicy,
    ) -> BillBreakdown {
        let (Some(start), Some(end)) = (start, end) else {
            return BillBreakdown::zero();
        };

        let duration_in_minutes = elapsed_minutes(start, end);
        if duration_in_minutes <= 0 {
            return BillBreakdown::zero();
        }

        let hourly_rate = rate.hourly_rate;
        let (raw_total, additional_minutes) = if duration_in_minutes <= FLAT_RATE_MAX_MINUTES {
            (hourly_rate, 0)
        } else {
            let full_hours = duration_in_minutes / MINUTES_PER_HOUR;
            let additional_minutes = duration_in_minutes % MINUTES_PER_HOUR;
            (
                full_hours as f64 * hourly_rate
                    + additional_minutes as f64 * rate.per_minute_rate(),
                additional_minutes,
            )
        };

        let total_bill = round_to_cents(raw_total);
        let breakdown = BillBreakdown {
            initial_charge: hourly_rate,
            additional_charge: (total_bill - hourly_rate).max(0.0),
            total_bill,
            total_minutes: duration_in_minutes,
            additional_minutes,
        };

        debug!(
            "Billed {} minutes ({} additional): {:.2}",
            breakdown.total_minutes, breakdown.additional_minutes, breakdown.total_bill
        );

        breakdown
    }
}

/// Drop the seconds and sub-second part of a timestamp
pub fn truncate_to_minute(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(ts)
}

/// Whole minutes from `start` to `end`, after cutting both to the minute
///
/// Rounded up; negative when `end` precedes `start`.
pub fn elapsed_minutes(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let millis = (truncate_to_minute(end) - truncate_to_minute(start)).num_milliseconds();
    let minutes = millis.div_euclid(MILLIS_PER_MINUTE);
    if millis.rem_euclid(MILLIS_PER_MINUTE) > 0 {
        minutes + 1
    } else {
        minutes
    }
}

/// Round half away from zero to 2 decimal places
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
