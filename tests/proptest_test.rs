//! Property-based tests for cueclub using proptest

mod common;

use chrono::{DateTime, Duration, TimeZone, Utc};
use common::{MockSessionService, session, test_config};
use cueclub::{
    billing::{BillCalculator, bill_calculator::FLAT_RATE_MAX_MINUTES},
    board::TableBoard,
    dashboard::Dashboard,
    types::{ActiveSession, RatePolicy, TableId},
};
use proptest::prelude::*;

// Strategies for generating test data

prop_compose! {
    fn arb_timestamp()(
        secs in 1577836800i64..1735689600i64, // 2020-01-01 to 2025-01-01
        nanos in 0u32..1_000_000_000u32,
    ) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, nanos).unwrap()
    }
}

prop_compose! {
    fn arb_rate()(
        hourly in prop::sample::select(vec![600.0, 950.0, 1200.0, 1500.0]),
    ) -> RatePolicy {
        RatePolicy::new(hourly)
    }
}

/// Whole minutes between two minute-aligned times
fn aligned(start: DateTime<Utc>, minutes: i64) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = start - Duration::nanoseconds(start.timestamp_subsec_nanos() as i64);
    let start = start - Duration::seconds(start.timestamp() % 60);
    (start, start + Duration::minutes(minutes))
}

fn has_at_most_two_decimals(value: f64) -> bool {
    ((value * 100.0).round() - value * 100.0).abs() < 1e-6
}

proptest! {
    #[test]
    fn test_positive_duration_costs_at_least_one_hour(
        start in arb_timestamp(),
        minutes in 1i64..1440,
        rate in arb_rate(),
    ) {
        let (start, end) = aligned(start, minutes);
        let breakdown = BillCalculator::compute_bill(Some(start), Some(end), &rate);

        prop_assert_eq!(breakdown.total_minutes, minutes);
        prop_assert_eq!(breakdown.initial_charge, rate.hourly_rate);
        prop_assert!(breakdown.total_bill >= rate.hourly_rate);
        prop_assert!(breakdown.additional_charge >= 0.0);
    }

    #[test]
    fn test_grace_period_is_flat(
        start in arb_timestamp(),
        minutes in 1i64..=FLAT_RATE_MAX_MINUTES,
        rate in arb_rate(),
    ) {
        let (start, end) = aligned(start, minutes);
        let breakdown = BillCalculator::compute_bill(Some(start), Some(end), &rate);

        prop_assert_eq!(breakdown.total_bill, rate.hourly_rate);
        prop_assert_eq!(breakdown.additional_charge, 0.0);
        prop_assert_eq!(breakdown.additional_minutes, 0);
    }

    #[test]
    fn test_bill_never_decreases(
        start in arb_timestamp(),
        minutes in 1i64..1440,
        extra in 0i64..240,
        rate in arb_rate(),
    ) {
        let (start, end) = aligned(start, minutes);
        let shorter = BillCalculator::compute_bill(Some(start), Some(end), &rate);
        let longer = BillCalculator::compute_bill(
            Some(start),
            Some(end + Duration::minutes(extra)),
            &rate,
        );

        prop_assert!(longer.total_bill >= shorter.total_bill);
    }

    #[test]
    fn test_total_rounded_to_cents(
        start in arb_timestamp(),
        end in arb_timestamp(),
        rate in arb_rate(),
    ) {
        let breakdown = BillCalculator::compute_bill(Some(start), Some(end), &rate);
        prop_assert!(has_at_most_two_decimals(breakdown.total_bill));
    }

    #[test]
    fn test_long_games_split_hours_and_minutes(
        start in arb_timestamp(),
        minutes in (FLAT_RATE_MAX_MINUTES + 1)..1440,
    ) {
        let rate = RatePolicy::default();
        let (start, end) = aligned(start, minutes);
        let breakdown = BillCalculator::compute_bill(Some(start), Some(end), &rate);

        let expected = (minutes / 60) as f64 * rate.hourly_rate
            + (minutes % 60) as f64 * rate.per_minute_rate();
        prop_assert!((breakdown.total_bill - expected).abs() <= 0.005 + 1e-9);
        prop_assert_eq!(breakdown.additional_minutes, minutes % 60);
        prop_assert!(
            (breakdown.additional_charge - (breakdown.total_bill - rate.hourly_rate)).abs() < 1e-9
        );
    }

    #[test]
    fn test_seconds_within_the_minute_do_not_matter(
        start in arb_timestamp(),
        minutes in 0i64..600,
        start_offset in 0i64..60_000,
        end_offset in 0i64..60_000,
    ) {
        let rate = RatePolicy::default();
        let (start, end) = aligned(start, minutes);
        let exact = BillCalculator::compute_bill(Some(start), Some(end), &rate);
        let noisy = BillCalculator::compute_bill(
            Some(start + Duration::milliseconds(start_offset)),
            Some(end + Duration::milliseconds(end_offset)),
            &rate,
        );

        prop_assert_eq!(exact, noisy);
    }

    #[test]
    fn test_missing_or_reversed_times_bill_nothing(
        start in arb_timestamp(),
        back in 0i64..10_000,
    ) {
        let rate = RatePolicy::default();
        prop_assert!(BillCalculator::compute_bill(None, Some(start), &rate).is_zero());
        prop_assert!(BillCalculator::compute_bill(Some(start), None, &rate).is_zero());

        let (end, _) = aligned(start, 0);
        let earlier = end - Duration::minutes(back);
        prop_assert!(BillCalculator::compute_bill(Some(end), Some(earlier), &rate).is_zero());
    }

    #[test]
    fn test_board_always_has_every_table(
        table_count in 1u32..12,
        ids in prop::collection::vec(0u32..16, 0..10),
    ) {
        let sessions: Vec<ActiveSession> = ids
            .iter()
            .map(|id| session(*id, "player", None))
            .collect();
        let board = TableBoard::from_sessions(&sessions, table_count);

        prop_assert_eq!(board.tables().len(), table_count as usize);
        prop_assert!(board.occupied_count() <= sessions.len());
        for (index, table) in board.tables().iter().enumerate() {
            prop_assert_eq!(table.id, TableId::new(index as u32 + 1));
        }
    }

    #[test]
    fn test_receipt_matches_calculator(
        start in arb_timestamp(),
        minutes in 0i64..600,
    ) {
        let end = start + Duration::minutes(minutes);
        let service = MockSessionService::with_active(vec![session(1, "player", Some(start))]);
        let dashboard = Dashboard::new(service, test_config());

        let receipt = tokio_test::block_on(dashboard.prepare_end(TableId::new(1), end)).unwrap();
        let expected = BillCalculator::compute_bill(Some(start), Some(end), &dashboard.config().rate);
        prop_assert_eq!(receipt.breakdown, expected);
    }
}
