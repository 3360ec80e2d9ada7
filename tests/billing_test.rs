//! Billing behaviour through the public API

mod common;

use common::at;
use cueclub::{
    billing::{BillCalculator, bill_calculator::FLAT_RATE_MAX_MINUTES},
    types::{BillBreakdown, RatePolicy, TimeInterval},
};

fn bill(start: (u32, u32, u32), end: (u32, u32, u32)) -> BillBreakdown {
    BillCalculator::compute_bill(
        Some(at(start.0, start.1, start.2)),
        Some(at(end.0, end.1, end.2)),
        &RatePolicy::default(),
    )
}

fn assert_cents(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.005,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_short_game_costs_one_hour() {
    let breakdown = bill((18, 0, 0), (18, 30, 0));
    assert_eq!(breakdown.total_minutes, 30);
    assert_eq!(breakdown.total_bill, 950.0);
    assert_eq!(breakdown.initial_charge, 950.0);
    assert_eq!(breakdown.additional_charge, 0.0);
    assert_eq!(breakdown.additional_minutes, 0);
}

#[test]
fn test_grace_period_up_to_63_minutes() {
    for minutes in [60, 61, 62, FLAT_RATE_MAX_MINUTES as u32] {
        let breakdown = bill((18, 0, 0), (19, minutes - 60, 0));
        assert_eq!(breakdown.total_minutes, minutes as i64);
        assert_eq!(breakdown.total_bill, 950.0, "{minutes} minutes");
        assert_eq!(breakdown.additional_charge, 0.0);
    }
}

#[test]
fn test_64_minutes_bills_every_extra_minute() {
    let breakdown = bill((18, 0, 0), (19, 4, 0));
    assert_eq!(breakdown.total_minutes, 64);
    assert_eq!(breakdown.additional_minutes, 4);
    assert_eq!(breakdown.total_bill, 1013.33);
    assert_cents(breakdown.additional_charge, 63.33);
}

#[test]
fn test_multi_hour_games() {
    let breakdown = bill((18, 0, 0), (19, 30, 0));
    assert_eq!(breakdown.total_bill, 1425.0);
    assert_cents(breakdown.additional_charge, 475.0);

    let breakdown = bill((18, 0, 0), (20, 5, 0));
    assert_eq!(breakdown.total_minutes, 125);
    assert_eq!(breakdown.additional_minutes, 5);
    assert_eq!(breakdown.total_bill, 1979.17);

    let breakdown = bill((18, 0, 0), (21, 0, 0));
    assert_eq!(breakdown.total_minutes, 180);
    assert_eq!(breakdown.additional_minutes, 0);
    assert_eq!(breakdown.total_bill, 2850.0);
}

#[test]
fn test_seconds_are_dropped_before_billing() {
    // 18:00 to 19:03 once cut to the minute
    let breakdown = bill((18, 0, 59), (19, 3, 1));
    assert_eq!(breakdown.total_minutes, 63);
    assert_eq!(breakdown.total_bill, 950.0);

    let breakdown = bill((18, 0, 0), (19, 4, 30));
    assert_eq!(breakdown.total_minutes, 64);
    assert_eq!(breakdown.total_bill, 1013.33);
}

#[test]
fn test_degenerate_intervals_bill_nothing() {
    let rate = RatePolicy::default();

    assert!(bill((18, 0, 10), (18, 0, 50)).is_zero());
    assert!(bill((19, 0, 0), (18, 0, 0)).is_zero());
    assert!(BillCalculator::compute_bill(None, Some(at(18, 0, 0)), &rate).is_zero());
    assert!(BillCalculator::compute_bill(Some(at(18, 0, 0)), None, &rate).is_zero());
    assert_eq!(
        BillCalculator::compute_bill(None, None, &rate),
        BillBreakdown::zero()
    );
}

#[test]
fn test_calculator_uses_its_rate() {
    let calculator = BillCalculator::new(RatePolicy::new(600.0));
    let breakdown = calculator.compute(&TimeInterval::between(at(10, 0, 0), at(11, 30, 0)));
    assert_eq!(breakdown.initial_charge, 600.0);
    assert_eq!(breakdown.total_bill, 900.0);
}

#[test]
fn test_breakdown_serializes_camel_case() {
    let json = serde_json::to_value(bill((18, 0, 0), (19, 4, 0))).unwrap();
    assert_eq!(json["totalMinutes"], 64);
    assert_eq!(json["additionalMinutes"], 4);
    assert_eq!(json["initialCharge"], 950.0);
    assert_eq!(json["totalBill"], 1013.33);
}
