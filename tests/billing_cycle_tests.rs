use billing_core::{
    adjust_to_business_day, derive_billing_month, is_business_day, is_valid_closing_day,
    BillingMonth, ClosingDay, RolloverPolicy,
};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn closing(day: u32) -> ClosingDay {
    ClosingDay::new(day).expect("valid closing day")
}

#[test]
fn adjusts_weekend_dates_to_friday() {
    assert_eq!(adjust_to_business_day(ymd(2025, 11, 6)), ymd(2025, 11, 6));
    assert_eq!(adjust_to_business_day(ymd(2025, 11, 8)), ymd(2025, 11, 7));
    assert_eq!(adjust_to_business_day(ymd(2025, 11, 9)), ymd(2025, 11, 7));
    assert_eq!(ymd(2025, 11, 7).weekday(), Weekday::Fri);
}

#[test]
fn adjusted_dates_are_always_business_days() {
    let start = ymd(2020, 1, 1);
    for offset in 0..(366 * 6) {
        let date = start + Duration::days(offset);
        let adjusted = adjust_to_business_day(date);
        assert!(is_business_day(adjusted));
        assert!(adjusted <= date);
        assert!((date - adjusted).num_days() <= 2);
        if is_business_day(date) {
            assert_eq!(adjusted, date);
        }
    }
}

#[test]
fn closing_day_validation_range() {
    assert!(is_valid_closing_day(1.0));
    assert!(is_valid_closing_day(31.0));
    assert!(!is_valid_closing_day(0.0));
    assert!(!is_valid_closing_day(32.0));
    assert!(!is_valid_closing_day(7.5));
    assert!(!is_valid_closing_day(-1.0));
}

#[test]
fn resolves_source_scenarios() {
    let cases = [
        (ymd(2025, 11, 5), 9, RolloverPolicy::Next, "2025-11"),
        (ymd(2025, 11, 10), 9, RolloverPolicy::Next, "2025-12"),
        (ymd(2025, 11, 7), 9, RolloverPolicy::Previous, "2025-11"),
        (ymd(2025, 11, 8), 9, RolloverPolicy::Previous, "2025-12"),
        (ymd(2025, 12, 15), 10, RolloverPolicy::Next, "2026-01"),
    ];
    for (date, day, policy, expected) in cases {
        assert_eq!(
            derive_billing_month(date, closing(day), policy).to_string(),
            expected,
            "{date} closing {day} {policy}"
        );
    }
}

#[test]
fn boundary_is_inclusive_for_both_policies() {
    for policy in [RolloverPolicy::Next, RolloverPolicy::Previous] {
        for day in 1..=28 {
            let nominal = ymd(2025, 6, day);
            let adjusted = adjust_to_business_day(nominal);
            if adjusted.month() != 6 {
                continue;
            }
            assert_eq!(
                derive_billing_month(adjusted, closing(day), policy).to_string(),
                "2025-06"
            );
            assert_eq!(
                derive_billing_month(adjusted + Duration::days(1), closing(day), policy)
                    .to_string(),
                "2025-07"
            );
        }
    }
}

#[test]
fn resolution_is_deterministic() {
    let date = ymd(2025, 3, 14);
    let first = derive_billing_month(date, closing(12), RolloverPolicy::default());
    for _ in 0..10 {
        assert_eq!(
            derive_billing_month(date, closing(12), RolloverPolicy::default()),
            first
        );
    }
}

#[test]
fn result_is_current_or_next_month() {
    let start = ymd(2024, 1, 1);
    for offset in 0..731 {
        let date = start + Duration::days(offset);
        let current = BillingMonth::of(date);
        for day in [1, 5, 15, 28, 29, 30, 31] {
            let month = derive_billing_month(date, closing(day), RolloverPolicy::Next);
            assert!(month == current || month == current.next(), "{date} day {day}");
        }
    }
}

#[test]
fn december_after_closing_rolls_to_january() {
    for day in [1, 10, 20] {
        let month = derive_billing_month(ymd(2030, 12, 31), closing(day), RolloverPolicy::Next);
        assert_eq!(month.to_string(), "2031-01");
    }
}

#[test]
fn labels_are_always_seven_characters() {
    let start = ymd(2025, 1, 1);
    for offset in (0..365).step_by(7) {
        let label =
            derive_billing_month(start + Duration::days(offset), closing(15), RolloverPolicy::Next)
                .to_string();
        assert_eq!(label.len(), 7);
        assert_eq!(&label[4..5], "-");
    }
}
