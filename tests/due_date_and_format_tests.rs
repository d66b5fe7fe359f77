use billing_core::{
    calculate_due_date, calculate_due_date_with, closing_date, format_billing_month,
    format_billing_month_with, month_names_for, BillingMonth, ClosingDay, ClosingDayOverflow,
    FormatType, MonthNames, MonthStyle,
};
use chrono::{Duration, NaiveDate};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn month(label: &str) -> BillingMonth {
    label.parse().expect("valid billing month")
}

#[test]
fn due_date_defaults_to_ten_days_after_closing() {
    assert_eq!(
        calculate_due_date(month("2025-11"), ClosingDay::new(9).unwrap()),
        ymd(2025, 11, 19)
    );
    assert_eq!(
        calculate_due_date(month("2025-12"), ClosingDay::new(25).unwrap()),
        ymd(2026, 1, 4)
    );
}

#[test]
fn due_date_never_precedes_closing() {
    for label in ["2024-02", "2025-02", "2025-04", "2025-12"] {
        for day in 1..=31 {
            let closing = ClosingDay::new(day).unwrap();
            for offset in [0, 1, 10, 25] {
                for overflow in [ClosingDayOverflow::RollOver, ClosingDayOverflow::Clamp] {
                    let closes = closing_date(month(label), closing, overflow);
                    let due = calculate_due_date_with(month(label), closing, offset, overflow);
                    assert!(due >= closes);
                    assert_eq!(due - closes, Duration::days(i64::from(offset)));
                }
            }
        }
    }
}

#[test]
fn overflowing_closing_day_rolls_into_next_month_by_default() {
    assert_eq!(
        calculate_due_date(month("2025-02"), ClosingDay::new(31).unwrap()),
        ymd(2025, 3, 13)
    );
}

#[test]
fn formats_portuguese_labels_by_default_style() {
    assert_eq!(
        format_billing_month(month("2025-11"), "pt-BR", FormatType::default()),
        "Novembro 2025"
    );
    assert_eq!(
        format_billing_month(month("2025-11"), "pt-BR", FormatType::Short),
        "Nov/25"
    );
    assert_eq!(
        format_billing_month(month("2026-03"), "pt-BR", FormatType::Long),
        "Março 2026"
    );
}

#[test]
fn formats_other_locales() {
    assert_eq!(
        format_billing_month(month("2025-01"), "en-US", FormatType::Long),
        "January 2025"
    );
    assert_eq!(
        format_billing_month(month("2025-09"), "es", FormatType::Short),
        "Sept/25"
    );
    assert_eq!(
        format_billing_month(month("2025-08"), "fr-FR", FormatType::Long),
        "Août 2025"
    );
    assert_eq!(
        format_billing_month(month("2025-10"), "de-AT", FormatType::Short),
        "Okt/25"
    );
}

#[test]
fn short_year_is_zero_padded() {
    assert_eq!(
        format_billing_month(month("2005-05"), "en", FormatType::Short),
        "May/05"
    );
}

#[test]
fn unknown_locale_falls_back_to_portuguese() {
    assert_eq!(
        format_billing_month(month("2025-12"), "zz-ZZ", FormatType::Long),
        "Dezembro 2025"
    );
}

#[test]
fn locale_tables_are_usable_from_the_crate_root() {
    let names = month_names_for("de_at");
    assert_eq!(names.language_tag(), "de-DE");
    assert_eq!(names.month_name(3, MonthStyle::Long), "März");
    assert_eq!(names.month_name(3, MonthStyle::Short), "Mär");
    assert_eq!(names.month_name(13, MonthStyle::Short), "");
    assert_eq!(
        format_billing_month_with(month("2025-03"), names, FormatType::Short),
        "Mär/25"
    );
}
