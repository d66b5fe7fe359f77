use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Returns `true` for Monday through Friday. No holiday calendar is applied.
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Moves a weekend date back to the preceding Friday; weekdays pass through.
pub fn adjust_to_business_day(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date - Duration::days(1),
        Weekday::Sun => date - Duration::days(2),
        _ => date,
    }
}
