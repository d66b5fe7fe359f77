use chrono::{Days, NaiveDate};

use crate::cycle::{closing_date, BillingMonth, ClosingDay, ClosingDayOverflow};

pub const DEFAULT_DAYS_AFTER_CLOSING: u32 = 10;

/// Due date of `billing_month`: ten days after its nominal closing date.
pub fn calculate_due_date(billing_month: BillingMonth, closing_day: ClosingDay) -> NaiveDate {
    calculate_due_date_with(
        billing_month,
        closing_day,
        DEFAULT_DAYS_AFTER_CLOSING,
        ClosingDayOverflow::default(),
    )
}

/// Due date as a fixed offset from the nominal closing date.
///
/// The closing date is deliberately not weekend-adjusted here, and neither is
/// the resulting due date. Offsets past the end of chrono's calendar saturate
/// at `NaiveDate::MAX`.
pub fn calculate_due_date_with(
    billing_month: BillingMonth,
    closing_day: ClosingDay,
    days_after_closing: u32,
    overflow: ClosingDayOverflow,
) -> NaiveDate {
    closing_date(billing_month, closing_day, overflow)
        .checked_add_days(Days::new(u64::from(days_after_closing)))
        .unwrap_or(NaiveDate::MAX)
}
