use chrono::NaiveDate;

use crate::cycle::{
    adjust_to_business_day, closing_date, BillingMonth, ClosingDay, ClosingDayOverflow,
    RolloverPolicy,
};

/// Resolves the bill a transaction dated `tx_date` belongs to, using the
/// default roll-over behavior for closing days past the end of the month.
///
/// A transaction on or before the weekend-adjusted closing date of its own
/// month lands on that month's bill; anything later lands on the next one.
pub fn derive_billing_month(
    tx_date: NaiveDate,
    closing_day: ClosingDay,
    policy: RolloverPolicy,
) -> BillingMonth {
    derive_billing_month_with(tx_date, closing_day, policy, ClosingDayOverflow::default())
}

/// Same as [`derive_billing_month`] with an explicit overflow mode.
pub fn derive_billing_month_with(
    tx_date: NaiveDate,
    closing_day: ClosingDay,
    policy: RolloverPolicy,
    overflow: ClosingDayOverflow,
) -> BillingMonth {
    let current = BillingMonth::of(tx_date);
    let adjusted_closing = adjust_to_business_day(closing_date(current, closing_day, overflow));

    // The adjusted closing date belongs to the current bill under both
    // policies: NEXT only moves later purchases on, PREVIOUS keeps purchases
    // up to and including the closing.
    let rolls_over = match policy {
        RolloverPolicy::Next | RolloverPolicy::Previous => tx_date > adjusted_closing,
    };

    if rolls_over {
        current.next()
    } else {
        current
    }
}
