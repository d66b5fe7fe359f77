#![doc(test(attr(deny(warnings))))]

//! Billing Core resolves which credit-card bill a transaction belongs to,
//! when that bill is due, and how its label reads for a given locale.

pub mod card;
pub mod config;
pub mod cycle;
pub mod errors;
pub mod format;
pub mod utils;

pub use chrono::NaiveDate;

pub use card::{BillingGroup, BillingService, BillingStatement, CardBillingProfile};
pub use cycle::{
    adjust_to_business_day, calculate_due_date, calculate_due_date_with, closing_date,
    derive_billing_month, derive_billing_month_with, is_business_day, is_valid_closing_day,
    BillingMonth, ClosingDay, ClosingDayOverflow, RolloverPolicy, DEFAULT_DAYS_AFTER_CLOSING,
};
pub use errors::BillingError;
pub use format::{
    format_billing_month, format_billing_month_with, month_names_for, FormatType, MonthNames,
    MonthStyle,
};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Billing Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
