use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::BillingConfig;
use crate::cycle::{
    adjust_to_business_day, calculate_due_date_with, closing_date, derive_billing_month_with,
    BillingMonth, ClosingDay, ClosingDayOverflow, RolloverPolicy, DEFAULT_DAYS_AFTER_CLOSING,
};

fn default_days_after_closing() -> u32 {
    DEFAULT_DAYS_AFTER_CLOSING
}

/// Billing settings carried by a credit card (an expense "origin").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardBillingProfile {
    pub closing_day: ClosingDay,
    #[serde(rename = "billingRolloverPolicy", default)]
    pub rollover_policy: RolloverPolicy,
    #[serde(default = "default_days_after_closing")]
    pub days_after_closing: u32,
    #[serde(default)]
    pub overflow: ClosingDayOverflow,
}

impl CardBillingProfile {
    pub fn new(closing_day: ClosingDay) -> Self {
        Self {
            closing_day,
            rollover_policy: RolloverPolicy::default(),
            days_after_closing: DEFAULT_DAYS_AFTER_CLOSING,
            overflow: ClosingDayOverflow::default(),
        }
    }

    pub fn from_config(closing_day: ClosingDay, config: &BillingConfig) -> Self {
        Self {
            closing_day,
            rollover_policy: config.default_policy,
            days_after_closing: config.days_after_closing,
            overflow: config.overflow,
        }
    }

    pub fn with_policy(mut self, policy: RolloverPolicy) -> Self {
        self.rollover_policy = policy;
        self
    }

    pub fn with_overflow(mut self, overflow: ClosingDayOverflow) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn billing_month_for(&self, date: NaiveDate) -> BillingMonth {
        derive_billing_month_with(date, self.closing_day, self.rollover_policy, self.overflow)
    }

    /// Weekend-adjusted closing date of `month`; the last purchase date the
    /// bill normally accepts.
    pub fn closing_date_for(&self, month: BillingMonth) -> NaiveDate {
        adjust_to_business_day(closing_date(month, self.closing_day, self.overflow))
    }

    pub fn due_date_for(&self, month: BillingMonth) -> NaiveDate {
        calculate_due_date_with(month, self.closing_day, self.days_after_closing, self.overflow)
    }

    /// The purchase window of `month`.
    ///
    /// A bill collects the tail of the previous calendar month after its
    /// closing plus the head of its own month up to its closing. Closings
    /// that overflow or are moved back across a month boundary are clipped
    /// to those two months.
    pub fn statement_for(&self, month: BillingMonth) -> BillingStatement {
        let previous = month.previous();
        let one_day = Duration::days(1);

        let opens_on = (self.closing_date_for(previous) + one_day)
            .max(previous.first_day())
            .min(month.first_day());
        let closes_on = self
            .closing_date_for(month)
            .min(month.last_day())
            .max(month.first_day() - one_day);

        BillingStatement {
            month,
            opens_on,
            closes_on,
            due_on: self.due_date_for(month),
        }
    }
}

/// Date range and due date of one bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingStatement {
    pub month: BillingMonth,
    pub opens_on: NaiveDate,
    pub closes_on: NaiveDate,
    pub due_on: NaiveDate,
}

impl BillingStatement {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.opens_on <= date && date <= self.closes_on
    }

    pub fn days(&self) -> i64 {
        (self.closes_on - self.opens_on).num_days() + 1
    }
}
