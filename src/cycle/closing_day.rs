use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::cycle::BillingMonth;
use crate::errors::BillingError;

pub const MIN_CLOSING_DAY: u32 = 1;
pub const MAX_CLOSING_DAY: u32 = 31;

/// Returns `true` when `value` is a whole number in `[1, 31]`.
///
/// Accepts `f64` so raw form or JSON input can be checked before it is
/// narrowed to an integer; NaN and infinities are rejected.
pub fn is_valid_closing_day(value: f64) -> bool {
    value.is_finite()
        && value.fract() == 0.0
        && value >= MIN_CLOSING_DAY as f64
        && value <= MAX_CLOSING_DAY as f64
}

/// Nominal day of the month on which a card statement closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ClosingDay(u32);

impl ClosingDay {
    pub fn new(day: u32) -> Result<Self, BillingError> {
        if (MIN_CLOSING_DAY..=MAX_CLOSING_DAY).contains(&day) {
            Ok(Self(day))
        } else {
            Err(BillingError::InvalidClosingDay(format!(
                "{day} is outside {MIN_CLOSING_DAY}..={MAX_CLOSING_DAY}"
            )))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for ClosingDay {
    type Error = BillingError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<f64> for ClosingDay {
    type Error = BillingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if is_valid_closing_day(value) {
            Ok(Self(value as u32))
        } else {
            Err(BillingError::InvalidClosingDay(value.to_string()))
        }
    }
}

impl From<ClosingDay> for u32 {
    fn from(value: ClosingDay) -> Self {
        value.0
    }
}

impl fmt::Display for ClosingDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What to do when the closing day does not exist in a month (31 in April,
/// 30 in February, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosingDayOverflow {
    /// Carry the excess days into the following month: day 31 of April is May 1.
    #[default]
    RollOver,
    /// Use the last day of the month instead.
    Clamp,
}

/// Builds the nominal (unadjusted) closing date of `month`.
pub fn closing_date(
    month: BillingMonth,
    closing_day: ClosingDay,
    overflow: ClosingDayOverflow,
) -> NaiveDate {
    let last_day = month.days_in_month();
    let day = match overflow {
        ClosingDayOverflow::RollOver => closing_day.get(),
        ClosingDayOverflow::Clamp => closing_day.get().min(last_day),
    };
    if day > last_day {
        tracing::debug!(
            %month,
            closing_day = closing_day.get(),
            "closing day exceeds month length; rolling into the next month"
        );
    }
    month
        .first_day()
        .checked_add_days(Days::new(u64::from(day - 1)))
        .unwrap_or(NaiveDate::MAX)
}
