use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::BillingError;

/// A bill identified by its calendar year and month, rendered as `YYYY-MM`.
///
/// The label is the grouping key for transactions and the join key for due
/// dates, so years are kept within `0..=9999` and `Display` always produces
/// exactly seven characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BillingMonth {
    year: i32,
    month: u32,
}

const MIN_YEAR: i32 = 0;
const MAX_YEAR: i32 = 9999;

impl BillingMonth {
    pub const MIN: BillingMonth = BillingMonth {
        year: MIN_YEAR,
        month: 1,
    };
    pub const MAX: BillingMonth = BillingMonth {
        year: MAX_YEAR,
        month: 12,
    };

    pub fn new(year: i32, month: u32) -> Result<Self, BillingError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) || !(1..=12).contains(&month) {
            return Err(BillingError::InvalidBillingMonth(format!(
                "{year:04}-{month:02}"
            )));
        }
        Ok(Self { year, month })
    }

    /// The calendar month containing `date`, saturated to
    /// [`BillingMonth::MIN`]..=[`BillingMonth::MAX`] for dates outside
    /// years 0..=9999.
    pub fn of(date: NaiveDate) -> Self {
        if date.year() < MIN_YEAR {
            Self::MIN
        } else if date.year() > MAX_YEAR {
            Self::MAX
        } else {
            Self {
                year: date.year(),
                month: date.month(),
            }
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    /// The following month, or `None` after [`BillingMonth::MAX`].
    pub fn checked_next(self) -> Option<Self> {
        match (self.year, self.month) {
            (MAX_YEAR, 12) => None,
            (year, 12) => Some(Self {
                year: year + 1,
                month: 1,
            }),
            (year, month) => Some(Self {
                year,
                month: month + 1,
            }),
        }
    }

    /// The preceding month, or `None` before [`BillingMonth::MIN`].
    pub fn checked_previous(self) -> Option<Self> {
        match (self.year, self.month) {
            (MIN_YEAR, 1) => None,
            (year, 1) => Some(Self {
                year: year - 1,
                month: 12,
            }),
            (year, month) => Some(Self {
                year,
                month: month - 1,
            }),
        }
    }

    /// The following month, saturating at [`BillingMonth::MAX`].
    pub fn next(self) -> Self {
        self.checked_next().unwrap_or(self)
    }

    /// The preceding month, saturating at [`BillingMonth::MIN`].
    pub fn previous(self) -> Self {
        self.checked_previous().unwrap_or(self)
    }

    pub fn first_day(self) -> NaiveDate {
        // Years 0..=9999 are always inside chrono's range.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn days_in_month(self) -> u32 {
        match self.month {
            4 | 6 | 9 | 11 => 30,
            2 if NaiveDate::from_ymd_opt(self.year, 2, 29).is_some() => 29,
            2 => 28,
            _ => 31,
        }
    }

    pub fn last_day(self) -> NaiveDate {
        self.first_day()
            .with_day(self.days_in_month())
            .unwrap_or_else(|| self.first_day())
    }
}

impl fmt::Display for BillingMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for BillingMonth {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BillingError::InvalidBillingMonth(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4
            || month.len() != 2
            || !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl TryFrom<String> for BillingMonth {
    type Error = BillingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BillingMonth> for String {
    fn from(value: BillingMonth) -> Self {
        value.to_string()
    }
}

impl From<NaiveDate> for BillingMonth {
    fn from(date: NaiveDate) -> Self {
        Self::of(date)
    }
}
