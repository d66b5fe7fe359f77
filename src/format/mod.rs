//! Locale-aware display labels for billing months.

pub mod locales;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::cycle::BillingMonth;
use crate::errors::BillingError;

pub use locales::{month_names_for, MonthTable, DEFAULT_LOCALE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStyle {
    Long,
    Short,
}

/// Source of localized month names.
pub trait MonthNames {
    fn language_tag(&self) -> &str;

    /// Name of `month` (1-12); implementations return `""` outside that range.
    fn month_name(&self, month: u32, style: MonthStyle) -> &str;
}

/// `Long` renders "Novembro 2025", `Short` renders "Nov/25".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatType {
    #[default]
    Long,
    Short,
}

impl FormatType {
    pub fn month_style(self) -> MonthStyle {
        match self {
            FormatType::Long => MonthStyle::Long,
            FormatType::Short => MonthStyle::Short,
        }
    }
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FormatType::Long => "long",
            FormatType::Short => "short",
        })
    }
}

impl FromStr for FormatType {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "long" => Ok(FormatType::Long),
            "short" => Ok(FormatType::Short),
            other => Err(BillingError::InvalidFormat(other.to_string())),
        }
    }
}

/// Formats `billing_month` with the built-in month names for `locale`.
pub fn format_billing_month(
    billing_month: BillingMonth,
    locale: &str,
    format_type: FormatType,
) -> String {
    format_billing_month_with(billing_month, month_names_for(locale), format_type)
}

pub fn format_billing_month_with(
    billing_month: BillingMonth,
    names: &dyn MonthNames,
    format_type: FormatType,
) -> String {
    let name = capitalize(names.month_name(billing_month.month(), format_type.month_style()));
    match format_type {
        FormatType::Long => format!("{} {:04}", name, billing_month.year()),
        FormatType::Short => format!("{}/{:02}", name, billing_month.year().rem_euclid(100)),
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
