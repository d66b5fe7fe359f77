use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::BillingError;

/// Direction a weekend closing date was moved, as configured on the card.
///
/// Both variants assign a transaction made on the adjusted closing date to
/// the current bill; the variant is carried so callers can persist the card's
/// configuration as `"NEXT"` / `"PREVIOUS"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RolloverPolicy {
    #[default]
    Next,
    Previous,
}

impl RolloverPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            RolloverPolicy::Next => "NEXT",
            RolloverPolicy::Previous => "PREVIOUS",
        }
    }
}

impl fmt::Display for RolloverPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RolloverPolicy {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NEXT" => Ok(RolloverPolicy::Next),
            "PREVIOUS" => Ok(RolloverPolicy::Previous),
            other => Err(BillingError::InvalidPolicy(other.to_string())),
        }
    }
}
