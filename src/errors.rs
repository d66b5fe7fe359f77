use thiserror::Error;

/// Error type for billing-cycle parsing, validation, and configuration.
#[derive(Debug, Error)]
pub enum BillingError {
    #[error("Invalid closing day: {0}")]
    InvalidClosingDay(String),
    #[error("Invalid billing month `{0}` (expected YYYY-MM)")]
    InvalidBillingMonth(String),
    #[error("Invalid rollover policy: {0}")]
    InvalidPolicy(String),
    #[error("Invalid format type: {0}")]
    InvalidFormat(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
