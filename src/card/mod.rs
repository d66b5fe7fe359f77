//! Card-level billing settings and batch assignment of expenses to bills.

pub mod profile;
pub mod service;

pub use profile::{BillingStatement, CardBillingProfile};
pub use service::{BillingGroup, BillingService};
