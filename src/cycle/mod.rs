//! Billing-cycle calendar arithmetic: weekend adjustment, closing-day
//! validation, bill resolution, and due dates.

pub mod billing_month;
pub mod business_day;
pub mod closing_day;
pub mod due_date;
pub mod policy;
pub mod resolver;

pub use billing_month::BillingMonth;
pub use business_day::{adjust_to_business_day, is_business_day};
pub use closing_day::{closing_date, is_valid_closing_day, ClosingDay, ClosingDayOverflow};
pub use due_date::{calculate_due_date, calculate_due_date_with, DEFAULT_DAYS_AFTER_CLOSING};
pub use policy::RolloverPolicy;
pub use resolver::{derive_billing_month, derive_billing_month_with};
