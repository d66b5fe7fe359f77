use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::card::{BillingStatement, CardBillingProfile};
use crate::cycle::BillingMonth;

/// A bill together with the items assigned to it.
#[derive(Debug, Clone, PartialEq)]
pub struct BillingGroup<T> {
    pub statement: BillingStatement,
    pub items: Vec<T>,
}

/// Batch helpers used when importing or re-labelling card expenses.
pub struct BillingService;

impl BillingService {
    /// Labels each date, preserving input order.
    pub fn assign(profile: &CardBillingProfile, dates: &[NaiveDate]) -> Vec<BillingMonth> {
        let labels: Vec<BillingMonth> = dates
            .iter()
            .map(|date| profile.billing_month_for(*date))
            .collect();
        tracing::debug!(count = labels.len(), closing_day = %profile.closing_day, "assigned billing months");
        labels
    }

    /// Buckets items by bill. Items keep their relative order inside a bucket.
    pub fn group_by_billing_month<T, I, F>(
        profile: &CardBillingProfile,
        items: I,
        date_of: F,
    ) -> BTreeMap<BillingMonth, Vec<T>>
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> NaiveDate,
    {
        let mut groups: BTreeMap<BillingMonth, Vec<T>> = BTreeMap::new();
        for item in items {
            let month = profile.billing_month_for(date_of(&item));
            groups.entry(month).or_default().push(item);
        }
        tracing::debug!(bills = groups.len(), "grouped items by billing month");
        groups
    }

    /// Same as [`Self::group_by_billing_month`], with each bucket's statement attached.
    pub fn statements<T, I, F>(
        profile: &CardBillingProfile,
        items: I,
        date_of: F,
    ) -> Vec<BillingGroup<T>>
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> NaiveDate,
    {
        Self::group_by_billing_month(profile, items, date_of)
            .into_iter()
            .map(|(month, items)| BillingGroup {
                statement: profile.statement_for(month),
                items,
            })
            .collect()
    }
}
