//! Sales reporting projections.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::order::OrderStatus;

/// Aggregated order activity over a reporting window.
///
/// Revenue sums the totals of non-cancelled orders; the per-status counts
/// include every order in the window, cancelled ones included, so staff can
/// see how many were abandoned.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub order_count: u64,
    pub revenue: Decimal,
    pub count_by_status: BTreeMap<String, u64>,
}

impl SalesSummary {
    /// Fold one order into the summary.
    pub fn record(&mut self, status: OrderStatus, total: Decimal) {
        self.order_count += 1;
        if status != OrderStatus::Cancelled {
            self.revenue += total;
        }
        *self
            .count_by_status
            .entry(status.as_str().to_owned())
            .or_insert(0) += 1;
    }
}
