//! Dashboard snapshot model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Order;

/// Today's figures plus the most recent orders.
///
/// Refreshed wholesale on every dashboard load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    #[serde(with = "rust_decimal::serde::float")]
    pub today_sales: Decimal,
    pub today_order_count: u64,
    /// Backend-ordered, backend-bounded
    #[serde(default)]
    pub recent_orders: Vec<Order>,
}
