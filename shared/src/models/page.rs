//! Paginated order listing

use serde::{Deserialize, Serialize};

use super::Order;
use crate::DateRange;

/// Rows per page of the order history table
pub const PAGE_SIZE: u32 = 10;

/// One page of orders, newest first
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderPage {
    #[serde(default)]
    pub content: Vec<Order>,
    /// Zero when nothing matches the query
    pub total_pages: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_elements: Option<u64>,
}

impl OrderPage {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Input tuple of a paginated order fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderPageQuery {
    pub page: u32,
    pub size: u32,
    pub range: Option<DateRange>,
}

impl OrderPageQuery {
    pub fn new(page: u32, range: Option<DateRange>) -> Self {
        Self {
            page,
            size: PAGE_SIZE,
            range,
        }
    }

    /// `page`, `size` and, when a range is applied, `startDate` / `endDate`
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string()), ("size", self.size.to_string())];
        if let Some(range) = &self.range {
            pairs.extend(range.query_pairs());
        }
        pairs
    }
}
