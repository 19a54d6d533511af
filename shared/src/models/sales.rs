//! Sales aggregation models (dashboard chart)

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Bucket size of the sales chart
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViewMode {
    #[default]
    Monthly,
    Weekly,
}

impl ViewMode {
    /// Upper bound on buckets the backend returns for one year
    pub fn max_buckets(self) -> usize {
        match self {
            ViewMode::Monthly => 12,
            ViewMode::Weekly => 53,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Monthly => ViewMode::Weekly,
            ViewMode::Weekly => ViewMode::Monthly,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Monthly => write!(f, "monthly"),
            ViewMode::Weekly => write!(f, "weekly"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monthly" | "month" => Ok(ViewMode::Monthly),
            "weekly" | "week" => Ok(ViewMode::Weekly),
            other => Err(format!("unknown view mode: {other}")),
        }
    }
}

/// One aggregated sales figure for a calendar period.
///
/// The monthly endpoint names the label `monthName`, the weekly one
/// `weekName`; both land in `label`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalesBucket {
    #[serde(alias = "monthName", alias = "weekName")]
    pub label: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_sales: Decimal,
}

impl SalesBucket {
    pub fn new(label: impl Into<String>, total_sales: Decimal) -> Self {
        Self {
            label: label.into(),
            total_sales,
        }
    }
}

/// Chronologically ordered buckets, exactly as the backend sent them
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct SalesSeries(Vec<SalesBucket>);

impl SalesSeries {
    pub fn new(buckets: Vec<SalesBucket>) -> Self {
        Self(buckets)
    }

    pub fn buckets(&self) -> &[SalesBucket] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SalesBucket> {
        self.0.iter()
    }
}

impl From<Vec<SalesBucket>> for SalesSeries {
    fn from(buckets: Vec<SalesBucket>) -> Self {
        Self(buckets)
    }
}
