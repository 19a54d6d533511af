//! Sales aggregation adapter
//!
//! Reshapes backend series and the dashboard snapshot into what the chart
//! and the summary cards bind to. Buckets are never recomputed here; a new
//! mode or year always means a new request.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use shared::{DashboardSnapshot, SalesSeries, ViewMode};

use crate::format::{RecentOrderRow, format_currency};

/// Years offered by the year selector
const SELECTABLE_YEARS: i32 = 5;

/// Dataset label shown in the chart legend
pub fn dataset_label(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Monthly => "Monthly Sales (₹)",
        ViewMode::Weekly => "Weekly Sales (₹)",
    }
}

/// Current year and the four before it, newest first
pub fn available_years(current_year: i32) -> Vec<i32> {
    (0..SELECTABLE_YEARS).map(|back| current_year - back).collect()
}

/// Chart-ready projection of a sales series
#[derive(Debug, Clone, PartialEq)]
pub struct SalesChart {
    pub mode: ViewMode,
    pub year: i32,
    pub dataset_label: &'static str,
    pub labels: Vec<String>,
    /// Plotted values, index-aligned with `labels`
    pub values: Vec<f64>,
    /// Exact sum of the buckets
    pub series_total: Decimal,
}

impl SalesChart {
    pub fn from_series(mode: ViewMode, year: i32, series: &SalesSeries) -> Self {
        if series.len() > mode.max_buckets() {
            tracing::warn!(
                %mode,
                year,
                buckets = series.len(),
                "series has more buckets than the view mode allows"
            );
        }

        let labels = series.iter().map(|b| b.label.clone()).collect();
        let values = series
            .iter()
            .map(|b| b.total_sales.to_f64().unwrap_or_default())
            .collect();
        let series_total = series.iter().map(|b| b.total_sales).sum();

        Self {
            mode,
            year,
            dataset_label: dataset_label(mode),
            labels,
            values,
            series_total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Largest plotted value, 0 for an empty chart
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

/// Summary cards and recent orders of the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub today_sales: Decimal,
    pub today_sales_display: String,
    pub today_order_count: u64,
    /// Backend order, untouched
    pub recent_orders: Vec<RecentOrderRow>,
}

impl From<&DashboardSnapshot> for DashboardSummary {
    fn from(snapshot: &DashboardSnapshot) -> Self {
        Self {
            today_sales: snapshot.today_sales,
            today_sales_display: format_currency(snapshot.today_sales),
            today_order_count: snapshot.today_order_count,
            recent_orders: snapshot
                .recent_orders
                .iter()
                .map(RecentOrderRow::from)
                .collect(),
        }
    }
}
