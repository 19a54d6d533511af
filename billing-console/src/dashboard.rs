//! Dashboard view
//!
//! Two independent fetches: the snapshot (today's figures and recent
//! orders) and the sales series for the selected view mode and year. Each
//! has its own stale-response guard; a failure of one never blanks the
//! other.

use std::sync::Arc;

use billing_client::ReportingApi;
use shared::{DashboardSnapshot, SalesSeries, ViewMode};

use crate::aggregation::{DashboardSummary, SalesChart, available_years};
use crate::error::ReportError;
use crate::notify::{Notice, Notifier};
use crate::orchestrator::{FetchOrchestrator, Outcome, Resolution, Ticket};

const SNAPSHOT_FAILED: &str = "Unable to view the data";
const SERIES_FAILED: &str = "Unable to load sales data";
pub const SUMMARY_UNAVAILABLE: &str = "Failed to load the dashboard data...";

/// Input key of a sales series fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SalesQuery {
    pub mode: ViewMode,
    pub year: i32,
}

pub struct Dashboard {
    api: Arc<dyn ReportingApi>,
    notifier: Arc<dyn Notifier>,
    current_year: i32,
    mode: ViewMode,
    year: i32,
    snapshot_fetch: FetchOrchestrator<(), DashboardSnapshot>,
    series_fetch: FetchOrchestrator<SalesQuery, SalesSeries>,
    summary: Option<DashboardSummary>,
    summary_failed: bool,
    chart: Option<SalesChart>,
}

impl Dashboard {
    /// Monthly view of `current_year`
    pub fn new(api: Arc<dyn ReportingApi>, notifier: Arc<dyn Notifier>, current_year: i32) -> Self {
        Self {
            api,
            notifier,
            current_year,
            mode: ViewMode::default(),
            year: current_year,
            snapshot_fetch: FetchOrchestrator::new("dashboard"),
            series_fetch: FetchOrchestrator::new("sales"),
            summary: None,
            summary_failed: false,
            chart: None,
        }
    }

    /// Start on a different mode and year; takes effect on [`Dashboard::load`]
    pub fn with_selection(mut self, mode: ViewMode, year: i32) -> Self {
        self.mode = mode;
        self.year = year;
        self
    }

    pub fn selection(&self) -> SalesQuery {
        SalesQuery {
            mode: self.mode,
            year: self.year,
        }
    }

    /// Fetch the snapshot and the selected series
    pub fn load(&mut self) {
        self.refresh_snapshot();
        self.refresh_series();
    }

    pub fn refresh_snapshot(&mut self) -> Ticket<()> {
        let api = self.api.clone();
        self.snapshot_fetch
            .dispatch((), async move { api.dashboard().await })
    }

    pub fn refresh_series(&mut self) -> Ticket<SalesQuery> {
        let query = self.selection();
        let api = self.api.clone();
        self.series_fetch.dispatch(query, async move {
            api.sales_series(query.mode, query.year).await
        })
    }

    /// Switch the chart granularity; re-requests only on change.
    pub fn set_view_mode(&mut self, mode: ViewMode) -> Option<Ticket<SalesQuery>> {
        if mode == self.mode {
            return None;
        }
        self.mode = mode;
        Some(self.refresh_series())
    }

    pub fn toggle_view_mode(&mut self) -> Option<Ticket<SalesQuery>> {
        self.set_view_mode(self.mode.toggled())
    }

    /// Select another year; re-requests only on change.
    pub fn set_year(&mut self, year: i32) -> Option<Ticket<SalesQuery>> {
        if year == self.year {
            return None;
        }
        if !self.available_years().contains(&year) {
            tracing::debug!(year, "year outside the selector range");
        }
        self.year = year;
        Some(self.refresh_series())
    }

    /// Pull and reconcile one reply from either fetch.
    pub async fn process_next(&mut self) -> Outcome {
        tokio::select! {
            Some(resolution) = self.snapshot_fetch.next_resolution(),
                if self.snapshot_fetch.in_flight() > 0 => self.reconcile_snapshot(resolution),
            Some(resolution) = self.series_fetch.next_resolution(),
                if self.series_fetch.in_flight() > 0 => self.reconcile_series(resolution),
            else => Outcome::Idle,
        }
    }

    fn reconcile_snapshot(&mut self, resolution: Resolution<(), DashboardSnapshot>) -> Outcome {
        match resolution {
            Resolution::Stale { .. } => Outcome::Discarded,
            Resolution::Current { result: Ok(snapshot), .. } => {
                tracing::info!(
                    today_orders = snapshot.today_order_count,
                    recent = snapshot.recent_orders.len(),
                    "Dashboard snapshot loaded"
                );
                self.summary = Some(DashboardSummary::from(&snapshot));
                self.summary_failed = false;
                Outcome::Committed
            }
            Resolution::Current { result: Err(e), .. } => {
                let err = ReportError::from(e);
                tracing::warn!(error = %err, "Dashboard snapshot request failed");
                self.summary_failed = true;
                self.notifier.notify(Notice::failure(SNAPSHOT_FAILED, &err));
                Outcome::Failed(err.kind())
            }
        }
    }

    fn reconcile_series(&mut self, resolution: Resolution<SalesQuery, SalesSeries>) -> Outcome {
        match resolution {
            Resolution::Stale { .. } => Outcome::Discarded,
            Resolution::Current { key, result: Ok(series) } => {
                tracing::info!(mode = %key.mode, year = key.year, buckets = series.len(), "Sales series loaded");
                self.chart = Some(SalesChart::from_series(key.mode, key.year, &series));
                Outcome::Committed
            }
            Resolution::Current { key, result: Err(e) } => {
                let err = ReportError::from(e);
                tracing::warn!(mode = %key.mode, year = key.year, error = %err, "Sales series request failed");
                self.notifier.notify(Notice::failure(SERIES_FAILED, &err));
                Outcome::Failed(err.kind())
            }
        }
    }

    /// Process replies until both latest requests have resolved
    pub async fn settle(&mut self) {
        while self.is_loading() {
            if self.process_next().await == Outcome::Idle {
                break;
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.snapshot_fetch.is_loading() || self.series_fetch.is_loading()
    }

    pub fn is_chart_loading(&self) -> bool {
        self.series_fetch.is_loading()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn available_years(&self) -> Vec<i32> {
        available_years(self.current_year)
    }

    pub fn summary(&self) -> Option<&DashboardSummary> {
        self.summary.as_ref()
    }

    /// Last committed chart; may belong to a previous selection while a new one loads
    pub fn chart(&self) -> Option<&SalesChart> {
        self.chart.as_ref()
    }

    /// Placeholder shown instead of the summary cards
    pub fn status_message(&self) -> Option<&'static str> {
        (self.summary.is_none() && self.summary_failed).then_some(SUMMARY_UNAVAILABLE)
    }
}
