//! Order history view
//!
//! Binds the time-range filter, the pagination state machine and a fetch
//! orchestrator into the state the order table renders from. Every input
//! that changes the query key dispatches exactly one request; replies are
//! pulled with [`OrderHistory::process_next`] or [`OrderHistory::settle`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use billing_client::ReportingApi;
use chrono::NaiveDate;
use shared::util::today_utc;
use shared::{DateRange, Order, OrderPage, OrderPageQuery};

use crate::error::{ReportError, ReportResult};
use crate::export::{ExportPipeline, ExportedFile};
use crate::filter::TimeRangeFilter;
use crate::format::OrderRow;
use crate::notify::{Notice, Notifier};
use crate::orchestrator::{FetchOrchestrator, Outcome, Resolution, Ticket};
use crate::pagination::{PageEvent, Pagination};

pub const EMPTY_MESSAGE: &str = "No orders found";
const LOAD_FAILED: &str = "Unable to load orders";
const EXPORT_FAILED: &str = "Unable to export orders";

pub struct OrderHistory {
    api: Arc<dyn ReportingApi>,
    notifier: Arc<dyn Notifier>,
    filter: TimeRangeFilter,
    pagination: Pagination,
    fetcher: FetchOrchestrator<OrderPageQuery, OrderPage>,
    export: ExportPipeline,
    orders: Vec<Order>,
    /// Query whose reply is currently rendered
    shown: Option<OrderPageQuery>,
}

impl OrderHistory {
    pub fn new(api: Arc<dyn ReportingApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            export: ExportPipeline::new(api.clone()),
            api,
            notifier,
            filter: TimeRangeFilter::new(),
            pagination: Pagination::new(),
            fetcher: FetchOrchestrator::new("orders"),
            orders: Vec::new(),
            shown: None,
        }
    }

    /// Key of the page the view currently wants
    pub fn current_query(&self) -> OrderPageQuery {
        OrderPageQuery::new(self.pagination.page_index(), self.filter.applied())
    }

    fn fetch(&mut self) -> Ticket<OrderPageQuery> {
        let query = self.current_query();
        let api = self.api.clone();
        self.fetcher
            .dispatch(query, async move { api.orders_page(&query).await })
    }

    /// Initial load of the first page
    pub fn load(&mut self) -> Ticket<OrderPageQuery> {
        self.fetch()
    }

    /// Re-request the current page unconditionally
    pub fn refresh(&mut self) -> Ticket<OrderPageQuery> {
        self.fetch()
    }

    fn navigate(&mut self, event: PageEvent) -> Option<Ticket<OrderPageQuery>> {
        self.pagination.apply(event).then(|| self.fetch())
    }

    pub fn next_page(&mut self) -> Option<Ticket<OrderPageQuery>> {
        self.navigate(PageEvent::Next)
    }

    pub fn prev_page(&mut self) -> Option<Ticket<OrderPageQuery>> {
        self.navigate(PageEvent::Prev)
    }

    /// Jump to a 0-based page index, clamped to the known page count
    pub fn goto_page(&mut self, index: u32) -> Option<Ticket<OrderPageQuery>> {
        self.navigate(PageEvent::Goto(index))
    }

    pub fn set_start(&mut self, date: NaiveDate) -> ReportResult<()> {
        self.filter.set_start(date).map_err(|e| {
            tracing::warn!(%date, error = %e, "Rejected start date");
            ReportError::from(e)
        })
    }

    pub fn set_end(&mut self, date: NaiveDate) -> ReportResult<()> {
        self.filter.set_end(date).map_err(|e| {
            tracing::warn!(%date, error = %e, "Rejected end date");
            ReportError::from(e)
        })
    }

    /// Apply the edited bounds and fetch page 0 of the filtered set.
    ///
    /// Nothing is dispatched while a bound is missing.
    pub fn apply_filter(&mut self) -> ReportResult<Ticket<OrderPageQuery>> {
        let range = self.filter.apply().map_err(|e| {
            tracing::warn!(error = %e, "Filter not applied");
            ReportError::from(e)
        })?;
        tracing::debug!(?range, "Filter applied");
        self.pagination.apply(PageEvent::FilterChanged);
        Ok(self.fetch())
    }

    /// Drop the filter and fetch page 0 unfiltered
    pub fn clear_filter(&mut self) -> Ticket<OrderPageQuery> {
        self.filter.clear();
        self.pagination.apply(PageEvent::FilterChanged);
        self.fetch()
    }

    /// Pull and reconcile one reply.
    pub async fn process_next(&mut self) -> Outcome {
        match self.fetcher.next_resolution().await {
            None => Outcome::Idle,
            Some(Resolution::Stale { .. }) => Outcome::Discarded,
            Some(Resolution::Current { key, result }) => match result {
                Ok(page) => self.commit(key, page),
                Err(e) => {
                    let timed_out = e.is_timeout();
                    let err = ReportError::from(e);
                    tracing::warn!(?key, timed_out, error = %err, "Order page request failed");
                    self.notifier.notify(Notice::failure(LOAD_FAILED, &err));
                    Outcome::Failed(err.kind())
                }
            },
        }
    }

    fn commit(&mut self, key: OrderPageQuery, page: OrderPage) -> Outcome {
        let refetch = self.pagination.settle(page.total_pages);
        tracing::info!(
            page = key.page,
            total_pages = page.total_pages,
            rows = page.content.len(),
            "Orders loaded"
        );
        self.orders = page.content;
        self.shown = Some(key);
        if refetch {
            tracing::debug!(
                page = self.pagination.page_index(),
                "Page index out of range, refetching"
            );
            self.fetch();
        }
        Outcome::Committed
    }

    /// Process replies until the latest request has resolved
    pub async fn settle(&mut self) {
        while self.fetcher.is_loading() {
            if self.process_next().await == Outcome::Idle {
                break;
            }
        }
    }

    /// Download the CSV for the applied range; pagination is untouched.
    pub async fn download_export(&self) -> ReportResult<ExportedFile> {
        self.export
            .fetch(self.filter.applied(), today_utc())
            .await
            .inspect_err(|e| self.notifier.notify(Notice::failure(EXPORT_FAILED, e)))
    }

    /// Export the applied range into `dir`
    pub async fn export_csv(&self, dir: &Path) -> ReportResult<PathBuf> {
        match self.export.export_csv(self.filter.applied(), dir).await {
            Ok(path) => {
                self.notifier
                    .notify(Notice::success(format!("Orders exported to {}", path.display())));
                Ok(path)
            }
            Err(e) => {
                self.notifier.notify(Notice::failure(EXPORT_FAILED, &e));
                Err(e)
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.fetcher.is_loading()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn rows(&self) -> Vec<OrderRow> {
        self.orders.iter().map(OrderRow::from).collect()
    }

    pub fn filter(&self) -> &TimeRangeFilter {
        &self.filter
    }

    pub fn applied_range(&self) -> Option<DateRange> {
        self.filter.applied()
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn page_index(&self) -> u32 {
        self.pagination.page_index()
    }

    pub fn total_pages(&self) -> u32 {
        self.pagination.total_pages()
    }

    pub fn page_buttons(&self) -> std::ops::Range<u32> {
        self.pagination.page_buttons()
    }

    pub fn shown_query(&self) -> Option<&OrderPageQuery> {
        self.shown.as_ref()
    }

    /// Table placeholder once a committed fetch reported no pages at all
    pub fn empty_message(&self) -> Option<&'static str> {
        (self.shown.is_some() && self.pagination.is_empty()).then_some(EMPTY_MESSAGE)
    }
}
