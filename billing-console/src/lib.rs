//! Billing Console - order history and sales reporting
//!
//! State containers the render layer binds to:
//!
//! - [`OrderHistory`]: date-filtered, server-paginated order table with CSV export
//! - [`Dashboard`]: today's figures, recent orders and the monthly/weekly sales chart
//!
//! Both own a [`FetchOrchestrator`] per query kind; replies to superseded
//! requests are dropped on arrival so the latest user input always wins.

pub mod aggregation;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod filter;
pub mod format;
pub mod history;
pub mod logger;
pub mod notify;
pub mod orchestrator;
pub mod pagination;

pub use aggregation::{DashboardSummary, SalesChart};
pub use config::ConsoleConfig;
pub use dashboard::{Dashboard, SalesQuery};
pub use error::{FailureKind, ReportError, ReportResult};
pub use export::{ExportPipeline, ExportedFile};
pub use filter::TimeRangeFilter;
pub use format::{OrderRow, RecentOrderRow};
pub use history::OrderHistory;
pub use notify::{LogNotifier, Notice, NoticeLevel, Notifier};
pub use orchestrator::{FetchOrchestrator, Outcome, Resolution, Ticket};
pub use pagination::{PageEvent, Pagination};
