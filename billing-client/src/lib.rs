//! Billing Client - HTTP client for the billing backend
//!
//! Provides the reporting endpoints (dashboard, sales series, paginated
//! orders, CSV export) behind the [`ReportingApi`] trait.

pub mod config;
pub mod error;
pub mod http;

pub use config::{ClientConfig, Endpoints};
pub use error::{ClientError, ClientResult};
pub use http::{NetworkHttpClient, ReportingApi};

// Re-export shared types for convenience
pub use shared::{
    DashboardSnapshot, DateRange, Order, OrderPage, OrderPageQuery, SalesSeries, ViewMode,
};
