//! Shared types for the billing console
//!
//! Wire models of the reporting endpoints plus the small value types
//! (date ranges, view modes) that both the HTTP client and the console
//! components agree on.

pub mod date_range;
pub mod models;
pub mod util;

// Re-exports
pub use date_range::{DateRange, DateRangeError};
pub use models::{
    DashboardSnapshot, Order, OrderItem, OrderPage, OrderPageQuery, PaymentDetails,
    PaymentMethod, PaymentStatus, SalesBucket, SalesSeries, ViewMode, PAGE_SIZE,
};
pub use serde::{Deserialize, Serialize};
