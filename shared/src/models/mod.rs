//! Data models
//!
//! Read-only snapshots of what the billing backend returns. The console
//! never writes any of these back; they are replaced wholesale on the
//! next successful fetch.

pub mod dashboard;
pub mod order;
pub mod page;
pub mod sales;

// Re-exports
pub use dashboard::*;
pub use order::*;
pub use page::*;
pub use sales::*;
