//! Dashboard and advertiser KPI reports — fixture-backed aggregation rows.

pub mod handlers;
pub mod models;
pub mod router;
pub mod store;

pub use handlers::ReportingState;
pub use router::reporting_router;
pub use store::ReportingStore;
