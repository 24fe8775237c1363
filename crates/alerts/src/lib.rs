//! Advertiser alert configuration and manual alert triggering.

pub mod handlers;
pub mod models;
pub mod router;
pub mod store;

pub use handlers::AlertState;
pub use router::alert_router;
pub use store::AlertStore;
