//! Campaign management API — campaign CRUD, listing pipeline, media pieces.
//!
//! Data lives in an in-memory repository seeded with demo fixtures;
//! swap to PostgreSQL for production.

pub mod handlers;
pub mod models;
pub mod query;
pub mod router;
pub mod store;

pub use handlers::CampaignState;
pub use query::QueryOptions;
pub use router::campaign_router;
pub use store::CampaignStore;
