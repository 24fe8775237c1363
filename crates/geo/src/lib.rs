//! Geolocation reports — user distribution, map activity, and per-campaign
//! geographic impact.

pub mod handlers;
pub mod models;
pub mod router;
pub mod store;

pub use handlers::GeoState;
pub use router::geo_router;
pub use store::GeoStore;
