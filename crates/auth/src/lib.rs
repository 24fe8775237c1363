//! Login flow stubbed against external collaborators: an identity provider
//! for token issuance, a user directory for lookup, and a credential store
//! for password updates. Each sits behind a trait; the in-memory
//! development implementations live in [`provider`].

pub mod handlers;
pub mod models;
pub mod provider;
pub mod router;
pub mod service;

pub use handlers::AuthState;
pub use router::auth_router;
pub use service::AuthService;
