//! Role and permission management API, guarded by bearer-token middleware.

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;
pub mod store;

pub use handlers::RoleState;
pub use router::role_router;
pub use store::RoleStore;
