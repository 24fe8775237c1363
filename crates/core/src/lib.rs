pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use types::MessageResponse;

/// Prefix carried by every bearer token issued in development mode.
/// Production: replace with JWT validation against the real identity provider.
pub const DEV_TOKEN_PREFIX: &str = "adb_dev_";
