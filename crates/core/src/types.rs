//! Response types shared across the API crates.

use serde::{Deserialize, Serialize};

/// Plain confirmation body used by delete/update endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
