//! Lock-guarded alert configuration plus trigger validation.
//!
//! Triggering only validates and logs here; delivery is the job of the
//! external notification system.

use adboard_core::{ApiError, ApiResult};
use parking_lot::RwLock;
use tracing::info;

use crate::models::{AlertConfig, AlertKind, TriggerAlertRequest};

pub struct AlertStore {
    config: RwLock<AlertConfig>,
}

impl AlertStore {
    pub fn new() -> Self {
        Self {
            config: RwLock::new(AlertConfig {
                locations: vec!["Chile".into(), "Mexico".into(), "Colombia".into()],
                delivery: "email".to_string(),
                price_threshold: 50.0,
                usage_threshold: 75,
            }),
        }
    }

    pub fn get(&self) -> AlertConfig {
        self.config.read().clone()
    }

    /// Replaces the whole configuration. At least one location is required.
    pub fn replace(&self, new_config: AlertConfig) -> ApiResult<()> {
        if new_config.locations.is_empty() {
            return Err(ApiError::Validation(
                "at least one location must be provided".to_string(),
            ));
        }
        *self.config.write() = new_config;
        info!("alert configuration replaced");
        Ok(())
    }

    /// Validates a manual trigger request. The kind must be a known alert
    /// type and the current value strictly positive to fire.
    pub fn trigger(&self, req: &TriggerAlertRequest) -> ApiResult<()> {
        let kind = AlertKind::parse(&req.kind).ok_or_else(|| {
            ApiError::BadRequest(format!("unknown alert type: {}", req.kind))
        })?;
        if req.current_value <= 0.0 {
            return Err(ApiError::BadRequest(
                "current value must be positive to trigger an alert".to_string(),
            ));
        }
        info!(
            kind = ?kind,
            campaign_id = %req.campaign_id,
            current_value = req.current_value,
            "alert triggered"
        );
        Ok(())
    }
}

impl Default for AlertStore {
    fn default() -> Self {
        Self::new()
    }
}
