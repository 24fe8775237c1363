//! Axum REST handlers for the advertiser alert endpoints.

use adboard_core::{ApiError, MessageResponse};
use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use crate::models::{AlertConfig, TriggerAlertRequest, TriggerAlertResponse};
use crate::store::AlertStore;

/// Shared alert state.
#[derive(Clone)]
pub struct AlertState {
    pub store: Arc<AlertStore>,
}

pub async fn get_config(State(state): State<AlertState>) -> Json<AlertConfig> {
    Json(state.store.get())
}

pub async fn update_config(
    State(state): State<AlertState>,
    Json(req): Json<AlertConfig>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.replace(req)?;
    Ok(Json(MessageResponse::new(
        "Alert configuration updated successfully",
    )))
}

pub async fn trigger_alert(
    State(state): State<AlertState>,
    Json(req): Json<TriggerAlertRequest>,
) -> Result<Json<TriggerAlertResponse>, ApiError> {
    state.store.trigger(&req)?;
    metrics::counter!("alerts.triggered").increment(1);
    Ok(Json(TriggerAlertResponse { alert_sent: true }))
}
