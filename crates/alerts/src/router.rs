//! Alert router — advertiser alert configuration and manual trigger.

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

use crate::handlers::{self, AlertState};
use crate::store::AlertStore;

pub fn alert_router() -> Router {
    let state = AlertState {
        store: Arc::new(AlertStore::new()),
    };

    Router::new()
        .route(
            "/advertiser/alerts",
            get(handlers::get_config).put(handlers::update_config),
        )
        .route("/advertiser/alerts/trigger", post(handlers::trigger_alert))
        .with_state(state)
}
