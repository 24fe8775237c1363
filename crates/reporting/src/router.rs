//! Reporting router — dashboard rows, advertiser KPIs, per-campaign reports.

use axum::routing::get;
use axum::Router;
use std::sync::Arc;

use crate::handlers::{self, ReportingState};
use crate::store::ReportingStore;

pub fn reporting_router() -> Router {
    let state = ReportingState {
        store: Arc::new(ReportingStore::new()),
    };

    Router::new()
        // Dashboard
        .route("/reports/users-top-countries", get(handlers::users_top_countries))
        .route("/reports/sessions-top-countries", get(handlers::sessions_top_countries))
        .route("/reports/average-duration-country", get(handlers::average_duration_country))
        .route("/reports/user-acquisition", get(handlers::user_acquisition))
        .route("/reports/clicks-country", get(handlers::clicks_country))
        // Advertiser KPIs
        .route("/advertiser/user-map", get(handlers::user_map))
        .route("/advertiser/user-stats", get(handlers::user_stats))
        .route("/advertiser/transactions", get(handlers::transactions))
        // Per-campaign reports
        .route("/reports/investment/locality", get(handlers::investment_by_locality))
        .route("/reports/spend-evolution", get(handlers::spend_evolution))
        .with_state(state)
}
