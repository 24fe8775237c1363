//! Geolocation router — geo reports plus campaign-scoped map endpoints.

use axum::routing::get;
use axum::Router;
use std::sync::Arc;

use crate::handlers::{self, GeoState};
use crate::store::GeoStore;

pub fn geo_router() -> Router {
    let state = GeoState {
        store: Arc::new(GeoStore::new()),
    };

    Router::new()
        .route("/reports/geolocation/users", get(handlers::user_distribution))
        .route("/reports/geolocation/map", get(handlers::map_activity))
        .route("/campaigns/geolocation", get(handlers::campaign_points))
        .route("/campaigns/{id}/interactive-map", get(handlers::interactive_map))
        .with_state(state)
}
