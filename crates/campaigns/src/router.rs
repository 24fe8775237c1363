//! Campaign router — mounts campaign CRUD and media piece endpoints.

use axum::routing::get;
use axum::Router;
use std::sync::Arc;

use crate::handlers::{self, CampaignState};
use crate::store::CampaignStore;

/// Build the campaign router with its own seeded store.
/// Returns a Router that should be merged into the main app.
pub fn campaign_router() -> Router {
    campaign_router_with(Arc::new(CampaignStore::new()))
}

pub fn campaign_router_with(store: Arc<CampaignStore>) -> Router {
    let state = CampaignState { store };

    Router::new()
        .route(
            "/campaigns",
            get(handlers::list_campaigns).post(handlers::create_campaign),
        )
        .route(
            "/campaigns/{id}",
            get(handlers::get_campaign)
                .put(handlers::update_campaign)
                .delete(handlers::delete_campaign),
        )
        .route("/campaigns/{id}/pieces", get(handlers::list_pieces))
        .route("/campaigns/{id}/pieces/{piece_id}", get(handlers::get_piece))
        .with_state(state)
}
