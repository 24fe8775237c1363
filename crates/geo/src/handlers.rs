//! Axum REST handlers for geolocation reports.

use adboard_core::ApiError;
use axum::extract::{Path, Query, State};
use axum::Json;
use std::sync::Arc;

use crate::models::{
    CampaignGeoParams, CountryActivity, CountryDistribution, GeoPoint, GeoReportParams,
    InteractiveMap, InteractiveMapParams,
};
use crate::store::GeoStore;

/// Shared geolocation state.
#[derive(Clone)]
pub struct GeoState {
    pub store: Arc<GeoStore>,
}

pub async fn user_distribution(
    State(state): State<GeoState>,
    Query(_params): Query<GeoReportParams>,
) -> Json<Vec<CountryDistribution>> {
    Json(state.store.user_distribution())
}

pub async fn map_activity(
    State(state): State<GeoState>,
    Query(_params): Query<GeoReportParams>,
) -> Json<Vec<CountryActivity>> {
    Json(state.store.map_activity())
}

pub async fn campaign_points(
    State(state): State<GeoState>,
    Query(params): Query<CampaignGeoParams>,
) -> Result<Json<Vec<GeoPoint>>, ApiError> {
    state.store.campaign_points(params.campaign_id).map(Json)
}

pub async fn interactive_map(
    State(state): State<GeoState>,
    Path(id): Path<i32>,
    Query(params): Query<InteractiveMapParams>,
) -> Result<Json<InteractiveMap>, ApiError> {
    state.store.interactive_map(id, params.detail_level).map(Json)
}
