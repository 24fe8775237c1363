//! Axum REST handlers for the campaign API.

use adboard_core::{ApiError, MessageResponse};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

use crate::models::{
    Campaign, CampaignCreatedResponse, CreateCampaignRequest, MediaPiece, UpdateCampaignRequest,
};
use crate::query::QueryOptions;
use crate::store::CampaignStore;

/// Shared campaign state.
#[derive(Clone)]
pub struct CampaignState {
    pub store: Arc<CampaignStore>,
}

pub async fn list_campaigns(
    State(state): State<CampaignState>,
    Query(opts): Query<QueryOptions>,
) -> Json<Vec<Campaign>> {
    Json(state.store.list(&opts))
}

pub async fn get_campaign(
    State(state): State<CampaignState>,
    Path(id): Path<i32>,
) -> Result<Json<Campaign>, ApiError> {
    state.store.get(id).map(Json)
}

pub async fn create_campaign(
    State(state): State<CampaignState>,
    Json(req): Json<CreateCampaignRequest>,
) -> Result<(StatusCode, Json<CampaignCreatedResponse>), ApiError> {
    let campaign = state.store.create(req)?;
    metrics::counter!("campaigns.created").increment(1);
    let body = CampaignCreatedResponse {
        id: campaign.id,
        status: campaign.status,
        message: "Campaign created successfully".to_string(),
        confirmation: format!("Campaign '{}' registered", campaign.name),
    };
    Ok((StatusCode::CREATED, Json(body)))
}

pub async fn update_campaign(
    State(state): State<CampaignState>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateCampaignRequest>,
) -> Result<Json<Campaign>, ApiError> {
    state.store.update(id, req).map(Json)
}

pub async fn delete_campaign(
    State(state): State<CampaignState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.delete(id)?;
    metrics::counter!("campaigns.deleted").increment(1);
    Ok(Json(MessageResponse::new("Campaign deleted successfully")))
}

// ─── Media pieces ──────────────────────────────────────────────────────────

pub async fn list_pieces(
    State(state): State<CampaignState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<MediaPiece>>, ApiError> {
    state.store.pieces(id).map(Json)
}

pub async fn get_piece(
    State(state): State<CampaignState>,
    Path((id, piece_id)): Path<(i32, i32)>,
) -> Result<Json<MediaPiece>, ApiError> {
    state.store.piece(id, piece_id).map(Json)
}
