//! Axum REST handlers for dashboard and advertiser KPI reports.

use adboard_core::ApiError;
use axum::extract::{Query, State};
use axum::Json;
use std::sync::Arc;

use crate::models::*;
use crate::store::ReportingStore;

/// Shared reporting state.
#[derive(Clone)]
pub struct ReportingState {
    pub store: Arc<ReportingStore>,
}

// ─── Dashboard ─────────────────────────────────────────────────────────────

pub async fn users_top_countries(
    State(state): State<ReportingState>,
    Query(params): Query<TopCountriesParams>,
) -> Result<Json<Vec<CountryUsers>>, ApiError> {
    state.store.top_users(params.top_n).map(Json)
}

pub async fn sessions_top_countries(
    State(state): State<ReportingState>,
    Query(params): Query<TopCountriesParams>,
) -> Result<Json<Vec<CountrySessions>>, ApiError> {
    state.store.top_sessions(params.top_n).map(Json)
}

pub async fn average_duration_country(
    State(state): State<ReportingState>,
    Query(_params): Query<DateRangeParams>,
) -> Json<Vec<CountryDuration>> {
    Json(state.store.average_duration())
}

pub async fn user_acquisition(
    State(state): State<ReportingState>,
    Query(_params): Query<DateRangeParams>,
) -> Json<Vec<ChannelUsers>> {
    Json(state.store.user_acquisition())
}

pub async fn clicks_country(
    State(state): State<ReportingState>,
    Query(_params): Query<DateRangeParams>,
) -> Json<Vec<CountryClicks>> {
    Json(state.store.clicks_by_country())
}

// ─── Advertiser KPIs ───────────────────────────────────────────────────────

pub async fn user_map(
    State(state): State<ReportingState>,
    Query(_params): Query<DateRangeParams>,
) -> Json<Vec<CountryUsers>> {
    Json(state.store.user_map())
}

pub async fn user_stats(
    State(state): State<ReportingState>,
    Query(_params): Query<DateRangeParams>,
) -> Json<Vec<UserStat>> {
    Json(state.store.user_stats())
}

pub async fn transactions(
    State(state): State<ReportingState>,
    Query(_params): Query<DateRangeParams>,
) -> Json<TransactionsSummary> {
    Json(state.store.total_transactions())
}

// ─── Per-campaign reports ──────────────────────────────────────────────────

pub async fn investment_by_locality(
    State(state): State<ReportingState>,
    Query(params): Query<CampaignScopedParams>,
) -> Result<Json<Vec<InvestmentByLocality>>, ApiError> {
    state.store.investment_by_locality(params.campaign_id).map(Json)
}

pub async fn spend_evolution(
    State(state): State<ReportingState>,
    Query(params): Query<CampaignScopedParams>,
) -> Result<Json<Vec<SpendPoint>>, ApiError> {
    state.store.spend_evolution(params.campaign_id).map(Json)
}
