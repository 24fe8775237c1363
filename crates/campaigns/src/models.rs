//! Campaign domain types — records, status, request/response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Campaign ──────────────────────────────────────────────────────────────

/// A single advertising campaign. Identifiers are sequential integers,
/// unique within the store and immutable once assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub status: CampaignStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub budget: f64,
    pub channel: String,
    #[serde(default)]
    pub demographic: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Active,
    Inactive,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "active",
            CampaignStatus::Inactive => "inactive",
        }
    }
}

/// Campaign fields a listing request may sort by. Unknown names simply
/// fail to parse and leave the sequence in filter order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Description,
    Status,
    StartDate,
    EndDate,
    Budget,
    Channel,
}

impl SortField {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "id" => Some(SortField::Id),
            "name" => Some(SortField::Name),
            "description" => Some(SortField::Description),
            "status" => Some(SortField::Status),
            "start_date" => Some(SortField::StartDate),
            "end_date" => Some(SortField::EndDate),
            "budget" => Some(SortField::Budget),
            "channel" => Some(SortField::Channel),
            _ => None,
        }
    }
}

// ─── Media pieces ──────────────────────────────────────────────────────────

/// A multimedia asset attached to a campaign (image, video, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaPiece {
    pub piece_id: i32,
    pub kind: String,
    pub url: String,
    pub format: String,
    pub created_at: DateTime<Utc>,
}

// ─── API Request/Response types ────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCampaignRequest {
    pub name: String,
    pub description: String,
    pub budget: f64,
    pub demographic: Option<String>,
    pub channel: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCampaignRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<CampaignStatus>,
    pub budget: Option<f64>,
    pub channel: Option<String>,
    pub demographic: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct CampaignCreatedResponse {
    pub id: i32,
    pub status: CampaignStatus,
    pub message: String,
    pub confirmation: String,
}
