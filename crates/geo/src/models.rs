//! Geolocation row types — country distributions and map data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-country share of the user base over a period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryDistribution {
    pub country: String,
    pub count: u64,
    pub percentage: f64,
}

/// Country centroid with an activity volume, for map rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryActivity {
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub activity: u64,
}

/// A city-level impact point of one campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
    pub city: String,
    pub impressions: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractiveMap {
    pub zones: Vec<String>,
    pub level: DetailLevel,
    pub metrics: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DetailLevel {
    Low,
    #[default]
    Medium,
    High,
}

// ─── Query parameter shapes ────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct GeoReportParams {
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CampaignGeoParams {
    pub campaign_id: i32,
    pub region: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InteractiveMapParams {
    #[serde(default)]
    pub detail_level: DetailLevel,
}
