//! Report row types — per-country, per-channel and per-campaign breakdowns.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryUsers {
    pub country: String,
    pub users: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountrySessions {
    pub country: String,
    pub sessions: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryDuration {
    pub country: String,
    pub avg_duration_secs: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelUsers {
    pub channel: String,
    pub users: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryClicks {
    pub country: String,
    pub clicks: u64,
}

/// Daily activity row split by user type (active, new, subscriber).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStat {
    pub date: NaiveDate,
    pub kind: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionsSummary {
    pub total_transactions: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentByLocality {
    pub product_type: String,
    pub total_investment: f64,
    pub locality: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendPoint {
    pub date: NaiveDate,
    pub amount: f64,
}

// ─── Query parameter shapes ────────────────────────────────────────────────

/// Top-N report parameters. Date bounds are accepted for interface parity;
/// the fixture data is not date-partitioned.
#[derive(Debug, Clone, Deserialize)]
pub struct TopCountriesParams {
    pub top_n: usize,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DateRangeParams {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CampaignScopedParams {
    pub campaign_id: i32,
}
