//! Fixture-backed reporting store.
//!
//! Rows are static demo aggregates; production replaces this with a
//! ClickHouse-style analytical query layer behind the same methods.

use adboard_core::{ApiError, ApiResult};
use chrono::NaiveDate;
use dashmap::DashMap;
use tracing::info;

use crate::models::*;

pub struct ReportingStore {
    users_by_country: Vec<CountryUsers>,
    sessions_by_country: Vec<CountrySessions>,
    duration_by_country: Vec<CountryDuration>,
    acquisition_by_channel: Vec<ChannelUsers>,
    clicks_by_country: Vec<CountryClicks>,
    user_stats: Vec<UserStat>,
    investment_by_campaign: DashMap<i32, Vec<InvestmentByLocality>>,
    spend_by_campaign: DashMap<i32, Vec<SpendPoint>>,
}

impl ReportingStore {
    pub fn new() -> Self {
        let store = Self {
            users_by_country: vec![
                CountryUsers { country: "Chile".into(), users: 1200 },
                CountryUsers { country: "Mexico".into(), users: 950 },
                CountryUsers { country: "Colombia".into(), users: 800 },
            ],
            sessions_by_country: vec![
                CountrySessions { country: "Chile".into(), sessions: 3000 },
                CountrySessions { country: "Colombia".into(), sessions: 2500 },
                CountrySessions { country: "Mexico".into(), sessions: 1800 },
            ],
            duration_by_country: vec![
                CountryDuration { country: "Chile".into(), avg_duration_secs: 120.0 },
                CountryDuration { country: "Mexico".into(), avg_duration_secs: 90.0 },
                CountryDuration { country: "Colombia".into(), avg_duration_secs: 150.0 },
            ],
            acquisition_by_channel: vec![
                ChannelUsers { channel: "social".into(), users: 400 },
                ChannelUsers { channel: "direct".into(), users: 300 },
                ChannelUsers { channel: "email".into(), users: 200 },
            ],
            clicks_by_country: vec![
                CountryClicks { country: "Chile".into(), clicks: 700 },
                CountryClicks { country: "Mexico".into(), clicks: 600 },
                CountryClicks { country: "Colombia".into(), clicks: 500 },
            ],
            user_stats: vec![
                UserStat { date: date(2025, 5, 27), kind: "active".into(), count: 300 },
                UserStat { date: date(2025, 5, 27), kind: "new".into(), count: 150 },
                UserStat { date: date(2025, 5, 27), kind: "subscriber".into(), count: 50 },
            ],
            investment_by_campaign: DashMap::new(),
            spend_by_campaign: DashMap::new(),
        };
        store.seed_campaign_reports();
        info!("reporting store initialized (fixture data)");
        store
    }

    // ─── Dashboard rows ────────────────────────────────────────────────────

    /// Top-N rows; `top_n` must be at least one.
    pub fn top_users(&self, top_n: usize) -> ApiResult<Vec<CountryUsers>> {
        validate_top_n(top_n)?;
        Ok(self.users_by_country.iter().take(top_n).cloned().collect())
    }

    pub fn top_sessions(&self, top_n: usize) -> ApiResult<Vec<CountrySessions>> {
        validate_top_n(top_n)?;
        Ok(self.sessions_by_country.iter().take(top_n).cloned().collect())
    }

    pub fn average_duration(&self) -> Vec<CountryDuration> {
        self.duration_by_country.clone()
    }

    pub fn user_acquisition(&self) -> Vec<ChannelUsers> {
        self.acquisition_by_channel.clone()
    }

    pub fn clicks_by_country(&self) -> Vec<CountryClicks> {
        self.clicks_by_country.clone()
    }

    // ─── Advertiser KPIs ───────────────────────────────────────────────────

    pub fn user_map(&self) -> Vec<CountryUsers> {
        self.users_by_country.clone()
    }

    pub fn user_stats(&self) -> Vec<UserStat> {
        self.user_stats.clone()
    }

    pub fn total_transactions(&self) -> TransactionsSummary {
        TransactionsSummary {
            total_transactions: 213,
        }
    }

    // ─── Per-campaign reports ──────────────────────────────────────────────

    pub fn investment_by_locality(&self, campaign_id: i32) -> ApiResult<Vec<InvestmentByLocality>> {
        self.investment_by_campaign
            .get(&campaign_id)
            .map(|r| r.value().clone())
            .ok_or_else(|| {
                ApiError::NotFound(format!("no investment data for campaign {}", campaign_id))
            })
    }

    pub fn spend_evolution(&self, campaign_id: i32) -> ApiResult<Vec<SpendPoint>> {
        self.spend_by_campaign
            .get(&campaign_id)
            .map(|r| r.value().clone())
            .ok_or_else(|| {
                ApiError::NotFound(format!("no spend data for campaign {}", campaign_id))
            })
    }

    fn seed_campaign_reports(&self) {
        self.investment_by_campaign.insert(
            1,
            vec![
                InvestmentByLocality {
                    product_type: "Social media".into(),
                    total_investment: 5000.0,
                    locality: "Santiago".into(),
                },
                InvestmentByLocality {
                    product_type: "Search ads".into(),
                    total_investment: 3000.0,
                    locality: "Valparaiso".into(),
                },
            ],
        );
        self.investment_by_campaign.insert(
            2,
            vec![InvestmentByLocality {
                product_type: "Video ads".into(),
                total_investment: 8000.0,
                locality: "Bogota".into(),
            }],
        );

        self.spend_by_campaign.insert(
            1,
            vec![
                SpendPoint { date: date(2025, 6, 1), amount: 2500.0 },
                SpendPoint { date: date(2025, 6, 2), amount: 3000.0 },
                SpendPoint { date: date(2025, 6, 3), amount: 4500.0 },
            ],
        );
        self.spend_by_campaign.insert(
            2,
            vec![
                SpendPoint { date: date(2025, 7, 1), amount: 4000.0 },
                SpendPoint { date: date(2025, 7, 2), amount: 2000.0 },
            ],
        );
    }
}

impl Default for ReportingStore {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_top_n(top_n: usize) -> ApiResult<()> {
    if top_n < 1 {
        return Err(ApiError::BadRequest(
            "top_n must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}
