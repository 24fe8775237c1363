//! Fixture-backed geolocation store.

use adboard_core::{ApiError, ApiResult};
use dashmap::DashMap;
use std::collections::BTreeMap;
use tracing::info;

use crate::models::{CountryActivity, CountryDistribution, DetailLevel, GeoPoint, InteractiveMap};

pub struct GeoStore {
    user_distribution: Vec<CountryDistribution>,
    map_activity: Vec<CountryActivity>,
    campaign_points: DashMap<i32, Vec<GeoPoint>>,
    campaign_maps: DashMap<i32, InteractiveMap>,
}

impl GeoStore {
    pub fn new() -> Self {
        let store = Self {
            user_distribution: vec![
                CountryDistribution { country: "Chile".into(), count: 500, percentage: 25.0 },
                CountryDistribution { country: "Mexico".into(), count: 450, percentage: 22.5 },
                CountryDistribution { country: "Colombia".into(), count: 300, percentage: 15.0 },
            ],
            map_activity: vec![
                CountryActivity { country: "Chile".into(), lat: -33.4489, lon: -70.6693, activity: 1500 },
                CountryActivity { country: "Mexico".into(), lat: 19.4326, lon: -99.1332, activity: 1200 },
                CountryActivity { country: "Colombia".into(), lat: 4.7110, lon: -74.0721, activity: 800 },
            ],
            campaign_points: DashMap::new(),
            campaign_maps: DashMap::new(),
        };
        store.seed_campaign_data();
        info!("geo store initialized (fixture data)");
        store
    }

    pub fn user_distribution(&self) -> Vec<CountryDistribution> {
        self.user_distribution.clone()
    }

    pub fn map_activity(&self) -> Vec<CountryActivity> {
        self.map_activity.clone()
    }

    pub fn campaign_points(&self, campaign_id: i32) -> ApiResult<Vec<GeoPoint>> {
        self.campaign_points
            .get(&campaign_id)
            .map(|r| r.value().clone())
            .ok_or_else(|| {
                ApiError::NotFound(format!(
                    "campaign {} not found or has no geographic data",
                    campaign_id
                ))
            })
    }

    /// Interactive map for one campaign, rendered at the requested level.
    pub fn interactive_map(&self, campaign_id: i32, level: DetailLevel) -> ApiResult<InteractiveMap> {
        self.campaign_maps
            .get(&campaign_id)
            .map(|r| {
                let mut map = r.value().clone();
                map.level = level;
                map
            })
            .ok_or_else(|| {
                ApiError::NotFound(format!(
                    "campaign {} not found or has no interactive map",
                    campaign_id
                ))
            })
    }

    fn seed_campaign_data(&self) {
        self.campaign_points.insert(
            1,
            vec![
                GeoPoint { lat: -33.4489, lon: -70.6693, city: "Santiago".into(), impressions: 1000 },
                GeoPoint { lat: -32.8908, lon: -71.2748, city: "Valparaiso".into(), impressions: 500 },
            ],
        );

        let mut metrics = BTreeMap::new();
        metrics.insert("clicks".to_string(), 150);
        metrics.insert("impressions".to_string(), 2000);
        self.campaign_maps.insert(
            1,
            InteractiveMap {
                zones: vec!["Zone A".into(), "Zone B".into()],
                level: DetailLevel::Medium,
                metrics,
            },
        );
    }
}

impl Default for GeoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_percentages_cover_fixtures() {
        let store = GeoStore::new();
        let rows = store.user_distribution();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].country, "Chile");
        assert!((rows[0].percentage - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_campaign_points_not_found() {
        let store = GeoStore::new();
        assert!(matches!(store.campaign_points(7), Err(ApiError::NotFound(_))));
        assert_eq!(store.campaign_points(1).unwrap().len(), 2);
    }

    #[test]
    fn test_interactive_map_applies_requested_level() {
        let store = GeoStore::new();
        let map = store.interactive_map(1, DetailLevel::High).unwrap();
        assert_eq!(map.level, DetailLevel::High);
        assert_eq!(map.zones.len(), 2);
        assert_eq!(map.metrics.get("clicks"), Some(&150));
        assert!(matches!(
            store.interactive_map(9, DetailLevel::Low),
            Err(ApiError::NotFound(_))
        ));
    }
}
