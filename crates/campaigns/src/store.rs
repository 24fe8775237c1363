//! In-memory campaign repository seeded with demo fixtures.
//!
//! All mutation goes through this type while holding the write lock, which
//! is what keeps identifiers unique and the soft-delete guard sound when
//! the server handles requests concurrently. Reads clone a snapshot.

use adboard_core::{ApiError, ApiResult};
use chrono::{TimeZone, Utc};
use dashmap::DashMap;
use parking_lot::RwLock;
use tracing::info;

use crate::models::{
    Campaign, CampaignStatus, CreateCampaignRequest, MediaPiece, UpdateCampaignRequest,
};
use crate::query::{run_query, QueryOptions};

pub struct CampaignStore {
    campaigns: RwLock<Vec<Campaign>>,
    pieces: DashMap<i32, Vec<MediaPiece>>,
}

impl CampaignStore {
    pub fn new() -> Self {
        let store = Self {
            campaigns: RwLock::new(Vec::new()),
            pieces: DashMap::new(),
        };
        store.seed_demo_data();
        info!("campaign store initialized (in-memory, development mode)");
        store
    }

    /// Empty store for tests that want full control over the contents.
    pub fn empty() -> Self {
        Self {
            campaigns: RwLock::new(Vec::new()),
            pieces: DashMap::new(),
        }
    }

    // ─── Campaigns ─────────────────────────────────────────────────────────

    /// Listing pipeline over a snapshot; never mutates the collection.
    pub fn list(&self, opts: &QueryOptions) -> Vec<Campaign> {
        run_query(&self.campaigns.read(), opts)
    }

    pub fn get(&self, id: i32) -> ApiResult<Campaign> {
        self.campaigns
            .read()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("campaign {} not found", id)))
    }

    /// Validates, assigns the next sequential identifier and appends.
    /// Validation failures leave the collection untouched.
    pub fn create(&self, req: CreateCampaignRequest) -> ApiResult<Campaign> {
        if req.end_date <= req.start_date {
            return Err(ApiError::Validation(
                "end date must be strictly after start date".to_string(),
            ));
        }
        if req.budget <= 0.0 {
            return Err(ApiError::Validation(
                "budget must be strictly positive".to_string(),
            ));
        }

        let mut campaigns = self.campaigns.write();
        let next_id = campaigns.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let campaign = Campaign {
            id: next_id,
            name: req.name,
            description: req.description,
            status: CampaignStatus::Active,
            start_date: req.start_date,
            end_date: req.end_date,
            budget: req.budget,
            channel: req.channel,
            demographic: req.demographic,
            image_urls: req.image_urls,
            video_url: req.video_url,
        };
        campaigns.push(campaign.clone());
        info!(campaign_id = campaign.id, name = %campaign.name, "campaign created");
        Ok(campaign)
    }

    /// Partial in-place update. The schedule invariant is re-checked against
    /// the merged record before anything is written back.
    pub fn update(&self, id: i32, req: UpdateCampaignRequest) -> ApiResult<Campaign> {
        let mut campaigns = self.campaigns.write();
        let campaign = campaigns
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("campaign {} not found", id)))?;

        let start = req.start_date.unwrap_or(campaign.start_date);
        let end = req.end_date.unwrap_or(campaign.end_date);
        if end <= start {
            return Err(ApiError::Validation(
                "end date must be strictly after start date".to_string(),
            ));
        }
        if let Some(budget) = req.budget {
            if budget <= 0.0 {
                return Err(ApiError::Validation(
                    "budget must be strictly positive".to_string(),
                ));
            }
            campaign.budget = budget;
        }

        if let Some(name) = req.name {
            campaign.name = name;
        }
        if let Some(description) = req.description {
            campaign.description = description;
        }
        if let Some(status) = req.status {
            campaign.status = status;
        }
        if let Some(channel) = req.channel {
            campaign.channel = channel;
        }
        if let Some(demographic) = req.demographic {
            campaign.demographic = Some(demographic);
        }
        campaign.start_date = start;
        campaign.end_date = end;
        Ok(campaign.clone())
    }

    /// Soft-delete guard: live campaigns cannot be removed.
    pub fn delete(&self, id: i32) -> ApiResult<()> {
        let mut campaigns = self.campaigns.write();
        let index = campaigns
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("campaign {} not found", id)))?;
        if campaigns[index].status == CampaignStatus::Active {
            return Err(ApiError::PolicyViolation(
                "an active campaign cannot be deleted".to_string(),
            ));
        }
        campaigns.remove(index);
        info!(campaign_id = id, "campaign deleted");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.campaigns.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.campaigns.read().is_empty()
    }

    // ─── Media pieces ──────────────────────────────────────────────────────

    pub fn pieces(&self, campaign_id: i32) -> ApiResult<Vec<MediaPiece>> {
        self.pieces
            .get(&campaign_id)
            .map(|r| r.value().clone())
            .ok_or_else(|| {
                ApiError::NotFound(format!("campaign {} not found or has no pieces", campaign_id))
            })
    }

    pub fn piece(&self, campaign_id: i32, piece_id: i32) -> ApiResult<MediaPiece> {
        let pieces = self.pieces(campaign_id)?;
        pieces
            .into_iter()
            .find(|p| p.piece_id == piece_id)
            .ok_or_else(|| ApiError::NotFound(format!("piece {} not found", piece_id)))
    }

    // ─── Demo Data ─────────────────────────────────────────────────────────

    fn seed_demo_data(&self) {
        let mut campaigns = self.campaigns.write();
        campaigns.push(Campaign {
            id: 1,
            name: "Summer campaign".to_string(),
            description: "Summer 2025 promotion".to_string(),
            status: CampaignStatus::Active,
            start_date: Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2025, 6, 30, 23, 59, 0).unwrap(),
            budget: 10_000.0,
            channel: "social".to_string(),
            demographic: None,
            image_urls: Vec::new(),
            video_url: None,
        });
        campaigns.push(Campaign {
            id: 2,
            name: "Winter campaign".to_string(),
            description: "Winter discounts".to_string(),
            status: CampaignStatus::Inactive,
            start_date: Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2025, 7, 31, 23, 59, 0).unwrap(),
            budget: 8_000.0,
            channel: "email".to_string(),
            demographic: None,
            image_urls: Vec::new(),
            video_url: None,
        });

        self.pieces.insert(
            1,
            vec![
                MediaPiece {
                    piece_id: 101,
                    kind: "image".to_string(),
                    url: "https://cdn.adboard.dev/pieces/101.jpg".to_string(),
                    format: "jpg".to_string(),
                    created_at: Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap(),
                },
                MediaPiece {
                    piece_id: 102,
                    kind: "video".to_string(),
                    url: "https://cdn.adboard.dev/pieces/102.mp4".to_string(),
                    format: "mp4".to_string(),
                    created_at: Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap(),
                },
            ],
        );
        self.pieces.insert(
            2,
            vec![MediaPiece {
                piece_id: 201,
                kind: "image".to_string(),
                url: "https://cdn.adboard.dev/pieces/201.jpg".to_string(),
                format: "jpg".to_string(),
                created_at: Utc.with_ymd_and_hms(2025, 6, 3, 9, 30, 0).unwrap(),
            }],
        );
    }
}

impl Default for CampaignStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_request(budget: f64, start_day: u32, end_day: u32) -> CreateCampaignRequest {
        CreateCampaignRequest {
            name: "Launch".to_string(),
            description: "Product launch".to_string(),
            budget,
            demographic: Some("18-24".to_string()),
            channel: "social".to_string(),
            start_date: Utc.with_ymd_and_hms(2025, 8, start_day, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2025, 8, end_day, 0, 0, 0).unwrap(),
            image_urls: vec!["https://cdn.adboard.dev/a.jpg".to_string()],
            video_url: None,
        }
    }

    // 1. Creation -----------------------------------------------------------

    #[test]
    fn test_create_assigns_next_sequential_id_and_forces_active() {
        let store = CampaignStore::new();
        let created = store.create(create_request(500.0, 1, 31)).unwrap();
        assert_eq!(created.id, 3);
        assert_eq!(created.status, CampaignStatus::Active);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_create_on_empty_store_starts_at_one() {
        let store = CampaignStore::empty();
        let created = store.create(create_request(500.0, 1, 31)).unwrap();
        assert_eq!(created.id, 1);
    }

    #[test]
    fn test_create_rejects_non_positive_budget_without_partial_append() {
        let store = CampaignStore::new();
        let before = store.len();
        let err = store.create(create_request(-5.0, 1, 31)).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(store.len(), before);
    }

    #[test]
    fn test_create_rejects_end_not_after_start() {
        let store = CampaignStore::new();
        let before = store.len();
        let err = store.create(create_request(500.0, 10, 10)).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        let err = store.create(create_request(500.0, 10, 5)).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(store.len(), before);
    }

    #[test]
    fn test_ids_stay_unique_after_delete_and_recreate() {
        let store = CampaignStore::new();
        store.delete(2).unwrap();
        let created = store.create(create_request(500.0, 1, 31)).unwrap();
        // max(id)+1 over the remaining records, never a reused hole.
        assert_eq!(created.id, 2);
        let ids: Vec<i32> = (1..=2).filter_map(|id| store.get(id).ok()).map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    // 2. Deletion guard -----------------------------------------------------

    #[test]
    fn test_delete_active_campaign_is_a_policy_violation() {
        let store = CampaignStore::new();
        let err = store.delete(1).unwrap_err();
        assert!(matches!(err, ApiError::PolicyViolation(_)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_delete_unknown_campaign_is_not_found() {
        let store = CampaignStore::new();
        let err = store.delete(99).unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_delete_inactive_campaign_removes_exactly_one() {
        let store = CampaignStore::new();
        store.delete(2).unwrap();
        assert_eq!(store.len(), 1);
        assert!(matches!(store.get(2), Err(ApiError::NotFound(_))));
    }

    // 3. Update -------------------------------------------------------------

    #[test]
    fn test_update_merges_fields_in_place() {
        let store = CampaignStore::new();
        let updated = store
            .update(
                1,
                UpdateCampaignRequest {
                    name: Some("Renamed".to_string()),
                    budget: Some(12_000.0),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.budget, 12_000.0);
        assert_eq!(store.get(1).unwrap().name, "Renamed");
    }

    #[test]
    fn test_update_recheck_schedule_invariant() {
        let store = CampaignStore::new();
        let err = store
            .update(
                1,
                UpdateCampaignRequest {
                    end_date: Some(Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        // Record unchanged on failure.
        assert_eq!(
            store.get(1).unwrap().end_date,
            Utc.with_ymd_and_hms(2025, 6, 30, 23, 59, 0).unwrap()
        );
    }

    #[test]
    fn test_update_unknown_campaign_is_not_found() {
        let store = CampaignStore::new();
        let err = store.update(99, UpdateCampaignRequest::default()).unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    // 4. Pieces -------------------------------------------------------------

    #[test]
    fn test_pieces_lookup() {
        let store = CampaignStore::new();
        assert_eq!(store.pieces(1).unwrap().len(), 2);
        assert_eq!(store.piece(1, 102).unwrap().format, "mp4");
        assert!(matches!(store.pieces(9), Err(ApiError::NotFound(_))));
        assert!(matches!(store.piece(1, 999), Err(ApiError::NotFound(_))));
    }
}
