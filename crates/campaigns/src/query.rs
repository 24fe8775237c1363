//! Campaign listing pipeline: filter → sort → limit over a snapshot.
//!
//! Pure over its inputs; the source collection is never mutated and an
//! empty result is a normal outcome, not an error.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::{Campaign, SortField};

pub const DEFAULT_LIMIT: usize = 10;
pub const MAX_LIMIT: usize = 100;

/// Optional listing parameters, built fresh per request from the query
/// string. All fields compose; a record must pass every active filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryOptions {
    pub status: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub sort: Option<String>,
    pub limit: Option<usize>,
    pub search: Option<String>,
}

impl QueryOptions {
    /// Result-size cap: default 10, clamped to [1, 100].
    pub fn effective_limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }
}

/// Apply the listing pipeline in its fixed order. The status filter is a
/// case-insensitive string comparison, so an unrecognized status value
/// matches nothing rather than failing the request. An unknown sort field
/// leaves the filtered sequence in its prior order.
pub fn run_query(campaigns: &[Campaign], opts: &QueryOptions) -> Vec<Campaign> {
    let mut results: Vec<Campaign> = campaigns.to_vec();

    if let Some(status) = opts.status.as_deref() {
        results.retain(|c| c.status.as_str().eq_ignore_ascii_case(status));
    }
    if let Some(from) = opts.start_date {
        results.retain(|c| c.start_date.date_naive() >= from);
    }
    if let Some(to) = opts.end_date {
        results.retain(|c| c.end_date.date_naive() <= to);
    }
    if let Some(term) = opts.search.as_deref() {
        let needle = term.to_lowercase();
        results.retain(|c| {
            c.name.to_lowercase().contains(&needle)
                || c.description.to_lowercase().contains(&needle)
        });
    }

    if let Some(field) = opts.sort.as_deref().and_then(SortField::parse) {
        sort_by_field(&mut results, field);
    }

    results.truncate(opts.effective_limit());
    results
}

/// Ascending stable sort by the named field. `Vec::sort_by` is stable, so
/// equal keys keep their filter-order relative positions.
fn sort_by_field(items: &mut [Campaign], field: SortField) {
    match field {
        SortField::Id => items.sort_by_key(|c| c.id),
        SortField::Name => items.sort_by(|a, b| a.name.cmp(&b.name)),
        SortField::Description => items.sort_by(|a, b| a.description.cmp(&b.description)),
        SortField::Status => items.sort_by(|a, b| a.status.as_str().cmp(b.status.as_str())),
        SortField::StartDate => items.sort_by_key(|c| c.start_date),
        SortField::EndDate => items.sort_by_key(|c| c.end_date),
        SortField::Budget => items.sort_by(|a, b| a.budget.total_cmp(&b.budget)),
        SortField::Channel => items.sort_by(|a, b| a.channel.cmp(&b.channel)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CampaignStatus;
    use chrono::{TimeZone, Utc};

    fn campaign(
        id: i32,
        name: &str,
        status: CampaignStatus,
        start: (i32, u32, u32),
        end: (i32, u32, u32),
        budget: f64,
    ) -> Campaign {
        Campaign {
            id,
            name: name.to_string(),
            description: format!("{} description", name),
            status,
            start_date: Utc
                .with_ymd_and_hms(start.0, start.1, start.2, 10, 0, 0)
                .unwrap(),
            end_date: Utc
                .with_ymd_and_hms(end.0, end.1, end.2, 23, 59, 0)
                .unwrap(),
            budget,
            channel: "social".to_string(),
            demographic: None,
            image_urls: Vec::new(),
            video_url: None,
        }
    }

    fn fixtures() -> Vec<Campaign> {
        vec![
            campaign(1, "Summer push", CampaignStatus::Active, (2025, 6, 1), (2025, 6, 30), 10_000.0),
            campaign(2, "Winter discounts", CampaignStatus::Inactive, (2025, 7, 1), (2025, 7, 31), 8_000.0),
        ]
    }

    // 1. Filters ------------------------------------------------------------

    #[test]
    fn test_status_filter_is_case_insensitive() {
        let result = run_query(
            &fixtures(),
            &QueryOptions {
                status: Some("INACTIVE".into()),
                ..Default::default()
            },
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
    }

    #[test]
    fn test_unknown_status_matches_nothing() {
        let result = run_query(
            &fixtures(),
            &QueryOptions {
                status: Some("archived".into()),
                ..Default::default()
            },
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_start_date_lower_bound_is_inclusive() {
        let bound = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let result = run_query(
            &fixtures(),
            &QueryOptions {
                start_date: Some(bound),
                ..Default::default()
            },
        );
        // Campaign 2 starts exactly on the bound and must be retained.
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
    }

    #[test]
    fn test_end_date_upper_bound_is_inclusive() {
        let bound = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let result = run_query(
            &fixtures(),
            &QueryOptions {
                end_date: Some(bound),
                ..Default::default()
            },
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn test_search_matches_name_or_description_case_insensitive() {
        let by_name = run_query(
            &fixtures(),
            &QueryOptions {
                search: Some("WINTER".into()),
                ..Default::default()
            },
        );
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, 2);

        let by_description = run_query(
            &fixtures(),
            &QueryOptions {
                search: Some("push description".into()),
                ..Default::default()
            },
        );
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].id, 1);
    }

    #[test]
    fn test_filters_compose_conjunctively() {
        let result = run_query(
            &fixtures(),
            &QueryOptions {
                status: Some("active".into()),
                search: Some("winter".into()),
                ..Default::default()
            },
        );
        // Each record must pass every active filter.
        assert!(result.is_empty());
    }

    // 2. Sort ---------------------------------------------------------------

    #[test]
    fn test_sort_by_budget_ascending() {
        let result = run_query(
            &fixtures(),
            &QueryOptions {
                sort: Some("budget".into()),
                ..Default::default()
            },
        );
        let ids: Vec<i32> = result.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_sort_by_start_date_chronological() {
        let mut data = fixtures();
        data.reverse();
        let result = run_query(
            &data,
            &QueryOptions {
                sort: Some("start_date".into()),
                ..Default::default()
            },
        );
        let ids: Vec<i32> = result.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut data = fixtures();
        // Same channel on every record; a channel sort must keep filter order.
        data.push(campaign(3, "Spring promo", CampaignStatus::Active, (2025, 3, 1), (2025, 3, 31), 5_000.0));
        let result = run_query(
            &data,
            &QueryOptions {
                sort: Some("channel".into()),
                ..Default::default()
            },
        );
        let ids: Vec<i32> = result.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_unknown_sort_field_is_a_noop() {
        let result = run_query(
            &fixtures(),
            &QueryOptions {
                sort: Some("owner".into()),
                ..Default::default()
            },
        );
        let ids: Vec<i32> = result.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_sort_over_empty_input_is_a_noop() {
        let result = run_query(
            &[],
            &QueryOptions {
                sort: Some("budget".into()),
                ..Default::default()
            },
        );
        assert!(result.is_empty());
    }

    // 3. Limit --------------------------------------------------------------

    #[test]
    fn test_limit_takes_first_n_in_current_order() {
        let result = run_query(
            &fixtures(),
            &QueryOptions {
                limit: Some(1),
                ..Default::default()
            },
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn test_limit_defaults_to_ten() {
        let data: Vec<Campaign> = (1..=25)
            .map(|i| campaign(i, &format!("c{}", i), CampaignStatus::Active, (2025, 1, 1), (2025, 12, 31), 100.0))
            .collect();
        let result = run_query(&data, &QueryOptions::default());
        assert_eq!(result.len(), DEFAULT_LIMIT);
    }

    #[test]
    fn test_limit_is_clamped_to_bounds() {
        let opts = QueryOptions {
            limit: Some(0),
            ..Default::default()
        };
        assert_eq!(opts.effective_limit(), 1);

        let opts = QueryOptions {
            limit: Some(10_000),
            ..Default::default()
        };
        assert_eq!(opts.effective_limit(), MAX_LIMIT);
    }

    #[test]
    fn test_result_never_exceeds_effective_limit() {
        let data: Vec<Campaign> = (1..=150)
            .map(|i| campaign(i, &format!("c{}", i), CampaignStatus::Active, (2025, 1, 1), (2025, 12, 31), 100.0))
            .collect();
        for limit in [None, Some(1), Some(50), Some(10_000)] {
            let opts = QueryOptions {
                limit,
                ..Default::default()
            };
            let result = run_query(&data, &opts);
            assert!(result.len() <= opts.effective_limit());
        }
    }

    // 4. Purity -------------------------------------------------------------

    #[test]
    fn test_source_collection_is_not_mutated() {
        let data = fixtures();
        let _ = run_query(
            &data,
            &QueryOptions {
                status: Some("active".into()),
                sort: Some("budget".into()),
                limit: Some(1),
                ..Default::default()
            },
        );
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].id, 1);
        assert_eq!(data[1].id, 2);
    }
}
