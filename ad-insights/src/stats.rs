//! Filtering and summary statistics over records.

use tracing::debug;

use crate::{
    intent::{QueryIntent, TimeRange},
    model::AdRecord,
};

/// Keeps records inside `intent.time_range` and matching `intent.campaign`.
///
/// Missing range or campaign means that predicate is skipped. The two
/// predicates commute.
pub fn filter_by_intent(records: &[AdRecord], intent: &QueryIntent) -> Vec<AdRecord> {
    let mut filtered: Vec<AdRecord> = records.to_vec();

    if let Some(range) = intent.time_range {
        let before = filtered.len();
        filtered.retain(|r| in_time_range(r, &range));
        debug!(
            start = %range.start,
            end = %range.end,
            before,
            after = filtered.len(),
            "time filter applied"
        );
    }

    if let Some(fragment) = intent.campaign.as_deref() {
        let needle = fragment.to_lowercase();
        let before = filtered.len();
        filtered.retain(|r| matches_campaign(r, &needle));
        debug!(
            campaign = fragment,
            before,
            after = filtered.len(),
            "campaign filter applied"
        );
    }

    filtered
}

pub fn in_time_range(record: &AdRecord, range: &TimeRange) -> bool {
    range.contains(record.date)
}

/// `needle_lower` must already be lower-cased.
pub fn matches_campaign(record: &AdRecord, needle_lower: &str) -> bool {
    record.campaign_name.to_lowercase().contains(needle_lower)
}

/// Aggregates over a non-empty record set.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats<'a> {
    pub count: usize,
    pub total_impressions: u64,
    pub total_clicks: u64,
    pub total_spend: f64,
    /// `total_clicks / total_impressions * 100`; `None` without impressions.
    pub avg_ctr: Option<f64>,
    /// `total_spend / total_clicks`; `None` without clicks.
    pub avg_cpc: Option<f64>,
    /// Highest stored `ctr`, first occurrence on ties.
    pub best: &'a AdRecord,
    /// Lowest stored `ctr`, first occurrence on ties.
    pub worst: &'a AdRecord,
}

/// Returns `None` for an empty slice.
pub fn compute_stats(records: &[AdRecord]) -> Option<Stats<'_>> {
    let (first, rest) = records.split_first()?;

    let mut stats = Stats {
        count: records.len(),
        total_impressions: first.impressions,
        total_clicks: first.clicks,
        total_spend: first.spend,
        avg_ctr: None,
        avg_cpc: None,
        best: first,
        worst: first,
    };

    for r in rest {
        stats.total_impressions += r.impressions;
        stats.total_clicks += r.clicks;
        stats.total_spend += r.spend;
        if r.ctr > stats.best.ctr {
            stats.best = r;
        }
        if r.ctr < stats.worst.ctr {
            stats.worst = r;
        }
    }

    stats.avg_ctr = (stats.total_impressions > 0)
        .then(|| stats.total_clicks as f64 / stats.total_impressions as f64 * 100.0);
    stats.avg_cpc =
        (stats.total_clicks > 0).then(|| stats.total_spend / stats.total_clicks as f64);

    Some(stats)
}
