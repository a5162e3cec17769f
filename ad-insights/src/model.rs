//! Records in, results out.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One ad on one day.
///
/// `ctr` (percent, 0..=100) and `cpc` are stored as delivered by the source,
/// not recomputed; see [`crate::dataset::Dataset::drift`] for the check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdRecord {
    pub campaign_id: String,
    pub campaign_name: String,
    pub ad_id: String,
    pub ad_name: String,
    pub impressions: u64,
    pub clicks: u64,
    pub spend: f64,
    pub ctr: f64,
    pub cpc: f64,
    pub date: NaiveDate,
}

impl AdRecord {
    /// CTR recomputed from counts; `None` without impressions.
    pub fn derived_ctr(&self) -> Option<f64> {
        (self.impressions > 0).then(|| self.clicks as f64 / self.impressions as f64 * 100.0)
    }

    /// CPC recomputed from spend and clicks; `None` without clicks.
    pub fn derived_cpc(&self) -> Option<f64> {
        (self.clicks > 0).then(|| self.spend / self.clicks as f64)
    }
}

/// Response to one question.
///
/// `data` is `Some(vec![])` when nothing matched and `None` only for the
/// apology result. `chart_data` is `None` whenever there is nothing to plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<AdRecord>>,
    #[serde(default)]
    pub chart_data: Option<ChartData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

/// Chart payload: x-axis labels plus parallel series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartData {
    /// Looks up a series by its label.
    pub fn dataset(&self, label: &str) -> Option<&ChartDataset> {
        self.datasets.iter().find(|d| d.label == label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: String,
    pub border_color: String,
    #[serde(rename = "yAxisID")]
    pub y_axis_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> AdRecord {
        AdRecord {
            campaign_id: "camp_001".into(),
            campaign_name: "Summer Sale 2024".into(),
            ad_id: "ad_001".into(),
            ad_name: "Beach Collection Banner".into(),
            impressions: 15000,
            clicks: 450,
            spend: 2250.0,
            ctr: 3.0,
            cpc: 5.0,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        }
    }

    #[test]
    fn record_uses_camel_case_and_iso_date() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["campaignName"], "Summer Sale 2024");
        assert_eq!(json["adName"], "Beach Collection Banner");
        assert_eq!(json["date"], "2024-06-01");
    }

    #[test]
    fn derived_metrics_guard_zero_denominators() {
        let mut r = record();
        assert_eq!(r.derived_ctr(), Some(3.0));
        assert_eq!(r.derived_cpc(), Some(5.0));

        r.impressions = 0;
        r.clicks = 0;
        assert_eq!(r.derived_ctr(), None);
        assert_eq!(r.derived_cpc(), None);
    }

    #[test]
    fn empty_data_is_serialized_as_empty_list() {
        let res = QueryResult {
            answer: "none".into(),
            data: Some(vec![]),
            chart_data: None,
            suggestions: Some(vec![]),
        };
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["data"], serde_json::json!([]));
        assert!(json["chartData"].is_null());
    }
}
