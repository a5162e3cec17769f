//! Per-day chart series for the filtered records.
//!
//! Labels are `"%b %d"` (e.g. `Jun 05`) and sorted as strings, which orders
//! days correctly only inside a single month; across months the order is
//! alphabetical by month abbreviation, and across years it collapses days
//! with the same label.

use std::collections::BTreeMap;

use crate::model::{AdRecord, ChartData, ChartDataset};

pub const LABEL_FORMAT: &str = "%b %d";

/// Three series aligned to `labels`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    pub labels: Vec<String>,
    pub impressions: Vec<u64>,
    pub spend: Vec<f64>,
    /// Per-day `clicks / impressions * 100`, or `0.0` for a day without impressions.
    pub ctr: Vec<f64>,
}

#[derive(Default)]
struct DayTotals {
    impressions: u64,
    clicks: u64,
    spend: f64,
}

/// `None` when there are no records.
pub fn build_time_series(records: &[AdRecord]) -> Option<TimeSeries> {
    if records.is_empty() {
        return None;
    }

    let mut days: BTreeMap<String, DayTotals> = BTreeMap::new();
    for r in records {
        let day = days.entry(r.date.format(LABEL_FORMAT).to_string()).or_default();
        day.impressions += r.impressions;
        day.clicks += r.clicks;
        day.spend += r.spend;
    }

    let mut series = TimeSeries {
        labels: Vec::with_capacity(days.len()),
        impressions: Vec::with_capacity(days.len()),
        spend: Vec::with_capacity(days.len()),
        ctr: Vec::with_capacity(days.len()),
    };
    for (label, day) in days {
        series.labels.push(label);
        series.impressions.push(day.impressions);
        series.spend.push(day.spend);
        series.ctr.push(if day.impressions > 0 {
            day.clicks as f64 / day.impressions as f64 * 100.0
        } else {
            0.0
        });
    }
    Some(series)
}

/// Chart payload for the UI, or `None` when there is nothing to plot.
pub fn build_chart_data(records: &[AdRecord]) -> Option<ChartData> {
    build_time_series(records).map(ChartData::from)
}

impl From<TimeSeries> for ChartData {
    fn from(s: TimeSeries) -> Self {
        let dataset = |label: &str, data: Vec<f64>, rgb: &str, axis: &str| ChartDataset {
            label: label.to_string(),
            data,
            background_color: format!("rgba({rgb}, 0.2)"),
            border_color: format!("rgba({rgb}, 1)"),
            y_axis_id: axis.to_string(),
        };

        ChartData {
            datasets: vec![
                dataset(
                    "Impressions",
                    s.impressions.iter().map(|&v| v as f64).collect(),
                    "54, 162, 235",
                    "y",
                ),
                dataset("Spend ($)", s.spend, "255, 99, 132", "y1"),
                dataset("CTR (%)", s.ctr, "75, 192, 192", "y2"),
            ],
            labels: s.labels,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn empty_records_have_no_chart() {
        assert!(build_time_series(&[]).is_none());
        assert!(build_chart_data(&[]).is_none());
    }

    #[test]
    fn june_series() {
        let ds = Dataset::bundled().unwrap();
        let s = build_time_series(&ds.records()[..3]).unwrap();
        assert_eq!(s.labels, vec!["Jun 01", "Jun 05", "Jun 10"]);
        assert_eq!(s.impressions, vec![15_000, 12_000, 8_000]);
        assert_eq!(s.spend, vec![2_250.0, 1_800.0, 960.0]);
        assert!((s.ctr[1] - 5.0).abs() < 1e-9);
    }

    #[test]
    fn same_day_records_are_summed() {
        let ds = Dataset::bundled().unwrap();
        let mut a = ds.records()[0].clone();
        let mut b = ds.records()[1].clone();
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        a.date = day;
        b.date = day;

        let s = build_time_series(&[a, b]).unwrap();
        assert_eq!(s.labels, vec!["Jun 01"]);
        assert_eq!(s.impressions, vec![27_000]);
        assert!((s.ctr[0] - 1_050.0 / 27_000.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn series_are_aligned_and_zero_impressions_mean_zero_ctr() {
        let ds = Dataset::bundled().unwrap();
        let mut rows = ds.records().to_vec();
        rows[4].impressions = 0;
        rows[4].clicks = 0;

        let s = build_time_series(&rows).unwrap();
        assert_eq!(s.impressions.len(), s.labels.len());
        assert_eq!(s.spend.len(), s.labels.len());
        assert_eq!(s.ctr.len(), s.labels.len());
        for (i, imp) in s.impressions.iter().enumerate() {
            if *imp == 0 {
                assert_eq!(s.ctr[i], 0.0);
            }
        }
        assert!(s.impressions.contains(&0));
    }

    #[test]
    fn labels_sort_as_strings() {
        let ds = Dataset::bundled().unwrap();
        let s = build_time_series(ds.records()).unwrap();
        let mut sorted = s.labels.clone();
        sorted.sort();
        assert_eq!(s.labels, sorted);
        assert_eq!(s.labels.first().map(String::as_str), Some("Aug 15"));
    }

    #[test]
    fn chart_payload_shape() {
        let ds = Dataset::bundled().unwrap();
        let chart = build_chart_data(&ds.records()[..3]).unwrap();
        let names: Vec<_> = chart.datasets.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(names, vec!["Impressions", "Spend ($)", "CTR (%)"]);
        assert!(chart.datasets.iter().all(|d| d.data.len() == chart.labels.len()));

        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["datasets"][1]["yAxisID"], "y1");
        assert_eq!(json["datasets"][0]["borderColor"], "rgba(54, 162, 235, 1)");
    }
}
