//! The bundled, read-only set of ad records.

use tracing::{info, warn};

use crate::{error::InsightsError, model::AdRecord};

/// JSON compiled into the binary; decoded once at startup.
const BUNDLED_ADS_JSON: &str = include_str!("../data/ads.json");

/// Tolerance (in CTR percentage points / currency units) for drift checks.
const DRIFT_EPSILON: f64 = 0.05;

/// Immutable record set shared by all requests.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<AdRecord>,
}

impl Dataset {
    /// Decodes the bundled records.
    ///
    /// # Errors
    /// Returns [`InsightsError::Dataset`] if the embedded JSON is malformed.
    pub fn bundled() -> Result<Self, InsightsError> {
        let records: Vec<AdRecord> =
            serde_json::from_str(BUNDLED_ADS_JSON).map_err(InsightsError::Dataset)?;
        let ds = Self { records };

        let drifted = ds.drift();
        if drifted.is_empty() {
            info!(records = ds.len(), "bundled dataset loaded");
        } else {
            warn!(
                records = ds.len(),
                drifted = drifted.len(),
                ad_ids = ?drifted.iter().map(|r| r.ad_id.as_str()).collect::<Vec<_>>(),
                "stored ctr/cpc differ from clicks/impressions/spend; stored values are used"
            );
        }
        Ok(ds)
    }

    pub fn from_records(records: Vec<AdRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[AdRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose stored `ctr`/`cpc` disagree with the counts they summarize.
    pub fn drift(&self) -> Vec<&AdRecord> {
        self.records
            .iter()
            .filter(|r| {
                let off = |stored: f64, derived: Option<f64>| {
                    derived.is_some_and(|d| (stored - d).abs() > DRIFT_EPSILON)
                };
                off(r.ctr, r.derived_ctr()) || off(r.cpc, r.derived_cpc())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_decodes() {
        let ds = Dataset::bundled().unwrap();
        assert_eq!(ds.len(), 21);
        assert!(ds.records().iter().all(|r| r.date.format("%Y").to_string() == "2024"));
    }

    #[test]
    fn bundled_dataset_has_no_drift() {
        let ds = Dataset::bundled().unwrap();
        assert!(ds.drift().is_empty());
    }

    #[test]
    fn drift_is_detected() {
        let mut ds = Dataset::bundled().unwrap();
        ds.records[0].ctr = 9.9;
        let drifted = ds.drift();
        assert_eq!(drifted.len(), 1);
        assert_eq!(drifted[0].ad_id, "ad_001");
    }
}
