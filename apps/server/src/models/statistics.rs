use serde::{Deserialize, Serialize};

/// Whole-collection aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_drugs: u64,
    pub total_companies: u64,
    /// `total_drugs / total_companies`, or 0 for an empty collection.
    pub average_drugs_per_company: f64,
    /// Earliest launch date, `null` for an empty collection.
    pub oldest_drug: Option<String>,
    /// Latest launch date, `null` for an empty collection.
    pub newest_drug: Option<String>,
}
