//! Sample catalog and catalog validation for seeding

use super::traits::{DrugFilter, DrugStore};
use crate::{models::NewDrug, Error, Result};
use std::collections::HashSet;
use validator::Validate;

const BUNDLED_CATALOG: &str = include_str!("../../data/seed_drugs.json");

/// The sample catalog shipped with the server.
pub fn bundled_catalog() -> Result<Vec<NewDrug>> {
    parse_catalog(BUNDLED_CATALOG)
}

/// Parse a JSON array of drug records and validate it.
pub fn parse_catalog(json: &str) -> Result<Vec<NewDrug>> {
    let drugs: Vec<NewDrug> = serde_json::from_str(json)
        .map_err(|e| Error::InvalidRecord(format!("catalog is not valid JSON: {e}")))?;
    validate_catalog(&drugs)?;
    Ok(drugs)
}

/// Every record has its required fields and no two records share a code.
pub fn validate_catalog(drugs: &[NewDrug]) -> Result<()> {
    let mut codes = HashSet::with_capacity(drugs.len());
    for (index, drug) in drugs.iter().enumerate() {
        drug.validate()
            .map_err(|e| Error::InvalidRecord(format!("record {index} ({}): {e}", drug.code)))?;
        if !codes.insert(drug.code.as_str()) {
            return Err(Error::DuplicateCode(drug.code.clone()));
        }
    }
    Ok(())
}

/// Load the bundled catalog into `store` unless it already holds records.
/// Returns the number of records inserted.
pub async fn seed_if_empty(store: &dyn DrugStore) -> Result<u64> {
    let existing = store.count(&DrugFilter::default()).await?;
    if existing > 0 {
        tracing::info!(existing, "Drug collection already populated, skipping seed");
        return Ok(0);
    }

    let inserted = store.replace_all(&bundled_catalog()?).await?;
    tracing::info!(inserted, "Seeded drug collection from bundled catalog");
    Ok(inserted)
}
