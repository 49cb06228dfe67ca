//! Drug records as stored, as seeded, and as returned by the API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::iso_timestamp;

/// A drug record as held by the store.
///
/// `id` is the store's record identity. It only serves as the ordering
/// tie-break and never leaves the service layer.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Drug {
    pub id: i64,
    pub code: String,
    pub generic_name: String,
    pub brand_name: String,
    pub company: String,
    pub launch_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A drug record to be inserted by maintenance tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewDrug {
    #[validate(length(min = 1, message = "code is required"))]
    pub code: String,
    #[validate(length(min = 1, message = "genericName is required"))]
    pub generic_name: String,
    #[validate(length(min = 1, message = "brandName is required"))]
    pub brand_name: String,
    #[validate(length(min = 1, message = "company is required"))]
    pub company: String,
    pub launch_date: DateTime<Utc>,
}

/// Response shape of a single drug in a listing.
///
/// `id` is the 1-based rank of the record in the filtered and sorted result
/// set, not a stable key: it shifts whenever the data, filter, sort or page
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrugDto {
    pub id: u64,
    pub code: String,
    pub name: String,
    pub company: String,
    pub launch_date: String,
}

impl DrugDto {
    /// Build the response shape for the record at 0-based absolute `position`.
    pub fn from_ranked(drug: &Drug, position: u64) -> Self {
        Self {
            id: position + 1,
            code: drug.code.clone(),
            name: display_name(&drug.generic_name, &drug.brand_name),
            company: drug.company.clone(),
            launch_date: iso_timestamp(&drug.launch_date),
        }
    }
}

/// `"<generic> (<brand>)"`
pub fn display_name(generic_name: &str, brand_name: &str) -> String {
    format!("{generic_name} ({brand_name})")
}
