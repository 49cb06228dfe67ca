//! Domain models for the drug catalog

pub mod drug;
pub mod statistics;
pub mod table;

use chrono::{DateTime, SecondsFormat, Utc};

pub use drug::{display_name, Drug, DrugDto, NewDrug};
pub use statistics::Statistics;
pub use table::{TableConfiguration, DEFAULT_TABLE_CONFIGURATION};

/// ISO-8601 UTC with millisecond precision, e.g. `2020-01-15T00:00:00.000Z`.
pub fn iso_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
