//! Core traits for drug record storage backends

use crate::{
    models::{Drug, NewDrug},
    Result,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Predicate over drug records.
///
/// `company` is an exact match. `search` is a case-insensitive literal
/// substring match against generic name, brand name, company or code (any
/// of the four). Both conditions must hold when both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrugFilter {
    pub company: Option<String>,
    pub search: Option<String>,
}

impl DrugFilter {
    /// Build a filter, treating empty strings as "no condition".
    pub fn new(company: Option<&str>, search: Option<&str>) -> Self {
        Self {
            company: company.filter(|c| !c.is_empty()).map(str::to_string),
            search: search.filter(|s| !s.is_empty()).map(str::to_string),
        }
    }

    pub fn matches(&self, drug: &Drug) -> bool {
        if let Some(company) = &self.company {
            if &drug.company != company {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let hit = [
                &drug.generic_name,
                &drug.brand_name,
                &drug.company,
                &drug.code,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }
        true
    }
}

/// Stored field a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Code,
    GenericName,
    Company,
    LaunchDate,
}

impl SortColumn {
    pub fn column_name(self) -> &'static str {
        match self {
            SortColumn::Code => "code",
            SortColumn::GenericName => "generic_name",
            SortColumn::Company => "company",
            SortColumn::LaunchDate => "launch_date",
        }
    }

    pub fn is_text(self) -> bool {
        !matches!(self, SortColumn::LaunchDate)
    }
}

/// Primary ordering of a listing. Every backend breaks ties by record
/// identity, ascending, so equal keys come back in a reproducible order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrugSort {
    pub column: SortColumn,
    pub ascending: bool,
}

/// Which end of the launch-date range to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchDateExtreme {
    Oldest,
    Newest,
}

/// Storage operations behind the listing and statistics services.
///
/// Implementations are injected into the services at construction; there is
/// no process-wide connection. Every read is independent, so callers may
/// issue several concurrently.
#[async_trait]
pub trait DrugStore: Send + Sync {
    /// Records matching `filter`, ordered by `sort` then record identity,
    /// skipping `skip` and returning at most `limit`.
    async fn find_page(
        &self,
        filter: &DrugFilter,
        sort: DrugSort,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Drug>>;

    /// Number of records matching `filter`, ignoring pagination.
    async fn count(&self, filter: &DrugFilter) -> Result<u64>;

    /// Distinct company names, ascending in byte order.
    async fn distinct_companies(&self) -> Result<Vec<String>>;

    /// Earliest or latest launch date, `None` when the collection is empty.
    async fn launch_date_extreme(&self, which: LaunchDateExtreme)
        -> Result<Option<DateTime<Utc>>>;

    /// Atomically replace the whole collection. Maintenance tooling only.
    ///
    /// # Errors
    /// * `DuplicateCode` - two records share a code
    async fn replace_all(&self, drugs: &[NewDrug]) -> Result<u64>;

    /// Cheap liveness probe of the backing store.
    async fn ping(&self) -> Result<()>;
}
