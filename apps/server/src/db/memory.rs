//! In-process implementation of [`DrugStore`]
//!
//! Backs the `memory` storage backend and the test-suite. Filtering, ordering
//! and the identity tie-break behave exactly like the Postgres store, with
//! text compared in byte order.

use super::traits::{DrugFilter, DrugSort, DrugStore, LaunchDateExtreme, SortColumn};
use crate::{
    models::{Drug, NewDrug},
    Error, Result,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};
use std::sync::RwLock;

#[derive(Default)]
pub struct InMemoryDrugStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    drugs: Vec<Drug>,
    next_id: i64,
}

impl InMemoryDrugStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with `drugs`, identities assigned in order.
    pub fn with_drugs(drugs: &[NewDrug]) -> Result<Self> {
        let store = Self::new();
        store.load(drugs)?;
        Ok(store)
    }

    fn load(&self, drugs: &[NewDrug]) -> Result<u64> {
        let mut seen = HashSet::new();
        for drug in drugs {
            if !seen.insert(drug.code.as_str()) {
                return Err(Error::DuplicateCode(drug.code.clone()));
            }
        }

        let mut inner = self.write()?;
        let now = Utc::now();
        let mut next_id = inner.next_id;
        let records = drugs
            .iter()
            .map(|d| {
                next_id += 1;
                Drug {
                    id: next_id,
                    code: d.code.clone(),
                    generic_name: d.generic_name.clone(),
                    brand_name: d.brand_name.clone(),
                    company: d.company.clone(),
                    launch_date: d.launch_date,
                    created_at: now,
                    updated_at: now,
                }
            })
            .collect();

        inner.drugs = records;
        inner.next_id = next_id;
        Ok(drugs.len() as u64)
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| Error::Internal("in-memory drug store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| Error::Internal("in-memory drug store lock poisoned".to_string()))
    }
}

fn compare(a: &Drug, b: &Drug, sort: DrugSort) -> Ordering {
    let primary = match sort.column {
        SortColumn::Code => a.code.cmp(&b.code),
        SortColumn::GenericName => a.generic_name.cmp(&b.generic_name),
        SortColumn::Company => a.company.cmp(&b.company),
        SortColumn::LaunchDate => a.launch_date.cmp(&b.launch_date),
    };
    let primary = if sort.ascending {
        primary
    } else {
        primary.reverse()
    };
    primary.then_with(|| a.id.cmp(&b.id))
}

#[async_trait]
impl DrugStore for InMemoryDrugStore {
    async fn find_page(
        &self,
        filter: &DrugFilter,
        sort: DrugSort,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Drug>> {
        let inner = self.read()?;
        let mut matching: Vec<&Drug> = inner.drugs.iter().filter(|d| filter.matches(d)).collect();
        matching.sort_by(|a, b| compare(a, b, sort));

        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(matching
            .into_iter()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count(&self, filter: &DrugFilter) -> Result<u64> {
        let inner = self.read()?;
        Ok(inner.drugs.iter().filter(|d| filter.matches(d)).count() as u64)
    }

    async fn distinct_companies(&self) -> Result<Vec<String>> {
        let inner = self.read()?;
        let companies: BTreeSet<&str> = inner.drugs.iter().map(|d| d.company.as_str()).collect();
        Ok(companies.into_iter().map(str::to_string).collect())
    }

    async fn launch_date_extreme(
        &self,
        which: LaunchDateExtreme,
    ) -> Result<Option<DateTime<Utc>>> {
        let inner = self.read()?;
        let dates = inner.drugs.iter().map(|d| d.launch_date);
        Ok(match which {
            LaunchDateExtreme::Oldest => dates.min(),
            LaunchDateExtreme::Newest => dates.max(),
        })
    }

    async fn replace_all(&self, drugs: &[NewDrug]) -> Result<u64> {
        self.load(drugs)
    }

    async fn ping(&self) -> Result<()> {
        self.read().map(|_| ())
    }
}
