//! Catalog-wide aggregate reads

use crate::db::{DrugFilter, DrugStore, LaunchDateExtreme};
use crate::models::{iso_timestamp, Statistics, TableConfiguration, DEFAULT_TABLE_CONFIGURATION};
use crate::Result;
use std::sync::Arc;

#[derive(Clone)]
pub struct StatisticsService {
    store: Arc<dyn DrugStore>,
}

impl StatisticsService {
    pub fn new(store: Arc<dyn DrugStore>) -> Self {
        Self { store }
    }

    /// Distinct company names, ascending. Empty for an empty catalog.
    pub async fn companies(&self) -> Result<Vec<String>> {
        self.store.distinct_companies().await
    }

    pub async fn statistics(&self) -> Result<Statistics> {
        let everything = DrugFilter::default();
        let (total_drugs, companies, oldest, newest) = tokio::try_join!(
            self.store.count(&everything),
            self.store.distinct_companies(),
            self.store.launch_date_extreme(LaunchDateExtreme::Oldest),
            self.store.launch_date_extreme(LaunchDateExtreme::Newest),
        )?;

        let total_companies = companies.len() as u64;
        let average_drugs_per_company = if total_companies > 0 {
            total_drugs as f64 / total_companies as f64
        } else {
            0.0
        };

        Ok(Statistics {
            total_drugs,
            total_companies,
            average_drugs_per_company,
            oldest_drug: oldest.as_ref().map(iso_timestamp),
            newest_drug: newest.as_ref().map(iso_timestamp),
        })
    }

    /// Static column, sort, paging and filter descriptor for the table view.
    pub fn table_configuration(&self) -> &'static TableConfiguration {
        &DEFAULT_TABLE_CONFIGURATION
    }
}
