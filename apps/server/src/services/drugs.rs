//! Drug listing service

use crate::db::{DrugFilter, DrugSort, DrugStore};
use crate::models::DrugDto;
use crate::services::query::{DrugQuery, MAX_LIMIT};
use crate::Result;
use serde::Serialize;
use std::sync::Arc;

/// Page metadata returned next to a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub items_per_page: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl Pagination {
    fn new(page: u64, limit: u64, total_items: u64) -> Self {
        let total_pages = total_items.div_ceil(limit);
        Self {
            current_page: page,
            total_pages,
            total_items,
            items_per_page: limit,
            has_next_page: page < total_pages,
            has_previous_page: page > 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrugPage {
    pub data: Vec<DrugDto>,
    pub pagination: Pagination,
}

#[derive(Clone)]
pub struct DrugService {
    store: Arc<dyn DrugStore>,
}

impl DrugService {
    pub fn new(store: Arc<dyn DrugStore>) -> Self {
        Self { store }
    }

    /// One page of drugs matching `query`.
    ///
    /// `page` and `limit` are clamped to `>= 1` and `1..=100` whatever the
    /// caller passes. A page past the end is an empty `data` with accurate
    /// totals.
    #[tracing::instrument(skip(self), fields(page = query.page, limit = query.limit))]
    pub async fn list(&self, query: &DrugQuery) -> Result<DrugPage> {
        let page = query.page.max(1) as u64;
        let limit = query.limit.clamp(1, MAX_LIMIT) as u64;
        let skip = (page - 1).saturating_mul(limit);

        let filter = DrugFilter::new(query.company.as_deref(), query.search.as_deref());
        let sort = DrugSort {
            column: query.sort_by.column(),
            ascending: query.sort_order.is_ascending(),
        };

        let (drugs, total_items) = tokio::try_join!(
            self.store.find_page(&filter, sort, skip, limit),
            self.store.count(&filter),
        )?;

        let data = drugs
            .iter()
            .enumerate()
            .map(|(index, drug)| DrugDto::from_ranked(drug, skip.saturating_add(index as u64)))
            .collect();

        tracing::debug!(total_items, "Listed drugs");

        Ok(DrugPage {
            data,
            pagination: Pagination::new(page, limit, total_items),
        })
    }
}
