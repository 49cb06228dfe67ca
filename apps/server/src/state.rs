//! Shared application state handed to every handler

use std::sync::Arc;

use crate::{
    config::Config,
    db::{self, DrugStore},
    services::{DrugService, StatisticsService},
    Result,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub drugs: DrugService,
    pub statistics: StatisticsService,
}

impl AppState {
    /// Open the configured store, seed it when asked to, and build the
    /// services on top of it.
    pub async fn new(config: Config) -> Result<Self> {
        let store = db::open_store(&config).await?;
        if config.storage.seed_on_start {
            db::seed::seed_if_empty(store.as_ref()).await?;
        }
        Ok(Self::with_store(config, store))
    }

    /// State over an already-open store.
    pub fn with_store(config: Config, store: Arc<dyn DrugStore>) -> Self {
        Self {
            config: Arc::new(config),
            drugs: DrugService::new(store.clone()),
            statistics: StatisticsService::new(store),
        }
    }
}
