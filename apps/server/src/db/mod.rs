//! Database layer - storage trait, backends and seeding

pub mod memory;
pub mod query_builder;
pub mod seed;
pub mod store;
pub mod traits;

pub use memory::InMemoryDrugStore;
pub use query_builder::DrugQueryBuilder;
pub use store::PostgresDrugStore;
pub use traits::{DrugFilter, DrugSort, DrugStore, LaunchDateExtreme, SortColumn};

use crate::config::{Config, DatabaseConfig, StorageBackend};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Embedded schema migrations (`apps/server/migrations`).
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Open a connection pool sized and timed by `config`.
pub async fn connect_pool(config: &DatabaseConfig) -> crate::Result<PgPool> {
    let statement_timeout_ms = config.statement_timeout_seconds * 1000;
    let options = PgConnectOptions::from_str(&config.url)?
        .options([("statement_timeout", statement_timeout_ms.to_string())]);

    let pool = PgPoolOptions::new()
        .min_connections(config.pool_min_size)
        .max_connections(config.pool_max_size)
        .acquire_timeout(Duration::from_secs(config.pool_timeout_seconds))
        .connect_with(options)
        .await?;

    tracing::info!(
        min_connections = config.pool_min_size,
        max_connections = config.pool_max_size,
        "Database pool ready"
    );
    Ok(pool)
}

/// Apply pending schema migrations.
pub async fn run_migrations(pool: &PgPool) -> crate::Result<()> {
    MIGRATOR.run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}

/// Open the configured storage backend. Postgres connects, and migrates when
/// `database.run_migrations` is set; memory starts empty.
pub async fn open_store(config: &Config) -> crate::Result<Arc<dyn DrugStore>> {
    match config.storage.backend {
        StorageBackend::Postgres => {
            let pool = connect_pool(&config.database).await?;
            if config.database.run_migrations {
                run_migrations(&pool).await?;
            }
            Ok(Arc::new(PostgresDrugStore::new(pool)))
        }
        StorageBackend::Memory => {
            tracing::info!("Using in-memory drug store");
            Ok(Arc::new(InMemoryDrugStore::new()))
        }
    }
}
