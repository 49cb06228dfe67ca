//! PostgreSQL implementation of [`DrugStore`]

use super::query_builder::{BindValue, DrugQueryBuilder};
use super::traits::{DrugFilter, DrugSort, DrugStore, LaunchDateExtreme};
use crate::{
    metrics::observe_store_query,
    models::{Drug, NewDrug},
    Error, Result,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Postgres error code for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Clone)]
pub struct PostgresDrugStore {
    pool: PgPool,
}

impl PostgresDrugStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl DrugStore for PostgresDrugStore {
    async fn find_page(
        &self,
        filter: &DrugFilter,
        sort: DrugSort,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Drug>> {
        let (sql, bind_values) = DrugQueryBuilder::new(filter)
            .sort(sort)
            .page(skip, limit)
            .build_sql();

        observe_store_query("find_page", async {
            let mut query = sqlx::query_as::<_, Drug>(&sql);
            for value in bind_values {
                query = match value {
                    BindValue::Text(v) => query.bind(v),
                    BindValue::Int(v) => query.bind(v),
                };
            }
            query.fetch_all(&self.pool).await.map_err(Error::Database)
        })
        .await
    }

    async fn count(&self, filter: &DrugFilter) -> Result<u64> {
        let (sql, bind_values) = DrugQueryBuilder::new(filter).build_count_sql();

        observe_store_query("count", async {
            let mut query = sqlx::query_scalar::<_, i64>(&sql);
            for value in bind_values {
                query = match value {
                    BindValue::Text(v) => query.bind(v),
                    BindValue::Int(v) => query.bind(v),
                };
            }
            let total = query.fetch_one(&self.pool).await.map_err(Error::Database)?;
            Ok(u64::try_from(total).unwrap_or(0))
        })
        .await
    }

    async fn distinct_companies(&self) -> Result<Vec<String>> {
        observe_store_query("distinct_companies", async {
            sqlx::query_scalar::<_, String>(
                r#"SELECT DISTINCT company FROM drugs ORDER BY company COLLATE "C""#,
            )
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)
        })
        .await
    }

    async fn launch_date_extreme(
        &self,
        which: LaunchDateExtreme,
    ) -> Result<Option<DateTime<Utc>>> {
        let (operation, sql) = match which {
            LaunchDateExtreme::Oldest => ("oldest_launch", "SELECT MIN(launch_date) FROM drugs"),
            LaunchDateExtreme::Newest => ("newest_launch", "SELECT MAX(launch_date) FROM drugs"),
        };

        observe_store_query(operation, async {
            sqlx::query_scalar::<_, Option<DateTime<Utc>>>(sql)
                .fetch_one(&self.pool)
                .await
                .map_err(Error::Database)
        })
        .await
    }

    async fn replace_all(&self, drugs: &[NewDrug]) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM drugs").execute(&mut *tx).await?;

        for drug in drugs {
            let inserted = sqlx::query(
                "INSERT INTO drugs (code, generic_name, brand_name, company, launch_date) \
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(&drug.code)
            .bind(&drug.generic_name)
            .bind(&drug.brand_name)
            .bind(&drug.company)
            .bind(drug.launch_date)
            .execute(&mut *tx)
            .await;

            if let Err(e) = inserted {
                if is_unique_violation(&e) {
                    return Err(Error::DuplicateCode(drug.code.clone()));
                }
                return Err(Error::Database(e));
            }
        }

        tx.commit().await?;

        tracing::info!(count = drugs.len(), "Replaced drug collection");
        Ok(drugs.len() as u64)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .and_then(|db| db.code())
        .map(|code| code == UNIQUE_VIOLATION)
        .unwrap_or(false)
}
