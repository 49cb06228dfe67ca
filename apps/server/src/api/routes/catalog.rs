//! Drug catalog API Routes

use crate::api::handlers::{list_companies, list_drugs, statistics, table_config};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/drugs", get(list_drugs))
        .route("/table-config", get(table_config))
        .route("/companies", get(list_companies))
        .route("/statistics", get(statistics))
}
