//! Whole-catalog read endpoints

use axum::extract::State;

use crate::{
    api::response::ApiResponse,
    models::{Statistics, TableConfiguration},
    state::AppState,
    Result,
};

/// `GET /api/table-config`
pub async fn table_config(
    State(state): State<AppState>,
) -> ApiResponse<&'static TableConfiguration> {
    ApiResponse::ok(state.statistics.table_configuration())
}

/// `GET /api/companies`
pub async fn list_companies(State(state): State<AppState>) -> Result<ApiResponse<Vec<String>>> {
    let companies = state.statistics.companies().await?;
    Ok(ApiResponse::ok(companies))
}

/// `GET /api/statistics`
pub async fn statistics(State(state): State<AppState>) -> Result<ApiResponse<Statistics>> {
    let statistics = state.statistics.statistics().await?;
    Ok(ApiResponse::ok(statistics))
}
