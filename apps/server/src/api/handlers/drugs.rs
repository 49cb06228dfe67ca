//! `GET /api/drugs`

use axum::{
    extract::{Query, State},
    Extension,
};
use std::collections::HashMap;

use crate::{
    api::response::ApiResponse,
    models::DrugDto,
    request_context::RequestContext,
    services::DrugQuery,
    state::AppState,
    Error, Result,
};

pub async fn list_drugs(
    State(state): State<AppState>,
    context: Option<Extension<RequestContext>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<ApiResponse<Vec<DrugDto>>> {
    let query = DrugQuery::from_params(&params).map_err(|issues| {
        tracing::warn!(
            request_id = context.as_ref().map(|c| c.request_id.as_str()),
            issues = %issues,
            "Rejected drug listing query"
        );
        Error::Validation(issues)
    })?;

    let page = state.drugs.list(&query).await?;
    Ok(ApiResponse::paginated(page.data, page.pagination))
}
