//! API layer - routes, handlers, and middleware

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;

use crate::{state::AppState, Error};
use axum::{extract::DefaultBodyLimit, http::Uri, routing::get, Router};

pub use response::ApiResponse;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    let max_body_size = state.config.server.max_request_body_size;
    let cors_origins = state.config.server.cors_origins.clone();

    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(routes::metrics::metrics_routes())
        .nest("/api", routes::catalog::catalog_routes())
        .fallback(route_not_found)
        .with_state(state)
        // Applied in reverse order: the body limit is outermost
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(middleware::cors(&cors_origins))
        .layer(middleware::compression())
        .layer(axum::middleware::from_fn(middleware::metrics_middleware))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(DefaultBodyLimit::max(max_body_size))
}

async fn route_not_found(uri: Uri) -> Error {
    Error::RouteNotFound(uri.to_string())
}
