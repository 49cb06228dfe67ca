//! Metrics collection for the drug inventory server
//!
//! This module defines and manages Prometheus metrics for monitoring the API
//! and its record store.

use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, register_int_gauge_vec, HistogramVec,
    IntCounterVec, IntGaugeVec,
};
use std::future::Future;
use std::time::Instant;

lazy_static! {
    // HTTP Request Metrics

    /// Total HTTP requests by method, path, and status
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "drug_inventory_http_requests_total",
        "Total number of HTTP requests",
        &["method", "path", "status"]
    )
    .expect("Failed to register HTTP_REQUESTS_TOTAL");

    /// HTTP request duration in seconds
    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "drug_inventory_http_request_duration_seconds",
        "HTTP request duration in seconds",
        &["method", "path"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    )
    .expect("Failed to register HTTP_REQUEST_DURATION_SECONDS");

    /// In-flight HTTP requests
    pub static ref HTTP_REQUESTS_IN_FLIGHT: IntGaugeVec = register_int_gauge_vec!(
        "drug_inventory_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
        &["method", "path"]
    )
    .expect("Failed to register HTTP_REQUESTS_IN_FLIGHT");

    // Store Metrics

    /// Record store query duration
    pub static ref STORE_QUERY_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "drug_inventory_store_query_duration_seconds",
        "Record store query duration in seconds",
        &["operation"],
        vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0, 10.0]
    )
    .expect("Failed to register STORE_QUERY_DURATION_SECONDS");

    /// Record store query errors
    pub static ref STORE_QUERY_ERRORS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "drug_inventory_store_query_errors_total",
        "Total number of record store query errors",
        &["operation"]
    )
    .expect("Failed to register STORE_QUERY_ERRORS_TOTAL");
}

const KNOWN_PATHS: &[&str] = &[
    "/api/drugs",
    "/api/table-config",
    "/api/companies",
    "/api/statistics",
    "/health",
    "/metrics",
];

/// Path label for metrics. Only exact route paths keep their label; anything
/// the router would not match, trailing-slash variants included, is `other`.
pub fn sanitize_path(path: &str) -> String {
    if KNOWN_PATHS.contains(&path) {
        path.to_string()
    } else {
        "other".to_string()
    }
}

/// Time a store operation and count its failures.
pub async fn observe_store_query<T, F>(operation: &str, query: F) -> crate::Result<T>
where
    F: Future<Output = crate::Result<T>>,
{
    let start = Instant::now();
    let result = query.await;

    STORE_QUERY_DURATION_SECONDS
        .with_label_values(&[operation])
        .observe(start.elapsed().as_secs_f64());
    if result.is_err() {
        STORE_QUERY_ERRORS_TOTAL
            .with_label_values(&[operation])
            .inc();
    }

    result
}
