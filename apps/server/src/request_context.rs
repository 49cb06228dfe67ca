//! Per-request context injected by middleware.

/// Inserted into request extensions by
/// [`request_id_middleware`](crate::api::middleware::request_id_middleware).
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Server-assigned ID, also returned in `x-request-id`.
    pub request_id: String,
}
