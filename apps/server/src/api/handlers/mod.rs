//! Request handlers for API endpoints
//!
//! Handlers extract the request, call one service and wrap the result in the
//! response envelope. Errors convert through [`crate::Error`].

pub mod catalog;
pub mod drugs;
pub mod health;
pub mod metrics;

pub use catalog::{list_companies, statistics, table_config};
pub use drugs::list_drugs;
pub use health::health_check;
pub use metrics::metrics_handler;
