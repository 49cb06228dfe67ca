//! Drug Inventory - catalog API server
//!
//! Read-only REST backend over a drug catalog:
//! - Validated, filtered, sorted and paginated drug listings
//! - Company list and catalog-wide statistics
//! - Static table configuration for the browser client
//!
//! Records live in PostgreSQL (or in memory for tests and demos) behind the
//! [`db::DrugStore`] trait.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod request_context;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
