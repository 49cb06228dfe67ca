//! Business logic layer - query validation, listing and aggregates

pub mod drugs;
pub mod query;
pub mod statistics;

pub use drugs::{DrugPage, DrugService, Pagination};
pub use query::{DrugQuery, SortBy, SortOrder};
pub use statistics::StatisticsService;
