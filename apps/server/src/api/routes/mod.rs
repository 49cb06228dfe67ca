//! Route tables

pub mod catalog;
pub mod metrics;
