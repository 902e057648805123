//! Data layer for the sales KPI pipeline.
//!
//! Responsible for splitting raw CSV text into header-keyed records,
//! validating and normalizing them into typed sales records, computing
//! KPI aggregates, and re-exporting the clean set as CSV.

pub mod aggregator;
pub mod analysis;
pub mod cleaner;
pub mod export;
pub mod parser;

pub use sales_core as core;
