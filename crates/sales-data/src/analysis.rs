//! Pipeline orchestrator.
//!
//! Threads the three stages together (parse → clean → aggregate) with no
//! ambient shared state, and handles the one fatal failure mode: an
//! input file that cannot be read.

use std::path::Path;

use sales_core::error::{Result, SalesError};
use sales_core::models::{KpiSummary, SalesRecord};
use tracing::info;

use crate::aggregator::aggregate;
use crate::cleaner::clean;
use crate::parser::parse;

/// Everything one pipeline run produces.
///
/// `raw_rows` and `clean_rows` are the only visible trace of dropped
/// rows; individual rejections are never reported.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// The validated, deduplicated clean set, in first-occurrence order.
    pub records: Vec<SalesRecord>,
    /// KPI aggregates over `records`.
    pub summary: KpiSummary,
    /// Number of data rows in the raw input (header excluded).
    pub raw_rows: usize,
    /// Number of records that survived cleaning and deduplication.
    pub clean_rows: usize,
}

/// Run the full pipeline over raw CSV text.
///
/// Re-running on the same input always yields the same clean set and
/// summary.
pub fn run_pipeline(text: &str) -> PipelineOutcome {
    let raw = parse(text);
    let raw_rows = raw.len();

    let records = clean(&raw);
    let clean_rows = records.len();

    let summary = aggregate(&records);

    info!(
        "pipeline: {} raw rows, {} clean rows, revenue {:.2}",
        raw_rows, clean_rows, summary.total_revenue
    );

    PipelineOutcome {
        records,
        summary,
        raw_rows,
        clean_rows,
    }
}

/// Read the raw sales file, mapping I/O failure to the fatal error tier.
pub fn load_sales_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| SalesError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
