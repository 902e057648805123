//! Rendering of a pipeline outcome for stdout.
//!
//! Two shapes: a human-readable text report, and a JSON document for
//! chart-consuming front-ends.

use sales_core::formatting::format_currency;
use sales_core::models::KpiSummary;
use sales_data::aggregator::top_products;
use sales_data::analysis::PipelineOutcome;
use serde::Serialize;

/// JSON shape emitted by `--format json`.
///
/// `top_products` is an ordered array of `[name, revenue]` pairs so the
/// ranking survives serialization; the groupings inside `summary`
/// serialize as objects.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub raw_rows: usize,
    pub clean_rows: usize,
    pub summary: &'a KpiSummary,
    pub top_products: Vec<(String, f64)>,
}

impl<'a> JsonReport<'a> {
    pub fn new(outcome: &'a PipelineOutcome, top_n: usize) -> Self {
        Self {
            raw_rows: outcome.raw_rows,
            clean_rows: outcome.clean_rows,
            summary: &outcome.summary,
            top_products: top_products(&outcome.summary, top_n),
        }
    }
}

/// Build the human-readable text report.
pub fn render_text(outcome: &PipelineOutcome, top_n: usize) -> String {
    let summary = &outcome.summary;
    let mut out = String::new();

    out.push_str(&format!(
        "Raw rows: {} | Clean rows: {}\n\n",
        outcome.raw_rows, outcome.clean_rows
    ));

    out.push_str(&format!(
        "Revenue: {}\nUnits:   {}\n",
        format_currency(summary.total_revenue),
        summary.total_units
    ));

    out.push_str("\nRevenue by time slot\n");
    for (slot, revenue) in summary.by_time_slot.iter() {
        out.push_str(&format!(
            "  {:<12} {:>14}\n",
            slot.label(),
            format_currency(*revenue)
        ));
    }

    out.push_str("\nRevenue by category\n");
    for (category, revenue) in summary.by_category.iter() {
        out.push_str(&format!(
            "  {:<12} {:>14}\n",
            category.label(),
            format_currency(*revenue)
        ));
    }

    out.push_str(&format!("\nTop {} products\n", top_n));
    for (rank, (product, revenue)) in top_products(summary, top_n).iter().enumerate() {
        out.push_str(&format!(
            "  {}. {:<16} {:>14}\n",
            rank + 1,
            product,
            format_currency(*revenue)
        ));
    }

    out
}

// ── Tests ──────────────────────────────────────────────────────────────────────
