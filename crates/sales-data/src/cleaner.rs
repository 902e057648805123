//! Row validation, normalization and deduplication.
//!
//! Each raw record either becomes a typed [`SalesRecord`] or is dropped.
//! Drops are silent by contract: a rejected row is logged at `debug`
//! level but never surfaces as an error, and only the aggregate
//! raw-vs-clean row counts reveal that anything was discarded.

use std::collections::HashSet;

use sales_core::classify::{classify_category, classify_time_slot, normalize_product};
use sales_core::dates::parse_sale_date;
use sales_core::models::SalesRecord;
use tracing::debug;

use crate::parser::{
    RawRecord, COL_CATEGORY, COL_DATE, COL_PRODUCT, COL_TIME_SLOT, COL_UNITS, COL_UNIT_PRICE,
};

// ── Row outcome ───────────────────────────────────────────────────────────────

/// Why an individual row was rejected. Internal only; callers observe
/// rejection solely through the row counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RejectReason {
    BadDate,
    EmptyProduct,
    UnknownTimeSlot,
    UnknownCategory,
    BadUnits,
    BadUnitPrice,
}

/// Validate and normalize a single row.
///
/// Checks short-circuit in a fixed order: date, product, time slot,
/// category, quantities. The amount is always recomputed from units and
/// unit price; an `importe` column in the input, if any, is ignored.
fn clean_row(row: &RawRecord) -> Result<SalesRecord, RejectReason> {
    let date = parse_sale_date(row.get(COL_DATE)).ok_or(RejectReason::BadDate)?;

    let product = normalize_product(row.get(COL_PRODUCT)).ok_or(RejectReason::EmptyProduct)?;

    let time_slot =
        classify_time_slot(row.get(COL_TIME_SLOT)).ok_or(RejectReason::UnknownTimeSlot)?;

    let category =
        classify_category(row.get(COL_CATEGORY)).ok_or(RejectReason::UnknownCategory)?;

    let units: u32 = row
        .get(COL_UNITS)
        .parse()
        .ok()
        .filter(|&u| u > 0)
        .ok_or(RejectReason::BadUnits)?;

    let unit_price: f64 = row
        .get(COL_UNIT_PRICE)
        .parse()
        .ok()
        .filter(|&p: &f64| p > 0.0 && p.is_finite())
        .ok_or(RejectReason::BadUnitPrice)?;

    Ok(SalesRecord::new(
        date, time_slot, product, category, units, unit_price,
    ))
}

/// Structural deduplication key over all seven record fields.
///
/// Every numeric field is positive and finite, so the display form is
/// unambiguous and two records share a key exactly when they are
/// field-wise equal.
fn record_key(record: &SalesRecord) -> String {
    format!(
        "{}|{}|{}|{}|{}|{}|{}",
        record.date,
        record.time_slot,
        record.product,
        record.category,
        record.units,
        record.unit_price,
        record.amount,
    )
}

/// Clean a sequence of raw records into validated, deduplicated
/// [`SalesRecord`]s.
///
/// Order of first occurrence is preserved. Rows that fail any validation
/// rule are dropped; exact field-wise duplicates after the first
/// occurrence are dropped too. An empty result is valid, not an error.
pub fn clean(rows: &[RawRecord]) -> Vec<SalesRecord> {
    let mut cleaned: Vec<SalesRecord> = Vec::new();
    let mut rejected = 0usize;

    for (index, row) in rows.iter().enumerate() {
        match clean_row(row) {
            Ok(record) => cleaned.push(record),
            Err(reason) => {
                rejected += 1;
                debug!("row {} dropped: {:?}", index, reason);
            }
        }
    }

    // Second pass: drop exact duplicates, first occurrence wins.
    let mut seen: HashSet<String> = HashSet::new();
    let before_dedup = cleaned.len();
    cleaned.retain(|record| seen.insert(record_key(record)));

    debug!(
        "clean: {} rows in, {} rejected, {} duplicates, {} out",
        rows.len(),
        rejected,
        before_dedup - cleaned.len(),
        cleaned.len(),
    );

    cleaned
}

// ── Tests ─────────────────────────────────────────────────────────────────────
