//! CSV re-export of the clean set.
//!
//! Symmetric with the parser: comma-joined fields, no quoting. A product
//! name containing a comma would break the format, but product names are
//! ingested through the same comma-split rules, so none can.

use sales_core::models::SalesRecord;

/// Column order of the exported file. The derived amount is appended
/// after the ingest columns under the name `importe`.
const EXPORT_HEADER: &str = "fecha,franja,producto,familia,unidades,precio_unitario,importe";

/// Render the clean set as CSV text: a header line, then one line per
/// record in clean-set order. Enum fields use their canonical labels.
pub fn to_csv(records: &[SalesRecord]) -> String {
    let mut out = String::from(EXPORT_HEADER);
    out.push('\n');

    for record in records {
        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            record.date,
            record.time_slot,
            record.product,
            record.category,
            record.units,
            record.unit_price,
            record.amount,
        ));
    }

    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
