//! Raw CSV parsing.
//!
//! Splits delimited text into loosely-typed records keyed by the header
//! row. No validation happens here; every value stays a string and the
//! cleaner decides what survives.
//!
//! There is no quoting or escaping support: lines are split on bare
//! commas, so a field containing a comma will be mis-split. This is a
//! known limitation of the ingest format, kept deliberately so exported
//! files round-trip through the same rules.

use std::collections::HashMap;

use tracing::debug;

/// Expected ingest column names. Extra columns are carried through the
/// raw record but ignored by the cleaner.
pub const COL_DATE: &str = "fecha";
pub const COL_TIME_SLOT: &str = "franja";
pub const COL_PRODUCT: &str = "producto";
pub const COL_CATEGORY: &str = "familia";
pub const COL_UNITS: &str = "unidades";
pub const COL_UNIT_PRICE: &str = "precio_unitario";

/// One input line, keyed by header column name.
///
/// Values are trimmed but otherwise untouched; they may be empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    fields: HashMap<String, String>,
}

impl RawRecord {
    /// Value for `column`, or the empty string when the column is absent.
    ///
    /// A missing column and an empty field are indistinguishable on
    /// purpose: the cleaner treats both as "no value".
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    #[cfg(test)]
    pub(crate) fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// Split raw CSV text into records, using the first line as the header.
///
/// Header names and field values are trimmed. Fields are paired with
/// header names positionally; missing trailing fields become the empty
/// string and surplus values beyond the header width are dropped.
///
/// Empty or whitespace-only input yields an empty `Vec`, not an error;
/// an empty raw set flows through the rest of the pipeline as a valid
/// (empty) result.
pub fn parse(text: &str) -> Vec<RawRecord> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        debug!("parse: input is empty after trimming");
        return Vec::new();
    }

    let mut lines = trimmed.lines();
    let headers: Vec<String> = lines
        .next()
        .unwrap_or_default()
        .split(',')
        .map(|h| h.trim().to_string())
        .collect();

    let records: Vec<RawRecord> = lines
        .map(|line| {
            let values: Vec<&str> = line.split(',').map(str::trim).collect();
            let fields = headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    let value = values.get(i).copied().unwrap_or("");
                    (header.clone(), value.to_string())
                })
                .collect();
            RawRecord { fields }
        })
        .collect();

    debug!("parse: {} header columns, {} rows", headers.len(), records.len());
    records
}

// ── Tests ─────────────────────────────────────────────────────────────────────
