//! Sale-date parsing.
//!
//! The `fecha` column shows up in several shapes depending on which tool
//! exported the file: plain ISO dates, slash-separated dates, and full
//! timestamps. Everything is normalized down to a calendar date; any
//! time-of-day component is discarded.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::debug;

/// Attempt to parse a raw `fecha` value into a calendar date.
///
/// Tries, in order: date-only patterns, date-time patterns (time dropped),
/// then RFC 3339. Returns `None` when nothing matches.
pub fn parse_sale_date(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%d-%m-%Y"];
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            return Some(date);
        }
    }

    const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt.date());
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }

    debug!("could not parse date value \"{}\"", value);
    None
}

// ── Tests ─────────────────────────────────────────────────────────────────────
