//! Core domain model for the sales KPI pipeline.
//!
//! Defines the typed sales record and its categorical vocabularies, the
//! classification and date-parsing rules used to build records from raw
//! input, the shared error type, and display formatting helpers.

pub mod classify;
pub mod dates;
pub mod error;
pub mod formatting;
pub mod models;
