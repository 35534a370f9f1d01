//! Ledger parsing for punch-clock export documents.
//!
//! The [`parse_document`] entry point converts the raw text of one export
//! into a structured [`JobLedger`](crate::models::JobLedger); the token
//! parsers handle the individual date, time, duration, and money shapes.

mod document;
mod tokens;

pub use document::parse_document;
pub use tokens::{is_export_date, parse_clock_time, parse_export_date, parse_money};
