//! Timecard engine for weekly phase-code reporting.
//!
//! This crate ingests per-job punch-clock CSV exports and produces two
//! weekly reports: a phase/cost-code timesheet with quarter-hour-rounded
//! standard and overtime hours per weekday, and a reconstructed daily
//! punch table (time-in, lunch-out, lunch-in, time-out) derived from the
//! raw, unordered clock timestamps.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod render;
