//! Core data models for the timecard engine.
//!
//! This module contains all the domain models used throughout the engine.

mod clock_event;
mod elapsed;
mod ledger;
mod report_week;

pub use clock_event::ClockEvent;
pub use elapsed::Elapsed;
pub use ledger::{DayLedger, JobLedger};
pub use report_week::{REPORT_WEEK, REPORT_WEEK_LABELS, report_index};
