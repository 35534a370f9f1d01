//! Report calculations for the timecard engine.
//!
//! This module contains the quarter-hour rounder, the standard/overtime
//! daily split, the weekly phase-sheet aggregation, and the punch-schedule
//! reconstruction.

mod daily_split;
mod phase_sheet;
mod punch_schedule;
mod quarter_hour;

pub use daily_split::{DEFAULT_STANDARD_HOURS_CAP, DailySplit, split_standard_overtime};
pub use phase_sheet::{
    AggregatorOptions, PhaseRow, PhaseSheet, WeekdayPolicy, build_job_row, build_phase_sheet,
};
pub use punch_schedule::{
    PairingStrategy, PunchSchedule, PunchSet, WeekdayPunches, reconstruct_punch_schedule,
};
pub use quarter_hour::round_to_quarter_hour;
