//! Weekly phase-sheet aggregation.
//!
//! Distributes each day's rounded hours into the Saturday-first weekday
//! columns as a standard/overtime split, one row per job, plus the fixed
//! leave rows and an independently-computed grand-total row.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{JobLedger, report_index};

use super::daily_split::{DEFAULT_STANDARD_HOURS_CAP, DailySplit, split_standard_overtime};
use super::quarter_hour::round_to_quarter_hour;

/// What to do when one job lands two day ledgers on the same weekday.
///
/// The legacy behavior silently overwrote the weekday cell, which loses
/// hours and is a suspected latent bug; summing is the safer alternative
/// but changes observable totals. Both are supported and the choice is an
/// explicit parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekdayPolicy {
    /// A later day ledger replaces the weekday cell (legacy behavior).
    #[default]
    Overwrite,
    /// Day ledgers on the same weekday sum into the cell.
    Accumulate,
}

/// Parameters for phase-sheet aggregation.
///
/// Replaces the legacy process-wide toggles (lookback enable, days-ago
/// offset) with explicit per-call configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatorOptions {
    /// Day ledgers dated before this cutoff are skipped. `None` disables
    /// the lookback window entirely.
    pub cutoff: Option<NaiveDate>,
    /// Same-weekday collision handling.
    pub weekday_policy: WeekdayPolicy,
    /// Cap on standard hours per day; the excess is overtime.
    pub standard_cap: Decimal,
    /// Equipment/job number stamped on every row.
    pub equipment_no: String,
    /// Phase code stamped on the fixed leave rows.
    pub leave_phase_code: String,
}

impl Default for AggregatorOptions {
    fn default() -> Self {
        AggregatorOptions {
            cutoff: None,
            weekday_policy: WeekdayPolicy::default(),
            standard_cap: DEFAULT_STANDARD_HOURS_CAP,
            equipment_no: "56.1077".to_string(),
            leave_phase_code: "10.010.0023".to_string(),
        }
    }
}

/// One row of the phase sheet: a job (or leave category) with its weekday
/// splits and row totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseRow {
    /// Human-readable description of the job or leave category.
    pub description: String,
    /// Equipment/job number.
    pub equipment_no: String,
    /// Phase/cost code.
    pub phase_code: String,
    /// Standard/overtime splits, Saturday-first.
    pub cells: [DailySplit; 7],
    /// Row totals, computed from the final cells.
    pub total: DailySplit,
}

impl PhaseRow {
    /// Creates a row with the given identity columns and no hours.
    pub fn empty(description: &str, equipment_no: &str, phase_code: &str) -> Self {
        PhaseRow {
            description: description.to_string(),
            equipment_no: equipment_no.to_string(),
            phase_code: phase_code.to_string(),
            cells: [DailySplit::ZERO; 7],
            total: DailySplit::ZERO,
        }
    }
}

/// The assembled weekly phase sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseSheet {
    /// One row per job with nonzero totals, in input order.
    pub rows: Vec<PhaseRow>,
    /// The fixed leave-category rows (no hours; filled in by hand).
    pub leave_rows: Vec<PhaseRow>,
    /// Per-column sums over all job rows, computed independently of the
    /// row totals.
    pub grand_total: PhaseRow,
}

/// Builds the weekly split row for one job.
///
/// Each day ledger's declared total duration (authoritative; event rows
/// are never re-summed) is rounded to the quarter hour, split at the
/// standard-hours cap, and placed in the Saturday-first weekday cell under
/// the configured [`WeekdayPolicy`]. Row totals come from the final cells,
/// so under [`WeekdayPolicy::Overwrite`] an overwritten day never leaks
/// into the totals.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use timecard_engine::calculation::{AggregatorOptions, build_job_row};
/// use timecard_engine::parser::parse_document;
///
/// let text = "\
/// \"JobA 10.010.0023\"
/// \"\",\"\",\"Mar 3, 2025\"
/// \"Total:     00:45:00               $31.13\"
/// ";
/// let job = parse_document(text).unwrap();
/// let row = build_job_row(&job, &AggregatorOptions::default());
///
/// // Mar 3, 2025 is a Monday: Saturday-first column index 2.
/// assert_eq!(row.cells[2].standard, Decimal::new(75, 2)); // 0.75
/// assert_eq!(row.total.standard, Decimal::new(75, 2));
/// ```
pub fn build_job_row(job: &JobLedger, options: &AggregatorOptions) -> PhaseRow {
    let mut cells = [DailySplit::ZERO; 7];

    for day in &job.days {
        if let Some(cutoff) = options.cutoff
            && day.date < cutoff
        {
            tracing::debug!(date = %day.date, "day ledger older than cutoff, skipped");
            continue;
        }

        let rounded = round_to_quarter_hour(day.declared_duration);
        let split = split_standard_overtime(rounded, options.standard_cap);
        let column = report_index(day.weekday());

        match options.weekday_policy {
            WeekdayPolicy::Overwrite => cells[column] = split,
            WeekdayPolicy::Accumulate => cells[column].accumulate(split),
        }
    }

    let mut total = DailySplit::ZERO;
    for cell in &cells {
        total.accumulate(*cell);
    }
    total.standard = total.standard.normalize();
    total.overtime = total.overtime.normalize();

    PhaseRow {
        description: job.description(),
        equipment_no: options.equipment_no.clone(),
        phase_code: job.phase_code(),
        cells,
        total,
    }
}

/// Builds the full phase sheet for a reporting period.
///
/// Job rows whose totals are both zero are omitted. The grand-total row
/// sums every job row per column independently, tolerating missing or
/// partial columns. Leave rows carry identity columns only.
pub fn build_phase_sheet(jobs: &[JobLedger], options: &AggregatorOptions) -> PhaseSheet {
    let rows: Vec<PhaseRow> = jobs
        .iter()
        .map(|job| build_job_row(job, options))
        .filter(|row| !row.total.is_zero())
        .collect();

    let mut grand_total = PhaseRow::empty("TOTAL", "", "");
    for row in &rows {
        for (column, cell) in row.cells.iter().enumerate() {
            grand_total.cells[column].accumulate(*cell);
        }
        grand_total.total.accumulate(row.total);
    }

    PhaseSheet {
        leave_rows: leave_rows(options),
        grand_total,
        rows,
    }
}

/// The fixed leave-category rows of the sheet.
fn leave_rows(options: &AggregatorOptions) -> Vec<PhaseRow> {
    let equipment = options.equipment_no.as_str();
    let phase = options.leave_phase_code.as_str();

    vec![
        PhaseRow::empty("PTO", equipment, phase),
        PhaseRow::empty("Holiday", equipment, phase),
        PhaseRow::empty("Jury Duty", equipment, phase),
        PhaseRow::empty("Bereavement", equipment, phase),
        PhaseRow::empty("*Sick Reserve (Salaried)", "", ""),
    ]
}
