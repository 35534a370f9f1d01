//! Report configuration.
//!
//! This module provides the [`ReportConfig`] type, loaded from a YAML file.
//! It replaces the legacy process-wide toggles (lookback enable, days-ago
//! offset) with explicit configuration threaded into the report calls.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calculation::{AggregatorOptions, PairingStrategy, WeekdayPolicy};
use crate::error::{TimecardError, TimecardResult};

/// Configuration for one report generation pass.
///
/// # File format
///
/// ```yaml
/// input_dir: ./data/to_process
/// phase_sheet_path: ./export/phase_sheet.md
/// time_table_path: ./export/time_table.md
/// equipment_no: "56.1077"
/// leave_phase_code: "10.010.0023"
/// lookback_days: 7          # optional; omit to disable the window
/// weekday_policy: overwrite # or accumulate
/// pairing: sequential_fill
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory scanned for `.csv` export documents.
    pub input_dir: PathBuf,
    /// Output path of the phase-sheet report.
    pub phase_sheet_path: PathBuf,
    /// Output path of the punch-table report.
    pub time_table_path: PathBuf,
    /// Equipment/job number stamped on every sheet row.
    #[serde(default = "default_equipment_no")]
    pub equipment_no: String,
    /// Phase code stamped on the fixed leave rows.
    #[serde(default = "default_leave_phase_code")]
    pub leave_phase_code: String,
    /// Lookback window in days; day ledgers older than this are skipped.
    /// `None` disables the window.
    #[serde(default)]
    pub lookback_days: Option<u64>,
    /// Same-weekday collision handling for the phase sheet.
    #[serde(default)]
    pub weekday_policy: WeekdayPolicy,
    /// Punch-slot pairing strategy.
    #[serde(default)]
    pub pairing: PairingStrategy,
}

fn default_equipment_no() -> String {
    "56.1077".to_string()
}

fn default_leave_phase_code() -> String {
    "10.010.0023".to_string()
}

impl ReportConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`TimecardError::ConfigNotFound`] when the file is missing
    /// and [`TimecardError::ConfigParseError`] when it is not valid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> TimecardResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| TimecardError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| TimecardError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Resolves the lookback window against a concrete "today".
    pub fn cutoff(&self, today: NaiveDate) -> Option<NaiveDate> {
        self.lookback_days
            .and_then(|days| today.checked_sub_days(Days::new(days)))
    }

    /// Builds the aggregator options for a run dated `today`.
    pub fn aggregator_options(&self, today: NaiveDate) -> AggregatorOptions {
        AggregatorOptions {
            cutoff: self.cutoff(today),
            weekday_policy: self.weekday_policy,
            equipment_no: self.equipment_no.clone(),
            leave_phase_code: self.leave_phase_code.clone(),
            ..AggregatorOptions::default()
        }
    }
}
