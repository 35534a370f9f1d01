//! Day and job ledger models.
//!
//! A [`DayLedger`] is one calendar day of punches for one job; a
//! [`JobLedger`] is one job/phase-code's full reporting period, created by
//! parsing exactly one input document and immutable after parse.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, Weekday};
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ClockEvent, Elapsed};

/// Matches an embedded phase code: two digits, dot, three digits, dot,
/// four digits (e.g. "10.010.0023").
static PHASE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{2}\.\d{3}\.\d{4}").expect("phase code pattern is valid"));

/// One calendar day of punches for one job.
///
/// `events` keeps file order, which is not necessarily chronological. The
/// declared total duration and amount come from the document's end-of-day
/// summary line and are authoritative for hour computation; the event-level
/// durations are never re-summed. A day ledger always carries a declared
/// total, even when `events` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLedger {
    /// The calendar date of the day block.
    pub date: NaiveDate,
    /// The punch rows of the day block, in file order.
    pub events: Vec<ClockEvent>,
    /// The authoritative total duration from the day-end summary line.
    pub declared_duration: Elapsed,
    /// The authoritative total amount from the day-end summary line.
    pub declared_amount: Decimal,
}

impl DayLedger {
    /// Returns the day of the week for this ledger's date.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}

/// One job/phase-code's full reporting period.
///
/// # Example
///
/// ```
/// use timecard_engine::models::JobLedger;
///
/// let job = JobLedger {
///     raw_label: "10.010.0023 Automation Engineer - Overhead".to_string(),
///     days: vec![],
/// };
/// assert_eq!(job.phase_code(), "10.010.0023");
/// assert_eq!(job.description(), "Automation Engineer Overhead");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobLedger {
    /// The original free-text header of the document, containing an
    /// embedded phase code and a human-readable name.
    pub raw_label: String,
    /// The day blocks of the document, chronological as encountered.
    pub days: Vec<DayLedger>,
}

impl JobLedger {
    /// Extracts the first embedded phase code from the raw label.
    ///
    /// Returns the empty string when the label carries no phase code.
    pub fn phase_code(&self) -> String {
        PHASE_CODE
            .find(&self.raw_label)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    /// Returns a cleaned human-readable description of the job.
    ///
    /// The first embedded phase code is removed, non-ASCII characters are
    /// dropped, and the first three words made purely of letters, digits,
    /// hyphens, and dots are kept. Words made only of digits and
    /// separators (stray numeric columns) are skipped.
    pub fn description(&self) -> String {
        let without_code = PHASE_CODE.replace(&self.raw_label, "");
        clean_name(&without_code)
    }
}

/// Keeps the first three "clean" words of a job name.
fn clean_name(name: &str) -> String {
    let ascii: String = name.chars().filter(char::is_ascii).collect();

    let is_good = |c: char| c.is_ascii_alphanumeric() || c == '-' || c == '.';
    let is_separator_digit = |c: char| c.is_ascii_digit() || c == '-' || c == '.';

    let mut kept: Vec<&str> = Vec::new();
    for word in ascii.split_whitespace() {
        if word.chars().all(is_separator_digit) {
            continue;
        }
        if word.chars().all(is_good) {
            kept.push(word);
            if kept.len() >= 3 {
                break;
            }
        }
    }

    kept.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(label: &str) -> JobLedger {
        JobLedger {
            raw_label: label.to_string(),
            days: vec![],
        }
    }

    #[test]
    fn test_phase_code_extraction() {
        let ledger = job("10.010.0023 Automation Engineer - Overhead  total time: 02:40:00");
        assert_eq!(ledger.phase_code(), "10.010.0023");
    }

    #[test]
    fn test_phase_code_missing_yields_empty() {
        let ledger = job("No valid number here.");
        assert_eq!(ledger.phase_code(), "");
    }

    #[test]
    fn test_phase_code_embedded_mid_string() {
        let ledger = job("Here is a number 10.010.0023 that I want to match.");
        assert_eq!(ledger.phase_code(), "10.010.0023");
    }

    #[test]
    fn test_description_drops_code_and_keeps_three_words() {
        // The lone "-" counts as a separator word and is skipped.
        let ledger = job("10.010.0023 Automation Engineer - Overhead extras");
        assert_eq!(ledger.description(), "Automation Engineer Overhead");
    }

    #[test]
    fn test_description_skips_digit_only_words() {
        let ledger = job("56.1077 Crane Operator Overhead");
        assert_eq!(ledger.description(), "Crane Operator Overhead");
    }

    #[test]
    fn test_description_drops_non_ascii() {
        let ledger = job("Crâne Operator Overhead Shift");
        // "Crâne" loses its non-ASCII char and survives as "Crne".
        assert_eq!(ledger.description(), "Crne Operator Overhead");
    }

    #[test]
    fn test_description_skips_words_with_bad_characters() {
        let ledger = job("total: Engineer Overhead Weekly");
        assert_eq!(ledger.description(), "Engineer Overhead Weekly");
    }

    #[test]
    fn test_day_ledger_weekday() {
        let day = DayLedger {
            date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(), // Monday
            events: vec![],
            declared_duration: Elapsed::from_hms(0, 45, 0),
            declared_amount: Decimal::new(3113, 2),
        };
        assert_eq!(day.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_empty_day_still_carries_declared_totals() {
        let day = DayLedger {
            date: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
            events: vec![],
            declared_duration: Elapsed::from_hms(1, 15, 0),
            declared_amount: Decimal::new(5188, 2),
        };
        assert!(day.events.is_empty());
        assert_eq!(day.declared_duration, Elapsed::from_hms(1, 15, 0));
    }
}
