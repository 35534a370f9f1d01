//! Ledger parser for one punch-clock export document.
//!
//! A document is a loosely-formatted CSV export, one per job per week:
//!
//! ```text
//! "10.010.0023 Automation Engineer - Overhead  total amount: $110.67  total time: 02:40:00"
//! "","","Mar 3, 2025"
//! "Start","End","Time","Amount","Note"
//! "8:00:00 AM","8:30:00 AM","00:30:00","$20.75",""
//! "12:45:00 PM","1:00:00 PM","00:15:00","$10.38",""
//! "Total:     00:45:00               $31.13"
//! ```
//!
//! The parser runs a three-state machine over the records: it consumes
//! exactly one label record, then alternates between "outside a day block"
//! (waiting for a day-start marker) and "inside a day block" (collecting
//! punch rows until the day-end marker). Any record violating the expected
//! shape for the current state fails the whole document.

use csv::{ReaderBuilder, StringRecord};

use crate::error::{TimecardError, TimecardResult};
use crate::models::{ClockEvent, DayLedger, Elapsed, JobLedger};

use super::tokens::{is_export_date, parse_clock_time, parse_export_date, parse_money};

/// Parser states for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    /// No record consumed yet; the next record is the job label.
    BeforeFirstRecord,
    /// Between day blocks; the next meaningful record is a day-start marker.
    OutsideBlock,
    /// Inside a day block; punch rows until the day-end marker.
    InsideBlock,
}

/// A day block under construction.
struct OpenDay {
    date: chrono::NaiveDate,
    events: Vec<ClockEvent>,
}

/// Parses the raw text of one export document into a [`JobLedger`].
///
/// Parsing is fail-fast: no partial ledger is returned for a broken
/// document. The caller decides whether to skip the file or abort the run.
///
/// # Errors
///
/// Returns [`TimecardError::MalformedDocument`] when a record violates the
/// expected shape for the current parser state (including a document that
/// ends while still inside a day block), and the token-level errors of the
/// [`tokens`](super::tokens) parsers for malformed dates, times, durations,
/// and amounts.
///
/// # Example
///
/// ```
/// use timecard_engine::parser::parse_document;
///
/// let text = "\
/// \"JobA 10.010.0023\"
/// \"\",\"\",\"Mar 3, 2025\"
/// \"Start\",\"End\",\"Time\",\"Amount\",\"Note\"
/// \"8:00:00 AM\",\"8:30:00 AM\",\"00:30:00\",\"$20.75\",\"\"
/// \"Total:     00:30:00               $20.75\"
/// ";
///
/// let job = parse_document(text).unwrap();
/// assert_eq!(job.phase_code(), "10.010.0023");
/// assert_eq!(job.days.len(), 1);
/// assert_eq!(job.days[0].events.len(), 1);
/// ```
pub fn parse_document(content: &str) -> TimecardResult<JobLedger> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut state = ParserState::BeforeFirstRecord;
    let mut raw_label = String::new();
    let mut days: Vec<DayLedger> = Vec::new();
    let mut open_day: Option<OpenDay> = None;

    for (index, result) in reader.records().enumerate() {
        let record_no = index + 1;
        let record = result.map_err(|e| TimecardError::MalformedDocument {
            record: record_no,
            message: e.to_string(),
        })?;

        match state {
            ParserState::BeforeFirstRecord => {
                raw_label = record.get(0).unwrap_or_default().to_string();
                state = ParserState::OutsideBlock;
            }
            ParserState::OutsideBlock => {
                if is_separator(&record) {
                    continue;
                }
                let date_field = record.iter().last().unwrap_or_default();
                if !is_export_date(date_field) {
                    return Err(TimecardError::MalformedDocument {
                        record: record_no,
                        message: format!("expected a day-start marker, got '{date_field}'"),
                    });
                }
                open_day = Some(OpenDay {
                    date: parse_export_date(date_field)?,
                    events: Vec::new(),
                });
                state = ParserState::InsideBlock;
            }
            ParserState::InsideBlock => {
                let first = record.get(0).unwrap_or_default();

                // Column header row inside a block carries no data.
                if first == "Start" {
                    continue;
                }

                if first.starts_with("Total:") {
                    let day = open_day.take().ok_or(TimecardError::MalformedDocument {
                        record: record_no,
                        message: "day-end marker without an open day block".to_string(),
                    })?;
                    days.push(close_day(day, first, record_no)?);
                    state = ParserState::OutsideBlock;
                    continue;
                }

                let event = parse_punch_row(&record, record_no)?;
                if let Some(day) = open_day.as_mut() {
                    day.events.push(event);
                }
            }
        }
    }

    match state {
        ParserState::BeforeFirstRecord => Err(TimecardError::MalformedDocument {
            record: 0,
            message: "document has no records".to_string(),
        }),
        ParserState::InsideBlock => Err(TimecardError::MalformedDocument {
            record: 0,
            message: "document ended inside a day block".to_string(),
        }),
        ParserState::OutsideBlock => {
            tracing::debug!(label = %raw_label, days = days.len(), "parsed document");
            Ok(JobLedger { raw_label, days })
        }
    }
}

/// A record whose fields are all empty separates day blocks.
fn is_separator(record: &StringRecord) -> bool {
    record.iter().all(|field| field.is_empty())
}

/// Closes a day block from its day-end marker field, e.g.
/// `"Total:     00:45:00               $31.13"`.
fn close_day(day: OpenDay, marker: &str, record_no: usize) -> TimecardResult<DayLedger> {
    let tokens: Vec<&str> = marker.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(TimecardError::MalformedDocument {
            record: record_no,
            message: format!("day-end marker has {} tokens, expected 3", tokens.len()),
        });
    }

    Ok(DayLedger {
        date: day.date,
        events: day.events,
        declared_duration: Elapsed::parse(tokens[1])?,
        declared_amount: parse_money(tokens[2])?,
    })
}

/// Parses one punch row: start, end, duration, amount, note.
fn parse_punch_row(record: &StringRecord, record_no: usize) -> TimecardResult<ClockEvent> {
    if record.len() < 5 {
        return Err(TimecardError::MalformedDocument {
            record: record_no,
            message: format!("punch row has {} fields, expected 5", record.len()),
        });
    }

    Ok(ClockEvent {
        start: parse_clock_time(record.get(0).unwrap_or_default())?,
        end: parse_clock_time(record.get(1).unwrap_or_default())?,
        duration: Elapsed::parse(record.get(2).unwrap_or_default())?,
        earned: parse_money(record.get(3).unwrap_or_default())?,
        note: record.get(4).unwrap_or_default().to_string(),
    })
}
