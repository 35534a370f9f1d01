//! Punch reconstruction.
//!
//! Rebuilds a best-effort canonical daily schedule (time-in, lunch-out,
//! lunch-in, time-out) per weekday from the raw, unordered, possibly
//! duplicated clock timestamps pooled across every job and day of the
//! reporting period.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::{JobLedger, report_index};

/// The "not recorded" sentinel: exports write midnight for a punch that
/// was never captured.
const UNRECORDED: NaiveTime = NaiveTime::MIN;

/// How sorted singly-occurring times are paired into named slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingStrategy {
    /// Assign sorted times to Time In, Lunch Out, Lunch In, Time Out in
    /// order, then to a second overtime-day set of the same shape.
    SequentialFill,
    /// Treat consecutive intervals separated by more than the threshold
    /// as a lunch; smaller gaps are the same continuous session. The
    /// overtime-day set is never filled by this strategy.
    GapThreshold {
        /// Minimum gap, in minutes, for a lunch classification.
        minutes: i64,
    },
}

impl Default for PairingStrategy {
    fn default() -> Self {
        PairingStrategy::SequentialFill
    }
}

/// One named set of punch slots, each holding at most one time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PunchSet {
    /// First clock-in of the day.
    pub time_in: Option<NaiveTime>,
    /// Clock-out at the start of lunch.
    pub lunch_out: Option<NaiveTime>,
    /// Clock-in at the end of lunch.
    pub lunch_in: Option<NaiveTime>,
    /// Final clock-out of the day.
    pub time_out: Option<NaiveTime>,
}

impl PunchSet {
    /// Fills the slots in order from an iterator of ascending times.
    fn fill_in_order(times: &mut impl Iterator<Item = NaiveTime>) -> PunchSet {
        PunchSet {
            time_in: times.next(),
            lunch_out: times.next(),
            lunch_in: times.next(),
            time_out: times.next(),
        }
    }
}

/// The reconstructed punches of one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeekdayPunches {
    /// The canonical slot assignment.
    pub regular: PunchSet,
    /// The second slot set for days exceeding 10 hours.
    pub overtime: PunchSet,
    /// Whether the AM rest break is stamped. A coarse presence check:
    /// true whenever the weekday has any recorded punches at all.
    pub am_break: bool,
    /// Whether the PM rest break is stamped; same presence check.
    pub pm_break: bool,
    /// Every distinct recorded time, ascending, for manual
    /// reconciliation (the "dynamic" table).
    pub recorded: Vec<NaiveTime>,
    /// Times observed more than once; ambiguous, excluded from slots.
    pub ambiguous: Vec<NaiveTime>,
}

/// The reconstructed punch schedule for a reporting period, Saturday-first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PunchSchedule {
    /// One entry per weekday column.
    pub days: [WeekdayPunches; 7],
}

/// Reconstructs the per-weekday punch schedule from all jobs of a period.
///
/// Every event's start and end timestamp is pooled by weekday across all
/// jobs and days, excluding the midnight "not recorded" sentinel. Times
/// observed more than once are internal/ambiguous punches and are excluded
/// from slot assignment; only singly-occurring times are handed to the
/// configured [`PairingStrategy`]. Day ledgers older than the cutoff are
/// skipped when one is given.
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use timecard_engine::calculation::{PairingStrategy, reconstruct_punch_schedule};
/// use timecard_engine::parser::parse_document;
///
/// let text = "\
/// \"JobA 10.010.0023\"
/// \"\",\"\",\"Mar 3, 2025\"
/// \"8:00:00 AM\",\"12:00:00 PM\",\"04:00:00\",\"$249.00\",\"\"
/// \"12:30:00 PM\",\"4:30:00 PM\",\"04:00:00\",\"$249.00\",\"\"
/// \"Total:     08:00:00               $498.00\"
/// ";
/// let jobs = vec![parse_document(text).unwrap()];
/// let schedule = reconstruct_punch_schedule(&jobs, PairingStrategy::SequentialFill, None);
///
/// // Mar 3, 2025 is a Monday: Saturday-first column index 2.
/// let monday = &schedule.days[2];
/// assert_eq!(monday.regular.time_in, NaiveTime::from_hms_opt(8, 0, 0));
/// assert_eq!(monday.regular.time_out, NaiveTime::from_hms_opt(16, 30, 0));
/// ```
pub fn reconstruct_punch_schedule(
    jobs: &[JobLedger],
    strategy: PairingStrategy,
    cutoff: Option<NaiveDate>,
) -> PunchSchedule {
    // Occurrence counts per distinct time, one pool per weekday column.
    let mut pools: [BTreeMap<NaiveTime, usize>; 7] = Default::default();

    for job in jobs {
        for day in &job.days {
            if let Some(cutoff) = cutoff
                && day.date < cutoff
            {
                continue;
            }
            let pool = &mut pools[report_index(day.weekday())];
            for event in &day.events {
                for punch in event.punches() {
                    if punch == UNRECORDED {
                        continue;
                    }
                    *pool.entry(punch).or_insert(0) += 1;
                }
            }
        }
    }

    let mut schedule = PunchSchedule::default();
    for (column, pool) in pools.iter().enumerate() {
        schedule.days[column] = reconstruct_weekday(pool, strategy);
    }
    schedule
}

/// Reconstructs one weekday column from its occurrence-counted time pool.
fn reconstruct_weekday(
    pool: &BTreeMap<NaiveTime, usize>,
    strategy: PairingStrategy,
) -> WeekdayPunches {
    let recorded: Vec<NaiveTime> = pool.keys().copied().collect();
    let ambiguous: Vec<NaiveTime> = pool
        .iter()
        .filter(|(_, count)| **count > 1)
        .map(|(time, _)| *time)
        .collect();

    // BTreeMap iteration is ascending, so the singles arrive sorted.
    let singles: Vec<NaiveTime> = pool
        .iter()
        .filter(|(_, count)| **count == 1)
        .map(|(time, _)| *time)
        .collect();

    let (regular, overtime) = match strategy {
        PairingStrategy::SequentialFill => sequential_fill(&singles),
        PairingStrategy::GapThreshold { minutes } => {
            (gap_threshold(&singles, minutes), PunchSet::default())
        }
    };

    let has_punches = !recorded.is_empty();

    WeekdayPunches {
        regular,
        overtime,
        am_break: has_punches,
        pm_break: has_punches,
        recorded,
        ambiguous,
    }
}

/// Sequential fill: slots take the sorted times in order; surplus beyond
/// the second set is ignored.
fn sequential_fill(singles: &[NaiveTime]) -> (PunchSet, PunchSet) {
    let mut times = singles.iter().copied();
    let regular = PunchSet::fill_in_order(&mut times);
    let overtime = PunchSet::fill_in_order(&mut times);
    (regular, overtime)
}

/// Gap-threshold fill: consecutive singles pair into work intervals; the
/// first inter-interval gap wider than the threshold is the lunch.
fn gap_threshold(singles: &[NaiveTime], minutes: i64) -> PunchSet {
    let mut set = PunchSet::default();

    set.time_in = singles.first().copied();
    if singles.len() < 2 {
        return set;
    }
    set.time_out = singles.last().copied();

    // Interval i ends at singles[2i + 1]; the next one starts at
    // singles[2i + 2]. A trailing unpaired time never opens an interval.
    let mut boundary = 1;
    while boundary + 1 < singles.len() {
        let interval_end = singles[boundary];
        let next_start = singles[boundary + 1];
        let gap = next_start.signed_duration_since(interval_end).num_minutes();
        if gap > minutes {
            set.lunch_out = Some(interval_end);
            set.lunch_in = Some(next_start);
            break;
        }
        boundary += 2;
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClockEvent, DayLedger, Elapsed};
    use rust_decimal::Decimal;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn event(start: NaiveTime, end: NaiveTime) -> ClockEvent {
        ClockEvent {
            start,
            end,
            duration: Elapsed::ZERO,
            earned: Decimal::ZERO,
            note: String::new(),
        }
    }

    fn monday_job(events: Vec<ClockEvent>) -> JobLedger {
        JobLedger {
            raw_label: "JobA 10.010.0023".to_string(),
            days: vec![DayLedger {
                // 2025-03-03 is a Monday.
                date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
                events,
                declared_duration: Elapsed::from_hms(8, 0, 0),
                declared_amount: Decimal::ZERO,
            }],
        }
    }

    #[test]
    fn test_four_singles_fill_slots_in_ascending_order() {
        let jobs = vec![monday_job(vec![
            event(time(8, 0), time(12, 0)),
            event(time(12, 30), time(16, 30)),
        ])];
        let schedule = reconstruct_punch_schedule(&jobs, PairingStrategy::SequentialFill, None);

        let monday = &schedule.days[2];
        assert_eq!(monday.regular.time_in, Some(time(8, 0)));
        assert_eq!(monday.regular.lunch_out, Some(time(12, 0)));
        assert_eq!(monday.regular.lunch_in, Some(time(12, 30)));
        assert_eq!(monday.regular.time_out, Some(time(16, 30)));
        assert_eq!(monday.overtime, PunchSet::default());
    }

    #[test]
    fn test_duplicate_times_are_excluded_from_slots() {
        // Back-to-back intervals share the 12:00 timestamp, so it occurs
        // twice and is ambiguous.
        let jobs = vec![monday_job(vec![
            event(time(8, 0), time(12, 0)),
            event(time(12, 0), time(16, 30)),
        ])];
        let schedule = reconstruct_punch_schedule(&jobs, PairingStrategy::SequentialFill, None);

        let monday = &schedule.days[2];
        assert_eq!(monday.regular.time_in, Some(time(8, 0)));
        assert_eq!(monday.regular.lunch_out, Some(time(16, 30)));
        assert_eq!(monday.regular.lunch_in, None);
        assert_eq!(monday.ambiguous, vec![time(12, 0)]);
    }

    #[test]
    fn test_surplus_singles_spill_into_the_overtime_set() {
        let jobs = vec![monday_job(vec![
            event(time(6, 0), time(10, 0)),
            event(time(10, 30), time(14, 30)),
            event(time(15, 0), time(19, 0)),
        ])];
        let schedule = reconstruct_punch_schedule(&jobs, PairingStrategy::SequentialFill, None);

        let monday = &schedule.days[2];
        assert_eq!(monday.regular.time_out, Some(time(14, 30)));
        assert_eq!(monday.overtime.time_in, Some(time(15, 0)));
        assert_eq!(monday.overtime.lunch_out, Some(time(19, 0)));
        assert_eq!(monday.overtime.lunch_in, None);
    }

    #[test]
    fn test_unrecorded_sentinel_is_excluded() {
        let jobs = vec![monday_job(vec![event(NaiveTime::MIN, time(16, 30))])];
        let schedule = reconstruct_punch_schedule(&jobs, PairingStrategy::SequentialFill, None);

        let monday = &schedule.days[2];
        assert_eq!(monday.recorded, vec![time(16, 30)]);
        assert_eq!(monday.regular.time_in, Some(time(16, 30)));
    }

    #[test]
    fn test_breaks_are_stamped_by_presence_only() {
        let jobs = vec![monday_job(vec![event(time(8, 0), time(9, 0))])];
        let schedule = reconstruct_punch_schedule(&jobs, PairingStrategy::SequentialFill, None);

        assert!(schedule.days[2].am_break);
        assert!(schedule.days[2].pm_break);
        // Weekdays without punches stay unstamped.
        assert!(!schedule.days[0].am_break);
        assert!(!schedule.days[0].pm_break);
    }

    #[test]
    fn test_pool_merges_jobs_sharing_a_weekday() {
        let jobs = vec![
            monday_job(vec![event(time(8, 0), time(12, 0))]),
            monday_job(vec![event(time(12, 30), time(16, 30))]),
        ];
        let schedule = reconstruct_punch_schedule(&jobs, PairingStrategy::SequentialFill, None);

        let monday = &schedule.days[2];
        assert_eq!(monday.regular.time_in, Some(time(8, 0)));
        assert_eq!(monday.regular.time_out, Some(time(16, 30)));
    }

    #[test]
    fn test_recorded_lists_distinct_times_ascending() {
        let jobs = vec![monday_job(vec![
            event(time(12, 30), time(16, 30)),
            event(time(8, 0), time(12, 30)),
        ])];
        let schedule = reconstruct_punch_schedule(&jobs, PairingStrategy::SequentialFill, None);

        assert_eq!(
            schedule.days[2].recorded,
            vec![time(8, 0), time(12, 30), time(16, 30)]
        );
    }

    #[test]
    fn test_cutoff_skips_older_days() {
        let mut job = monday_job(vec![event(time(8, 0), time(12, 0))]);
        job.days[0].date = NaiveDate::from_ymd_opt(2025, 2, 24).unwrap();
        let cutoff = NaiveDate::from_ymd_opt(2025, 3, 1);
        let schedule =
            reconstruct_punch_schedule(&[job], PairingStrategy::SequentialFill, cutoff);

        assert!(schedule.days[2].recorded.is_empty());
        assert!(!schedule.days[2].am_break);
    }

    #[test]
    fn test_gap_threshold_classifies_wide_gap_as_lunch() {
        let jobs = vec![monday_job(vec![
            event(time(8, 0), time(12, 0)),
            event(time(12, 45), time(16, 30)),
        ])];
        let strategy = PairingStrategy::GapThreshold { minutes: 30 };
        let schedule = reconstruct_punch_schedule(&jobs, strategy, None);

        let monday = &schedule.days[2];
        assert_eq!(monday.regular.time_in, Some(time(8, 0)));
        assert_eq!(monday.regular.lunch_out, Some(time(12, 0)));
        assert_eq!(monday.regular.lunch_in, Some(time(12, 45)));
        assert_eq!(monday.regular.time_out, Some(time(16, 30)));
    }

    #[test]
    fn test_gap_threshold_treats_narrow_gap_as_one_session() {
        let jobs = vec![monday_job(vec![
            event(time(8, 0), time(10, 0)),
            event(time(10, 15), time(16, 30)),
        ])];
        let strategy = PairingStrategy::GapThreshold { minutes: 30 };
        let schedule = reconstruct_punch_schedule(&jobs, strategy, None);

        let monday = &schedule.days[2];
        assert_eq!(monday.regular.time_in, Some(time(8, 0)));
        assert_eq!(monday.regular.lunch_out, None);
        assert_eq!(monday.regular.lunch_in, None);
        assert_eq!(monday.regular.time_out, Some(time(16, 30)));
    }

    #[test]
    fn test_gap_threshold_never_fills_the_overtime_set() {
        let jobs = vec![monday_job(vec![
            event(time(6, 0), time(10, 0)),
            event(time(11, 0), time(14, 30)),
            event(time(15, 30), time(19, 0)),
        ])];
        let strategy = PairingStrategy::GapThreshold { minutes: 30 };
        let schedule = reconstruct_punch_schedule(&jobs, strategy, None);

        assert_eq!(schedule.days[2].overtime, PunchSet::default());
    }

    #[test]
    fn test_empty_period_yields_empty_schedule() {
        let schedule = reconstruct_punch_schedule(&[], PairingStrategy::SequentialFill, None);
        for day in &schedule.days {
            assert_eq!(day.regular, PunchSet::default());
            assert!(day.recorded.is_empty());
            assert!(!day.am_break);
        }
    }
}
