//! Clock event model.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Elapsed;

/// One observed start/end timestamp pair for a contiguous work interval.
///
/// The duration is declared independently by the source export rather than
/// recomputed from `start` and `end`; the two may disagree and both are
/// preserved. The earned amount is exact fixed-point money, never a float.
/// Events are immutable once parsed.
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
/// use timecard_engine::models::{ClockEvent, Elapsed};
///
/// let event = ClockEvent {
///     start: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     end: NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
///     duration: Elapsed::from_hms(0, 30, 0),
///     earned: Decimal::new(2075, 2), // $20.75
///     note: String::new(),
/// };
/// assert_eq!(event.duration.total_seconds(), 1800);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockEvent {
    /// The clock-in time of day.
    pub start: NaiveTime,
    /// The clock-out time of day.
    pub end: NaiveTime,
    /// The elapsed duration as declared by the source export.
    pub duration: Elapsed,
    /// The monetary value earned over the interval.
    pub earned: Decimal,
    /// Free-text note attached to the interval.
    pub note: String,
}

impl ClockEvent {
    /// Returns the raw punch timestamps of this event, clock-in first.
    pub fn punches(&self) -> [NaiveTime; 2] {
        [self.start, self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_declared_duration_is_preserved_even_when_inconsistent() {
        // The export's declared duration wins over end - start.
        let event = ClockEvent {
            start: time(8, 0, 0),
            end: time(8, 30, 0),
            duration: Elapsed::from_hms(0, 45, 0),
            earned: Decimal::new(3113, 2),
            note: String::new(),
        };
        assert_eq!(event.duration, Elapsed::from_hms(0, 45, 0));
    }

    #[test]
    fn test_punches_are_ordered_clock_in_first() {
        let event = ClockEvent {
            start: time(12, 45, 0),
            end: time(13, 0, 0),
            duration: Elapsed::from_hms(0, 15, 0),
            earned: Decimal::new(1038, 2),
            note: "late lunch".to_string(),
        };
        assert_eq!(event.punches(), [time(12, 45, 0), time(13, 0, 0)]);
    }

    #[test]
    fn test_serde_round_trip() {
        let event = ClockEvent {
            start: time(8, 0, 0),
            end: time(12, 0, 0),
            duration: Elapsed::from_hms(4, 0, 0),
            earned: Decimal::new(24900, 2),
            note: "comment".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: ClockEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
