//! Quarter-hour rounding of worked durations.
//!
//! Payroll hours are reported in quarter-hour increments. A duration is
//! rounded to the nearest 15-minute mark using a midpoint rule: positions
//! strictly past the midpoint round up, everything else rounds down, so a
//! tie (exactly 7.5 minutes past a mark) resolves downward.

use rust_decimal::Decimal;

use crate::models::Elapsed;

/// Seconds in one quarter hour.
const QUARTER_SECONDS: i64 = 900;

/// The midpoint between two quarter-hour marks, in seconds.
const MIDPOINT_SECONDS: i64 = 450;

/// Rounds a duration to the nearest quarter hour and returns decimal hours.
///
/// The computation runs over the exact second count, so no precision is
/// lost before the rounding decision: with `rem = seconds mod 900`, the
/// position between the two nearest marks is `rem / 900`. A remainder past
/// the 450-second midpoint rounds up to the next mark; at or below the
/// midpoint it rounds down, which resolves exact ties downward. The result
/// is an exact multiple of 0.25 with trailing zeros stripped.
///
/// Deterministic and pure; this feeds payroll, so binary floating point is
/// never involved.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use timecard_engine::calculation::round_to_quarter_hour;
/// use timecard_engine::models::Elapsed;
///
/// // Already on a quarter mark: unchanged.
/// let hours = round_to_quarter_hour(Elapsed::from_hms(0, 45, 0));
/// assert_eq!(hours, Decimal::new(75, 2)); // 0.75
///
/// // 7.5 minutes past the mark is a tie and rounds down.
/// let hours = round_to_quarter_hour(Elapsed::from_hms(7, 7, 30));
/// assert_eq!(hours, Decimal::from(7));
///
/// // One second past the midpoint rounds up.
/// let hours = round_to_quarter_hour(Elapsed::from_hms(7, 7, 31));
/// assert_eq!(hours, Decimal::new(725, 2)); // 7.25
/// ```
pub fn round_to_quarter_hour(duration: Elapsed) -> Decimal {
    let seconds = duration.total_seconds();
    let remainder = seconds % QUARTER_SECONDS;

    let rounded_seconds = if remainder > MIDPOINT_SECONDS {
        seconds + (QUARTER_SECONDS - remainder)
    } else {
        seconds - remainder
    };

    // rounded_seconds is a multiple of 900, so the division is exact.
    (Decimal::from(rounded_seconds) / Decimal::from(3600)).normalize()
}
