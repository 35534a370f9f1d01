//! Elapsed-duration type.
//!
//! Punch-clock exports declare durations as "HH:MM:SS" strings where the
//! hour field may exceed 24 (multi-day aggregates). This is an elapsed
//! time, not a wall-clock time, so it gets its own type rather than
//! reusing [`chrono::NaiveTime`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{TimecardError, TimecardResult};

/// An elapsed duration with second precision.
///
/// Stored as a total number of seconds. Unlike a wall-clock time the hour
/// component is unbounded, so `"30:45:10"` is a valid duration.
///
/// # Example
///
/// ```
/// use timecard_engine::models::Elapsed;
///
/// let duration = Elapsed::parse("00:45:00").unwrap();
/// assert_eq!(duration.total_seconds(), 2700);
/// assert_eq!(duration.to_string(), "00:45:00");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Elapsed(i64);

impl Elapsed {
    /// The zero duration.
    pub const ZERO: Elapsed = Elapsed(0);

    /// Creates a duration from hour, minute, and second components.
    ///
    /// # Example
    ///
    /// ```
    /// use timecard_engine::models::Elapsed;
    ///
    /// let duration = Elapsed::from_hms(8, 7, 31);
    /// assert_eq!(duration.total_seconds(), 29251);
    /// ```
    pub fn from_hms(hours: i64, minutes: i64, seconds: i64) -> Self {
        Elapsed(hours * 3600 + minutes * 60 + seconds)
    }

    /// Creates a duration from a total number of seconds.
    pub fn from_seconds(seconds: i64) -> Self {
        Elapsed(seconds)
    }

    /// Parses a duration token of the form "HH:MM:SS".
    ///
    /// The hour field may exceed 24. Minutes and seconds must be below 60.
    ///
    /// # Errors
    ///
    /// Returns [`TimecardError::UnparsableDuration`] if the token does not
    /// match the expected shape.
    ///
    /// # Example
    ///
    /// ```
    /// use timecard_engine::models::Elapsed;
    ///
    /// let duration = Elapsed::parse("30:45:10").unwrap();
    /// assert_eq!(duration, Elapsed::from_hms(30, 45, 10));
    ///
    /// assert!(Elapsed::parse("8h").is_err());
    /// ```
    pub fn parse(token: &str) -> TimecardResult<Self> {
        let unparsable = || TimecardError::UnparsableDuration {
            token: token.to_string(),
        };

        let parts: Vec<&str> = token.split(':').collect();
        if parts.len() != 3 {
            return Err(unparsable());
        }

        let hours: i64 = parts[0].parse().map_err(|_| unparsable())?;
        let minutes: i64 = parts[1].parse().map_err(|_| unparsable())?;
        let seconds: i64 = parts[2].parse().map_err(|_| unparsable())?;

        if hours < 0 || !(0..60).contains(&minutes) || !(0..60).contains(&seconds) {
            return Err(unparsable());
        }

        Ok(Elapsed::from_hms(hours, minutes, seconds))
    }

    /// Returns the total number of seconds in this duration.
    pub fn total_seconds(&self) -> i64 {
        self.0
    }

    /// Returns `true` if this duration is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Converts this duration to decimal hours at full precision.
    ///
    /// The conversion divides the exact second count by 3600 using
    /// [`Decimal`] arithmetic; no binary floating point is involved.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use timecard_engine::models::Elapsed;
    ///
    /// let duration = Elapsed::from_hms(5, 30, 0);
    /// assert_eq!(duration.to_decimal_hours(), Decimal::new(55, 1)); // 5.5
    /// ```
    pub fn to_decimal_hours(&self) -> Decimal {
        Decimal::from(self.0) / Decimal::from(3600)
    }
}

impl std::fmt::Display for Elapsed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hours = self.0 / 3600;
        let minutes = (self.0 % 3600) / 60;
        let seconds = self.0 % 60;
        write!(f, "{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}
