//! Standard/overtime split of a day's rounded hours.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default cap on standard hours per day; rounded hours past the cap are
/// overtime.
pub const DEFAULT_STANDARD_HOURS_CAP: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// The standard/overtime split of one weekday's rounded hours for one job.
///
/// Invariants: `standard` never exceeds the cap, `overtime` is never
/// negative, and `standard + overtime` equals the rounded daily duration.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use timecard_engine::calculation::{DEFAULT_STANDARD_HOURS_CAP, split_standard_overtime};
///
/// let split = split_standard_overtime(Decimal::new(825, 2), DEFAULT_STANDARD_HOURS_CAP);
/// assert_eq!(split.standard, Decimal::from(8));
/// assert_eq!(split.overtime, Decimal::new(25, 2)); // 0.25
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DailySplit {
    /// Rounded hours up to the cap.
    pub standard: Decimal,
    /// Rounded hours in excess of the cap.
    pub overtime: Decimal,
}

impl DailySplit {
    /// A split with no hours at all.
    pub const ZERO: DailySplit = DailySplit {
        standard: Decimal::ZERO,
        overtime: Decimal::ZERO,
    };

    /// Adds another split into this one, column by column.
    pub fn accumulate(&mut self, other: DailySplit) {
        self.standard += other.standard;
        self.overtime += other.overtime;
    }

    /// Returns `true` when both columns are zero.
    pub fn is_zero(&self) -> bool {
        self.standard.is_zero() && self.overtime.is_zero()
    }
}

/// Splits rounded daily hours at the standard-hours cap.
///
/// `standard = min(rounded, cap)` and `overtime = max(rounded - cap, 0)`.
/// Both columns are normalized (trailing zeros stripped).
pub fn split_standard_overtime(rounded_hours: Decimal, cap: Decimal) -> DailySplit {
    let standard = rounded_hours.min(cap);
    let overtime = (rounded_hours - cap).max(Decimal::ZERO);

    DailySplit {
        standard: standard.normalize(),
        overtime: overtime.normalize(),
    }
}
