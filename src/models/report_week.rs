//! Saturday-first reporting week.
//!
//! Weekday indices follow the Monday-start convention internally
//! (`chrono::Weekday`), but both weekly reports lay their columns out
//! Saturday first: Sat, Sun, Mon, Tue, Wed, Thu, Fri.

use chrono::Weekday;

/// The weekday columns of the weekly reports, in reporting order.
pub const REPORT_WEEK: [Weekday; 7] = [
    Weekday::Sat,
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// Three-letter column labels, in reporting order.
pub const REPORT_WEEK_LABELS: [&str; 7] = ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"];

/// Returns the Saturday-first column index of a weekday.
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use timecard_engine::models::report_index;
///
/// assert_eq!(report_index(Weekday::Sat), 0);
/// assert_eq!(report_index(Weekday::Mon), 2);
/// assert_eq!(report_index(Weekday::Fri), 6);
/// ```
pub fn report_index(weekday: Weekday) -> usize {
    match weekday {
        Weekday::Sat => 0,
        Weekday::Sun => 1,
        Weekday::Mon => 2,
        Weekday::Tue => 3,
        Weekday::Wed => 4,
        Weekday::Thu => 5,
        Weekday::Fri => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_index_matches_report_week_order() {
        for (index, weekday) in REPORT_WEEK.iter().enumerate() {
            assert_eq!(report_index(*weekday), index);
        }
    }

    #[test]
    fn test_labels_line_up_with_columns() {
        assert_eq!(REPORT_WEEK.len(), REPORT_WEEK_LABELS.len());
        assert_eq!(REPORT_WEEK_LABELS[report_index(Weekday::Wed)], "Wed");
    }
}
