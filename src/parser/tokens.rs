//! Token-level parsers for the punch-clock export format.
//!
//! Each parser validates the literal shape of one token before handing it
//! to the underlying date/time/decimal parser, so malformed tokens fail
//! with a precise error instead of a best-effort value.

use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use rust_decimal::Decimal;

use crate::error::{TimecardError, TimecardResult};

/// Matches a day-start date field: "Mar 3, 2025" or "March 3, 2025".
static EXPORT_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+ \d{1,2}, \d{4}$").expect("date pattern is valid"));

/// Returns `true` if a field matches the literal day-start date pattern.
///
/// # Example
///
/// ```
/// use timecard_engine::parser::is_export_date;
///
/// assert!(is_export_date("Mar 3, 2025"));
/// assert!(is_export_date("March 3, 2025"));
/// assert!(!is_export_date("2025-03-03"));
/// ```
pub fn is_export_date(field: &str) -> bool {
    EXPORT_DATE.is_match(field)
}

/// Parses a day-start date field such as "Mar 3, 2025".
///
/// The field is validated against the strict export pattern before being
/// handed to the chrono parser. Both abbreviated and full month names are
/// accepted.
///
/// # Errors
///
/// Returns [`TimecardError::UnparsableDate`] if validation or parsing fails.
pub fn parse_export_date(field: &str) -> TimecardResult<NaiveDate> {
    let unparsable = || TimecardError::UnparsableDate {
        token: field.to_string(),
    };

    if !is_export_date(field) {
        return Err(unparsable());
    }

    NaiveDate::parse_from_str(field, "%b %d, %Y").map_err(|_| unparsable())
}

/// Parses a 12-hour clock time such as "8:00:00 AM" or "12:15:00 PM".
///
/// # Errors
///
/// Returns [`TimecardError::UnparsableTime`] if the token does not match
/// the "h:mm:ss AM/PM" shape.
pub fn parse_clock_time(token: &str) -> TimecardResult<NaiveTime> {
    NaiveTime::parse_from_str(token, "%I:%M:%S %p").map_err(|_| TimecardError::UnparsableTime {
        token: token.to_string(),
    })
}

/// Parses a money token such as "$31.13" into an exact decimal.
///
/// The leading currency symbol is stripped and the remainder converted to
/// fixed-point decimal. Binary floats are never involved, so cent-level
/// drift cannot occur.
///
/// # Errors
///
/// Returns [`TimecardError::UnparsableAmount`] if the token lacks the
/// currency symbol or the remainder is not a decimal number.
pub fn parse_money(token: &str) -> TimecardResult<Decimal> {
    let unparsable = || TimecardError::UnparsableAmount {
        token: token.to_string(),
    };

    let digits = token.strip_prefix('$').ok_or_else(unparsable)?;
    Decimal::from_str(digits).map_err(|_| unparsable())
}
