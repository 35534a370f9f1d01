//! Error types for the timecard engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while parsing punch-clock
//! exports and building reports.

use thiserror::Error;

/// The main error type for the timecard engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use timecard_engine::error::TimecardError;
///
/// let error = TimecardError::UnparsableAmount {
///     token: "31.13".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unparsable money amount: '31.13'");
/// ```
#[derive(Debug, Error)]
pub enum TimecardError {
    /// A document violated the expected record shape for the current
    /// parser state. Unrecoverable for that document; the caller decides
    /// whether to skip the file or abort the run.
    #[error("Malformed document at record {record}: {message}")]
    MalformedDocument {
        /// One-based index of the offending record.
        record: usize,
        /// A description of the shape violation.
        message: String,
    },

    /// A day-start marker's date field failed strict pattern validation
    /// or could not be parsed as a calendar date.
    #[error("Unparsable date: '{token}'")]
    UnparsableDate {
        /// The token that failed to parse.
        token: String,
    },

    /// A clock time token did not match the expected "h:mm:ss AM/PM" shape.
    #[error("Unparsable clock time: '{token}'")]
    UnparsableTime {
        /// The token that failed to parse.
        token: String,
    },

    /// A duration token did not match the expected "HH:MM:SS" shape.
    #[error("Unparsable duration: '{token}'")]
    UnparsableDuration {
        /// The token that failed to parse.
        token: String,
    },

    /// A money token did not match the expected "$X.XX" shape.
    #[error("Unparsable money amount: '{token}'")]
    UnparsableAmount {
        /// The token that failed to parse.
        token: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An underlying I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for Results that return [`TimecardError`].
pub type TimecardResult<T> = Result<T, TimecardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_document_displays_record_and_message() {
        let error = TimecardError::MalformedDocument {
            record: 7,
            message: "day-end marker has 2 tokens, expected 3".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed document at record 7: day-end marker has 2 tokens, expected 3"
        );
    }

    #[test]
    fn test_unparsable_date_displays_token() {
        let error = TimecardError::UnparsableDate {
            token: "Marzo 3, 2025".to_string(),
        };
        assert_eq!(error.to_string(), "Unparsable date: 'Marzo 3, 2025'");
    }

    #[test]
    fn test_unparsable_duration_displays_token() {
        let error = TimecardError::UnparsableDuration {
            token: "8h".to_string(),
        };
        assert_eq!(error.to_string(), "Unparsable duration: '8h'");
    }

    #[test]
    fn test_unparsable_time_displays_token() {
        let error = TimecardError::UnparsableTime {
            token: "25:00:00 AM".to_string(),
        };
        assert_eq!(error.to_string(), "Unparsable clock time: '25:00:00 AM'");
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = TimecardError::ConfigNotFound {
            path: "/missing/timecard.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/timecard.yaml"
        );
    }

    #[test]
    fn test_io_error_wraps_std_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error: TimecardError = io.into();
        assert!(error.to_string().starts_with("I/O error:"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<TimecardError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unparsable_amount() -> TimecardResult<()> {
            Err(TimecardError::UnparsableAmount {
                token: "abc".to_string(),
            })
        }

        fn propagates_error() -> TimecardResult<()> {
            returns_unparsable_amount()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
