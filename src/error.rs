//! Error types for the hakedis engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while building rosters and
//! computing entitlements.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the hakedis engine.
///
/// Entitlement computation itself degrades gracefully on incomplete data,
/// so most of these variants come from the catalog, the rotation assigner
/// and configuration loading.
///
/// # Example
///
/// ```
/// use hakedis_engine::error::EngineError;
///
/// let error = EngineError::ShiftNotFound {
///     code: "X".to_string(),
/// };
/// assert_eq!(error.to_string(), "Shift definition not found: X");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// No shift definition exists for the given code.
    #[error("Shift definition not found: {code}")]
    ShiftNotFound {
        /// The shift code that was not found.
        code: String,
    },

    /// A shift definition failed validation.
    #[error("Invalid shift definition '{code}': {message}")]
    InvalidShiftDefinition {
        /// The code of the rejected definition.
        code: String,
        /// What made the definition invalid.
        message: String,
    },

    /// An operation was invoked on inputs it cannot work with.
    #[error("Invalid state: {message}")]
    InvalidState {
        /// A description of the offending state.
        message: String,
    },

    /// The requested year/month does not name a calendar month.
    #[error("Invalid period: {year}-{month:02}")]
    InvalidPeriod {
        /// The requested year.
        year: i32,
        /// The requested month.
        month: u32,
    },

    /// A wall-clock time could not be parsed.
    #[error("Invalid time of day: '{value}'")]
    InvalidTime {
        /// The rejected input.
        value: String,
    },

    /// A holiday source could not answer a query.
    #[error("Holiday source '{source_name}' unavailable: {message}")]
    HolidaySourceUnavailable {
        /// The name of the failing source.
        source_name: String,
        /// A description of the failure.
        message: String,
    },
}

impl EngineError {
    /// Builds an [`EngineError::InvalidState`] from any message.
    pub fn invalid_state(message: impl Into<String>) -> Self {
        EngineError::InvalidState {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

/// Returns the first day of the given month, or `InvalidPeriod`.
pub(crate) fn first_day_of_month(year: i32, month: u32) -> EngineResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(EngineError::InvalidPeriod { year, month })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/engine.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/engine.yaml"
        );
    }

    #[test]
    fn test_shift_not_found_displays_code() {
        let error = EngineError::ShiftNotFound {
            code: "unknown".to_string(),
        };
        assert_eq!(error.to_string(), "Shift definition not found: unknown");
    }

    #[test]
    fn test_invalid_state_displays_message() {
        let error = EngineError::invalid_state("no on-duty staff");
        assert_eq!(error.to_string(), "Invalid state: no on-duty staff");
    }

    #[test]
    fn test_invalid_period_pads_month() {
        let error = EngineError::InvalidPeriod {
            year: 2026,
            month: 13,
        };
        assert_eq!(error.to_string(), "Invalid period: 2026-13");
    }

    #[test]
    fn test_holiday_source_unavailable_displays_source() {
        let error = EngineError::HolidaySourceUnavailable {
            source_name: "remote".to_string(),
            message: "timeout".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Holiday source 'remote' unavailable: timeout"
        );
    }

    #[test]
    fn test_first_day_of_month_rejects_month_zero() {
        assert!(first_day_of_month(2026, 0).is_err());
        assert_eq!(
            first_day_of_month(2026, 2).unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }
}
