//! Wall-clock arithmetic used by the entitlement engine.
//!
//! Times are handled as minutes since midnight. Elapsed time between an
//! entry and an exit is rounded to whole hours, and an exit at or before the
//! entry is treated as falling on the next day.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parses a `HH:MM` (or `HH:MM:SS`) wall-clock time.
///
/// # Example
///
/// ```
/// use hakedis_engine::calculation::parse_clock;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_clock("08:30").unwrap(), NaiveTime::from_hms_opt(8, 30, 0).unwrap());
/// assert!(parse_clock("8h30").is_err());
/// ```
pub fn parse_clock(value: &str) -> EngineResult<NaiveTime> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| EngineError::InvalidTime {
            value: value.to_string(),
        })
}

/// Formats a time as `HH:MM`.
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Returns the number of whole minutes since midnight. Seconds are dropped.
pub fn minutes_since_midnight(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Returns the minutes from `entry` to `exit`, crossing midnight when
/// `exit <= entry`.
pub fn elapsed_minutes(entry: NaiveTime, exit: NaiveTime) -> u32 {
    let entry = minutes_since_midnight(entry);
    let exit = minutes_since_midnight(exit);
    if exit <= entry {
        exit + MINUTES_PER_DAY - entry
    } else {
        exit - entry
    }
}

/// Returns the elapsed time from `entry` to `exit` rounded to the nearest
/// whole hour (halves round up). Fractional hours are never retained.
///
/// # Example
///
/// ```
/// use hakedis_engine::calculation::{elapsed_whole_hours, parse_clock};
/// use rust_decimal::Decimal;
///
/// let entry = parse_clock("08:00").unwrap();
/// let exit = parse_clock("23:59").unwrap();
/// assert_eq!(elapsed_whole_hours(entry, exit), Decimal::from(16));
/// ```
pub fn elapsed_whole_hours(entry: NaiveTime, exit: NaiveTime) -> Decimal {
    let minutes = elapsed_minutes(entry, exit);
    Decimal::from((minutes + 30) / 60)
}
