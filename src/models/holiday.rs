//! Holiday reference data.
//!
//! This module contains the [`HolidayRecord`] type describing an official
//! holiday or an eve-of-holiday (arife) half day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Label used when a holiday has no name of its own.
pub const DEFAULT_HOLIDAY_NAME: &str = "Resmi Tatil";

/// Whether a holiday is observed for the whole day or only the afternoon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    /// An official holiday.
    FullDay,
    /// An eve-of-holiday (arife): the afternoon before certain holidays.
    HalfDay,
}

/// An official holiday or eve-of-holiday on a single calendar date.
///
/// # Example
///
/// ```
/// use hakedis_engine::models::{HolidayKind, HolidayRecord};
/// use chrono::NaiveDate;
///
/// let record = HolidayRecord {
///     date: NaiveDate::from_ymd_opt(2026, 10, 29).unwrap(),
///     name: "Cumhuriyet Bayramı".to_string(),
///     kind: HolidayKind::FullDay,
/// };
/// assert!(record.is_full_day());
/// assert_eq!(record.display_name(), "Cumhuriyet Bayramı");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    /// The calendar date (unique key).
    pub date: NaiveDate,
    /// The holiday's name.
    pub name: String,
    /// Full day or half day (eve).
    pub kind: HolidayKind,
}

impl HolidayRecord {
    /// Creates a full-day holiday record.
    pub fn full_day(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
            kind: HolidayKind::FullDay,
        }
    }

    /// Creates an eve-of-holiday record.
    pub fn half_day(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
            kind: HolidayKind::HalfDay,
        }
    }

    /// Returns true for official (full day) holidays.
    pub fn is_full_day(&self) -> bool {
        self.kind == HolidayKind::FullDay
    }

    /// Returns true for eve-of-holiday half days.
    pub fn is_half_day(&self) -> bool {
        self.kind == HolidayKind::HalfDay
    }

    /// The name to show on reports, falling back to "Resmi Tatil".
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            DEFAULT_HOLIDAY_NAME
        } else {
            &self.name
        }
    }
}
