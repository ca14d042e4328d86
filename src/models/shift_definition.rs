//! Shift definition model and related types.
//!
//! A [`ShiftDefinition`] describes one shift type: its code, its wall-clock
//! window and the hours credited for it on each kind of day.

use std::collections::HashMap;

use chrono::{NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::clock_format;

/// Distinguishes real shifts from the synthetic post-on-call marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftKind {
    /// A worked shift (on-call duty or any other regular shift).
    #[default]
    Regular,
    /// The rest day marker following an on-call day (Nöbet Ertesi).
    PostOnCall,
}

/// Hours credited for a shift on one kind of day.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HourAllotment {
    /// Hours falling before noon.
    #[serde(default)]
    pub before_noon_hours: Decimal,
    /// Hours falling after noon.
    #[serde(default)]
    pub after_noon_hours: Decimal,
    /// Contractual hours expected on this kind of day.
    #[serde(default)]
    pub expected_hours: Decimal,
}

impl HourAllotment {
    /// Creates an allotment from its three components.
    pub fn new(before_noon_hours: Decimal, after_noon_hours: Decimal, expected_hours: Decimal) -> Self {
        Self {
            before_noon_hours,
            after_noon_hours,
            expected_hours,
        }
    }

    /// Returns the name of the first negative field, if any.
    pub(crate) fn negative_field(&self) -> Option<&'static str> {
        if self.before_noon_hours < Decimal::ZERO {
            Some("before_noon_hours")
        } else if self.after_noon_hours < Decimal::ZERO {
            Some("after_noon_hours")
        } else if self.expected_hours < Decimal::ZERO {
            Some("expected_hours")
        } else {
            None
        }
    }
}

/// The kind of day an hour allotment is looked up for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllotmentDay {
    /// An ordinary day of the week.
    Weekday(Weekday),
    /// An official holiday.
    Holiday,
    /// An eve-of-holiday half day.
    EveOfHoliday,
}

/// A shift type as configured by an administrator.
///
/// # Example
///
/// ```
/// use hakedis_engine::models::{ShiftDefinition, ShiftKind};
/// use chrono::NaiveTime;
///
/// let on_call = ShiftDefinition::new(
///     "N",
///     "Nöbet",
///     NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
/// );
/// assert_eq!(on_call.kind, ShiftKind::Regular);
/// assert!(on_call.is_overnight());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftDefinition {
    /// Unique short identifier (e.g. "N").
    pub code: String,
    /// Name shown on reports (e.g. "Nöbet").
    pub display_name: String,
    /// Regular shift or post-on-call marker.
    #[serde(default)]
    pub kind: ShiftKind,
    /// Wall-clock start.
    #[serde(with = "clock_format::hhmm")]
    pub start_time: NaiveTime,
    /// Wall-clock end; at or before the start means the shift ends the next day.
    #[serde(with = "clock_format::hhmm")]
    pub end_time: NaiveTime,
    /// Allotments for ordinary days, keyed by weekday.
    #[serde(default)]
    pub per_weekday: HashMap<Weekday, HourAllotment>,
    /// Allotment on official holidays.
    #[serde(default)]
    pub holiday: HourAllotment,
    /// Allotment on eve-of-holiday half days.
    #[serde(default)]
    pub eve_of_holiday: HourAllotment,
}

impl ShiftDefinition {
    /// Creates a regular shift definition with empty hour tables.
    pub fn new(
        code: impl Into<String>,
        display_name: impl Into<String>,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
            kind: ShiftKind::Regular,
            start_time,
            end_time,
            per_weekday: HashMap::new(),
            holiday: HourAllotment::default(),
            eve_of_holiday: HourAllotment::default(),
        }
    }

    /// Marks the definition as a post-on-call marker.
    pub fn post_on_call(mut self) -> Self {
        self.kind = ShiftKind::PostOnCall;
        self
    }

    /// Sets the allotment for one weekday.
    pub fn with_weekday(mut self, weekday: Weekday, allotment: HourAllotment) -> Self {
        self.per_weekday.insert(weekday, allotment);
        self
    }

    /// Returns true when this definition is the post-on-call marker type.
    pub fn is_post_on_call(&self) -> bool {
        self.kind == ShiftKind::PostOnCall
    }

    /// Returns true when the shift ends on the following day.
    pub fn is_overnight(&self) -> bool {
        self.end_time <= self.start_time
    }

    /// Returns the allotment recorded for the given kind of day.
    pub fn allotment(&self, day: AllotmentDay) -> Option<&HourAllotment> {
        match day {
            AllotmentDay::Weekday(weekday) => self.per_weekday.get(&weekday),
            AllotmentDay::Holiday => Some(&self.holiday),
            AllotmentDay::EveOfHoliday => Some(&self.eve_of_holiday),
        }
    }
}
