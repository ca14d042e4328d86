//! Entitlement result models.
//!
//! This module contains the per-day [`DailyEntitlement`] ledger entry, the
//! [`MonthlyEntitlementSummary`] built from those entries and the audit trace
//! that records how each day was classified.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::clock_format;
use super::holiday::DEFAULT_HOLIDAY_NAME;

/// Extra annotation on an on-call day label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnCallAnnotation {
    /// An ordinary day.
    None,
    /// The on-call day falls on an eve-of-holiday.
    EveOfHoliday,
    /// The on-call day falls on an official holiday.
    Holiday,
}

/// Which post-on-call rule applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "rule", content = "holiday_name")]
pub enum PostOnCallVariant {
    /// The rest day is itself a holiday.
    Holiday(String),
    /// The on-call day was a holiday or eve and the rest day is a working weekday.
    Interrupted,
    /// Any other rest day.
    Plain,
}

/// How a day was classified, in precedence order.
///
/// The `Display` implementation renders the label shown on reports.
///
/// # Example
///
/// ```
/// use hakedis_engine::models::{DayClassification, OnCallAnnotation};
///
/// let day = DayClassification::OnCall {
///     shift_name: "Nöbet".to_string(),
///     annotation: OnCallAnnotation::EveOfHoliday,
/// };
/// assert_eq!(day.to_string(), "Nöbet (Arife)");
/// assert_eq!(DayClassification::Ordinary.to_string(), "Mesai");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum DayClassification {
    /// The staff member holds an on-call shift today.
    OnCall {
        /// The shift's display name.
        shift_name: String,
        /// Holiday or eve annotation.
        annotation: OnCallAnnotation,
    },
    /// The day after an on-call shift.
    PostOnCall {
        /// The rule that set the expected hours.
        variant: PostOnCallVariant,
    },
    /// An official holiday without a shift.
    Holiday {
        /// The holiday's name.
        name: String,
    },
    /// An eve-of-holiday without a shift.
    EveOfHoliday,
    /// A Saturday or Sunday without a shift.
    Weekend,
    /// An ordinary working weekday.
    Ordinary,
}

impl DayClassification {
    /// A stable identifier for the rule that produced this classification.
    pub fn rule_id(&self) -> &'static str {
        match self {
            DayClassification::OnCall { .. } => "on_call_day",
            DayClassification::PostOnCall { .. } => "post_on_call_day",
            DayClassification::Holiday { .. } => "holiday_no_shift",
            DayClassification::EveOfHoliday => "eve_of_holiday_no_shift",
            DayClassification::Weekend => "weekend_no_shift",
            DayClassification::Ordinary => "ordinary_weekday",
        }
    }

    /// Returns true for on-call days.
    pub fn is_on_call(&self) -> bool {
        matches!(self, DayClassification::OnCall { .. })
    }

    /// Returns true for post-on-call days.
    pub fn is_post_on_call(&self) -> bool {
        matches!(self, DayClassification::PostOnCall { .. })
    }
}

fn or_default_holiday_name(name: &str) -> &str {
    if name.trim().is_empty() {
        DEFAULT_HOLIDAY_NAME
    } else {
        name
    }
}

impl fmt::Display for DayClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayClassification::OnCall {
                shift_name,
                annotation,
            } => match annotation {
                OnCallAnnotation::None => write!(f, "{}", shift_name),
                OnCallAnnotation::EveOfHoliday => write!(f, "{} (Arife)", shift_name),
                OnCallAnnotation::Holiday => write!(f, "{} (Resmi Tatil)", shift_name),
            },
            DayClassification::PostOnCall { variant } => match variant {
                PostOnCallVariant::Holiday(name) => {
                    write!(f, "Nöbet Ertesi ({})", or_default_holiday_name(name))
                }
                PostOnCallVariant::Interrupted => write!(f, "Nöbet Ertesi (Kesintili)"),
                PostOnCallVariant::Plain => write!(f, "Nöbet Ertesi"),
            },
            DayClassification::Holiday { name } => write!(f, "{}", or_default_holiday_name(name)),
            DayClassification::EveOfHoliday => write!(f, "Arife (Yarım Gün)"),
            DayClassification::Weekend => write!(f, "Off"),
            DayClassification::Ordinary => write!(f, "Mesai"),
        }
    }
}

/// One day of a staff member's entitlement ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyEntitlement {
    /// The calendar date.
    pub date: NaiveDate,
    /// Turkish weekday name (e.g. "Pazartesi").
    pub weekday_name: String,
    /// Saturday or Sunday.
    pub is_weekend: bool,
    /// Official holiday.
    pub is_holiday: bool,
    /// Eve-of-holiday half day.
    pub is_eve_of_holiday: bool,
    /// The holiday's name, if the day is a holiday or eve.
    pub holiday_name: Option<String>,
    /// Entry time, if the day has one.
    #[serde(with = "clock_format::hhmm_option")]
    pub entry_time: Option<NaiveTime>,
    /// Exit time, if the day has one.
    #[serde(with = "clock_format::hhmm_option")]
    pub exit_time: Option<NaiveTime>,
    /// The rule that classified the day.
    pub classification: DayClassification,
    /// The report label of the classification.
    pub shift_type: String,
    /// Hours worked, in whole hours.
    pub worked_hours: Decimal,
    /// Hours expected for the classification.
    pub expected_hours: Decimal,
    /// `max(0, expected - worked)`.
    pub missing_hours: Decimal,
    /// `max(0, worked - expected)`.
    pub excess_hours: Decimal,
}

/// Month totals, each the exact sum of the daily figures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementTotals {
    /// Total hours worked.
    pub worked_hours: Decimal,
    /// Total hours expected.
    pub expected_hours: Decimal,
    /// Total hours missing.
    pub missing_hours: Decimal,
    /// Total excess hours.
    pub excess_hours: Decimal,
}

impl EntitlementTotals {
    /// Adds one day's figures.
    pub fn accumulate(&mut self, day: &DailyEntitlement) {
        self.worked_hours += day.worked_hours;
        self.expected_hours += day.expected_hours;
        self.missing_hours += day.missing_hours;
        self.excess_hours += day.excess_hours;
    }

    /// Net balance: excess minus missing.
    pub fn net_hours(&self) -> Decimal {
        self.excess_hours - self.missing_hours
    }
}

/// A single step in the audit trace recording a classification decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete entitlement result for one staff member and month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyEntitlementSummary {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation ran.
    pub calculated_at: DateTime<Utc>,
    /// The engine version that produced the result.
    pub engine_version: String,
    /// The staff member the ledger belongs to.
    pub staff_id: String,
    /// The year of the month.
    pub year: i32,
    /// The month (1-12).
    pub month: u32,
    /// One entry per calendar day, in date order.
    pub days: Vec<DailyEntitlement>,
    /// Month totals.
    pub totals: EntitlementTotals,
    /// One audit step per day.
    pub audit_trace: Vec<AuditStep>,
}

impl MonthlyEntitlementSummary {
    /// Looks up the ledger entry for a date.
    pub fn day(&self, date: NaiveDate) -> Option<&DailyEntitlement> {
        self.days.iter().find(|d| d.date == date)
    }
}
