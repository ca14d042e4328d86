//! Day classification for the entitlement ledger.
//!
//! Each calendar day of a staff member's month falls into exactly one
//! [`DayClassification`], tried in this order: on-call, post-on-call,
//! holiday, eve-of-holiday, weekend, ordinary weekday. The classification
//! fixes the entry/exit times, the worked hours and the expected hours.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use crate::calendar::HolidayCalendar;
use crate::catalog::{DEFAULT_EXPECTED_HOURS, ShiftCatalog, expected_hours_for};
use crate::models::{
    AllotmentDay, AssignmentBook, DEFAULT_HOLIDAY_NAME, DayClassification, OnCallAnnotation,
    PostOnCallVariant, ShiftAssignment, ShiftDefinition,
};

use super::clock::elapsed_whole_hours;

/// Expected hours for an on-call shift on an eve-of-holiday.
pub const ON_CALL_EVE_EXPECTED_HOURS: Decimal = Decimal::from_parts(6, 0, 0, false, 0);

/// Expected hours on an eve-of-holiday without a shift.
pub const EVE_EXPECTED_HOURS: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

fn clock(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

/// Start of an on-call shift whose definition cannot be resolved.
pub fn default_shift_start() -> NaiveTime {
    clock(8, 0)
}

/// Exit recorded for an on-call day.
pub fn end_of_day() -> NaiveTime {
    clock(23, 59)
}

/// Exit of a post-on-call day whose preceding shift cannot be resolved.
pub fn default_post_on_call_exit() -> NaiveTime {
    clock(8, 0)
}

/// Entry on ordinary working days and eves.
pub fn ordinary_entry() -> NaiveTime {
    clock(8, 0)
}

/// Exit on ordinary working days.
pub fn ordinary_exit() -> NaiveTime {
    clock(18, 0)
}

/// Exit on an eve-of-holiday without a shift.
pub fn eve_exit() -> NaiveTime {
    clock(12, 0)
}

/// Calendar facts about one day and the day before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayContext {
    /// The day being classified.
    pub date: NaiveDate,
    /// Its weekday.
    pub weekday: Weekday,
    /// Saturday or Sunday.
    pub is_weekend: bool,
    /// Official holiday.
    pub is_holiday: bool,
    /// Eve-of-holiday.
    pub is_eve_of_holiday: bool,
    /// Name of the holiday or eve, if any.
    pub holiday_name: Option<String>,
    /// The previous day was an official holiday.
    pub yesterday_was_holiday: bool,
    /// The previous day was an eve-of-holiday.
    pub yesterday_was_eve: bool,
}

impl DayContext {
    /// Resolves the calendar facts for a date.
    pub fn resolve(date: NaiveDate, calendar: &HolidayCalendar) -> Self {
        let weekday = date.weekday();
        let record = calendar.record(date);
        let yesterday = date.pred_opt().and_then(|d| calendar.record(d));
        Self {
            date,
            weekday,
            is_weekend: matches!(weekday, Weekday::Sat | Weekday::Sun),
            is_holiday: record.as_ref().is_some_and(|r| r.is_full_day()),
            is_eve_of_holiday: record.as_ref().is_some_and(|r| r.is_half_day()),
            holiday_name: record.map(|r| r.display_name().to_string()),
            yesterday_was_holiday: yesterday.as_ref().is_some_and(|r| r.is_full_day()),
            yesterday_was_eve: yesterday.as_ref().is_some_and(|r| r.is_half_day()),
        }
    }

    fn holiday_label(&self) -> String {
        self.holiday_name
            .clone()
            .unwrap_or_else(|| DEFAULT_HOLIDAY_NAME.to_string())
    }
}

/// A staff member's shifts relevant to one day.
#[derive(Debug, Clone, Default)]
pub struct DayShifts<'a> {
    /// Today's assignments, markers excluded.
    pub todays_on_call: Vec<&'a ShiftAssignment>,
    /// Yesterday's assignments, markers excluded.
    pub yesterdays_on_call: Vec<&'a ShiftAssignment>,
    /// Today carries an explicit post-on-call marker.
    pub has_explicit_marker: bool,
}

impl<'a> DayShifts<'a> {
    /// Collects the assignments for `staff_id` around `date`.
    pub fn collect(
        staff_id: &'a str,
        date: NaiveDate,
        assignments: &'a AssignmentBook,
        catalog: &ShiftCatalog,
    ) -> Self {
        let mut shifts = DayShifts::default();
        for assignment in assignments.for_staff_on(staff_id, date) {
            if catalog.is_post_on_call(&assignment.shift_code) {
                shifts.has_explicit_marker = true;
            } else {
                shifts.todays_on_call.push(assignment);
            }
        }
        if let Some(yesterday) = date.pred_opt() {
            shifts.yesterdays_on_call = assignments
                .for_staff_on(staff_id, yesterday)
                .filter(|a| !catalog.is_post_on_call(&a.shift_code))
                .collect();
        }
        shifts
    }

    fn codes(list: &[&ShiftAssignment]) -> Vec<String> {
        list.iter().map(|a| a.shift_code.clone()).collect()
    }

    /// Today's on-call shift codes.
    pub fn todays_codes(&self) -> Vec<String> {
        Self::codes(&self.todays_on_call)
    }

    /// Yesterday's on-call shift codes.
    pub fn yesterdays_codes(&self) -> Vec<String> {
        Self::codes(&self.yesterdays_on_call)
    }
}

/// The outcome of classifying one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedDay {
    /// The matching rule.
    pub classification: DayClassification,
    /// Entry time, if any.
    pub entry_time: Option<NaiveTime>,
    /// Exit time, if any.
    pub exit_time: Option<NaiveTime>,
    /// Worked hours, in whole hours.
    pub worked_hours: Decimal,
    /// Expected hours.
    pub expected_hours: Decimal,
    /// Why the rule matched and how the figures were obtained.
    pub reasoning: String,
}

fn resolve_definition<'c>(
    assignment: &ShiftAssignment,
    catalog: &'c ShiftCatalog,
) -> Option<&'c ShiftDefinition> {
    let definition = catalog.get(&assignment.shift_code);
    if definition.is_none() {
        warn!(
            staff_id = %assignment.staff_id,
            date = %assignment.date,
            code = %assignment.shift_code,
            "Shift definition not found, using default times"
        );
    }
    definition
}

/// Classifies one day for one staff member.
///
/// Missing shift definitions never fail the classification: the default
/// start (08:00), post-on-call exit (08:00) and expected hours (10) are
/// used instead.
pub fn classify_day(ctx: &DayContext, shifts: &DayShifts<'_>, catalog: &ShiftCatalog) -> ClassifiedDay {
    if let Some(assignment) = shifts.todays_on_call.first() {
        return classify_on_call(ctx, assignment, catalog);
    }

    if !shifts.yesterdays_on_call.is_empty() || shifts.has_explicit_marker {
        return classify_post_on_call(ctx, shifts, catalog);
    }

    if ctx.is_holiday {
        let name = ctx.holiday_label();
        return ClassifiedDay {
            reasoning: format!("{} is an official holiday with no shift", name),
            classification: DayClassification::Holiday { name },
            entry_time: None,
            exit_time: None,
            worked_hours: Decimal::ZERO,
            expected_hours: Decimal::ZERO,
        };
    }

    if ctx.is_eve_of_holiday {
        let (entry, exit) = (ordinary_entry(), eve_exit());
        return ClassifiedDay {
            classification: DayClassification::EveOfHoliday,
            entry_time: Some(entry),
            exit_time: Some(exit),
            worked_hours: elapsed_whole_hours(entry, exit),
            expected_hours: EVE_EXPECTED_HOURS,
            reasoning: "Eve-of-holiday with no shift counts as a half day".to_string(),
        };
    }

    if ctx.is_weekend {
        return ClassifiedDay {
            classification: DayClassification::Weekend,
            entry_time: None,
            exit_time: None,
            worked_hours: Decimal::ZERO,
            expected_hours: Decimal::ZERO,
            reasoning: format!("{} with no shift", ctx.weekday),
        };
    }

    let (entry, exit) = (ordinary_entry(), ordinary_exit());
    let expected = catalog
        .ordinary_definition()
        .and_then(|def| expected_hours_for(def, AllotmentDay::Weekday(ctx.weekday)))
        .unwrap_or(DEFAULT_EXPECTED_HOURS);
    ClassifiedDay {
        classification: DayClassification::Ordinary,
        entry_time: Some(entry),
        exit_time: Some(exit),
        worked_hours: elapsed_whole_hours(entry, exit),
        expected_hours: expected,
        reasoning: format!(
            "Ordinary working {} with {} expected hours",
            ctx.weekday,
            expected.normalize()
        ),
    }
}

fn classify_on_call(ctx: &DayContext, assignment: &ShiftAssignment, catalog: &ShiftCatalog) -> ClassifiedDay {
    let definition = resolve_definition(assignment, catalog);
    let shift_name = definition
        .map(|def| def.display_name.clone())
        .unwrap_or_else(|| assignment.shift_code.clone());
    let entry = definition.map_or_else(default_shift_start, |def| def.start_time);
    let exit = end_of_day();

    let (annotation, expected, basis) = if ctx.is_eve_of_holiday {
        (
            OnCallAnnotation::EveOfHoliday,
            ON_CALL_EVE_EXPECTED_HOURS,
            "eve-of-holiday half-day credit",
        )
    } else if ctx.is_holiday {
        (
            OnCallAnnotation::Holiday,
            Decimal::ZERO,
            "official holiday, all hours are excess",
        )
    } else {
        let expected = definition
            .and_then(|def| expected_hours_for(def, AllotmentDay::Weekday(ctx.weekday)))
            .unwrap_or(DEFAULT_EXPECTED_HOURS);
        (OnCallAnnotation::None, expected, "weekday allotment of the shift")
    };

    ClassifiedDay {
        reasoning: format!(
            "On-call shift {} from {} to end of day; {} expected hours ({})",
            assignment.shift_code,
            entry.format("%H:%M"),
            expected.normalize(),
            basis
        ),
        classification: DayClassification::OnCall {
            shift_name,
            annotation,
        },
        entry_time: Some(entry),
        exit_time: Some(exit),
        worked_hours: elapsed_whole_hours(entry, exit),
        expected_hours: expected,
    }
}

fn classify_post_on_call(ctx: &DayContext, shifts: &DayShifts<'_>, catalog: &ShiftCatalog) -> ClassifiedDay {
    let entry = NaiveTime::MIN;
    let exit = shifts
        .yesterdays_on_call
        .first()
        .and_then(|assignment| resolve_definition(assignment, catalog))
        .map_or_else(default_post_on_call_exit, |def| def.end_time);

    let (variant, expected) = if ctx.is_holiday {
        (PostOnCallVariant::Holiday(ctx.holiday_label()), Decimal::ZERO)
    } else if ctx.yesterday_was_eve || ctx.yesterday_was_holiday {
        if !ctx.is_weekend {
            (PostOnCallVariant::Interrupted, DEFAULT_EXPECTED_HOURS)
        } else {
            (PostOnCallVariant::Plain, Decimal::ZERO)
        }
    } else if ctx.is_weekend {
        (PostOnCallVariant::Plain, Decimal::ZERO)
    } else {
        (PostOnCallVariant::Plain, DEFAULT_EXPECTED_HOURS)
    };

    let source = if shifts.yesterdays_on_call.is_empty() {
        "explicit marker"
    } else {
        "previous day's on-call shift"
    };

    ClassifiedDay {
        reasoning: format!(
            "Post-on-call day ({}) until {}; {} expected hours",
            source,
            exit.format("%H:%M"),
            expected.normalize()
        ),
        classification: DayClassification::PostOnCall { variant },
        entry_time: Some(entry),
        exit_time: Some(exit),
        worked_hours: elapsed_whole_hours(entry, exit),
        expected_hours: expected,
    }
}
