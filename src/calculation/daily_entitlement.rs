//! Per-day entitlement figures.
//!
//! This module turns a [`ClassifiedDay`] into a [`DailyEntitlement`] ledger
//! entry, computing the missing and excess hours and recording an audit step
//! for the decision.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde_json::json;

use crate::calendar::HolidayCalendar;
use crate::catalog::ShiftCatalog;
use crate::models::{AssignmentBook, AuditStep, DailyEntitlement, DayClassification};

use super::clock::format_clock;
use super::day_classification::{ClassifiedDay, DayContext, DayShifts, classify_day};

/// The result of computing one day's entitlement.
#[derive(Debug, Clone)]
pub struct DailyEntitlementResult {
    /// The ledger entry.
    pub entitlement: DailyEntitlement,
    /// The audit step for the classification.
    pub audit_step: AuditStep,
}

/// Returns the Turkish name of a weekday.
pub fn turkish_weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Pazartesi",
        Weekday::Tue => "Salı",
        Weekday::Wed => "Çarşamba",
        Weekday::Thu => "Perşembe",
        Weekday::Fri => "Cuma",
        Weekday::Sat => "Cumartesi",
        Weekday::Sun => "Pazar",
    }
}

fn rule_name(classification: &DayClassification) -> &'static str {
    match classification {
        DayClassification::OnCall { .. } => "On-Call Day",
        DayClassification::PostOnCall { .. } => "Post-On-Call Day",
        DayClassification::Holiday { .. } => "Holiday Without Shift",
        DayClassification::EveOfHoliday => "Eve-of-Holiday Without Shift",
        DayClassification::Weekend => "Weekend Without Shift",
        DayClassification::Ordinary => "Ordinary Working Day",
    }
}

/// Computes one day's entitlement for a staff member.
///
/// # Arguments
///
/// * `staff_id` - The staff member whose assignments are read
/// * `date` - The day to compute
/// * `assignments` - All known assignments; the previous day is consulted too
/// * `catalog` - Shift definitions used to resolve codes
/// * `calendar` - Holiday calendar for the day and the day before
/// * `step_number` - The audit step number to use
///
/// # Example
///
/// ```
/// use hakedis_engine::calculation::compute_daily_entitlement;
/// use hakedis_engine::calendar::HolidayCalendar;
/// use hakedis_engine::catalog::ShiftCatalog;
/// use hakedis_engine::models::AssignmentBook;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let result = compute_daily_entitlement(
///     "ayse",
///     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     &AssignmentBook::new(),
///     &ShiftCatalog::new(),
///     &HolidayCalendar::embedded(),
///     1,
/// );
/// assert_eq!(result.entitlement.shift_type, "Mesai");
/// assert_eq!(result.entitlement.worked_hours, Decimal::from(10));
/// assert_eq!(result.entitlement.missing_hours, Decimal::ZERO);
/// ```
pub fn compute_daily_entitlement(
    staff_id: &str,
    date: NaiveDate,
    assignments: &AssignmentBook,
    catalog: &ShiftCatalog,
    calendar: &HolidayCalendar,
    step_number: u32,
) -> DailyEntitlementResult {
    let ctx = DayContext::resolve(date, calendar);
    let shifts = DayShifts::collect(staff_id, date, assignments, catalog);
    let classified = classify_day(&ctx, &shifts, catalog);
    build_result(&ctx, &shifts, classified, step_number)
}

fn build_result(
    ctx: &DayContext,
    shifts: &DayShifts<'_>,
    classified: ClassifiedDay,
    step_number: u32,
) -> DailyEntitlementResult {
    let ClassifiedDay {
        classification,
        entry_time,
        exit_time,
        worked_hours,
        expected_hours,
        reasoning,
    } = classified;

    let missing_hours = (expected_hours - worked_hours).max(Decimal::ZERO);
    let excess_hours = (worked_hours - expected_hours).max(Decimal::ZERO);
    let shift_type = classification.to_string();

    let audit_step = AuditStep {
        step_number,
        rule_id: classification.rule_id().to_string(),
        rule_name: rule_name(&classification).to_string(),
        input: json!({
            "date": ctx.date.to_string(),
            "weekday": turkish_weekday_name(ctx.weekday),
            "is_weekend": ctx.is_weekend,
            "is_holiday": ctx.is_holiday,
            "is_eve_of_holiday": ctx.is_eve_of_holiday,
            "yesterday_was_holiday": ctx.yesterday_was_holiday,
            "yesterday_was_eve": ctx.yesterday_was_eve,
            "on_call_codes": shifts.todays_codes(),
            "previous_day_codes": shifts.yesterdays_codes(),
            "has_explicit_marker": shifts.has_explicit_marker,
        }),
        output: json!({
            "shift_type": shift_type,
            "entry_time": entry_time.map(format_clock),
            "exit_time": exit_time.map(format_clock),
            "worked_hours": worked_hours.normalize().to_string(),
            "expected_hours": expected_hours.normalize().to_string(),
            "missing_hours": missing_hours.normalize().to_string(),
            "excess_hours": excess_hours.normalize().to_string(),
        }),
        reasoning,
    };

    let entitlement = DailyEntitlement {
        date: ctx.date,
        weekday_name: turkish_weekday_name(ctx.weekday).to_string(),
        is_weekend: ctx.is_weekend,
        is_holiday: ctx.is_holiday,
        is_eve_of_holiday: ctx.is_eve_of_holiday,
        holiday_name: ctx.holiday_name.clone(),
        entry_time,
        exit_time,
        classification,
        shift_type,
        worked_hours,
        expected_hours,
        missing_hours,
        excess_hours,
    };

    DailyEntitlementResult {
        entitlement,
        audit_step,
    }
}
