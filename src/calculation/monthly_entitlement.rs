//! Monthly entitlement ledger.
//!
//! This module walks every calendar day of a month for one staff member and
//! assembles the [`MonthlyEntitlementSummary`]: the per-day ledger, the
//! month totals and the audit trace.

use std::time::Instant;

use chrono::{Datelike, Months, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::calendar::HolidayCalendar;
use crate::catalog::ShiftCatalog;
use crate::error::{EngineError, EngineResult, first_day_of_month};
use crate::models::{AssignmentBook, EntitlementTotals, MonthlyEntitlementSummary};

use super::daily_entitlement::compute_daily_entitlement;

/// The version recorded on every summary.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Computes a staff member's entitlement ledger for one month.
///
/// Every day of the month gets exactly one entry, in date order. The
/// assignments of the last day of the previous month are consulted so that
/// a post-on-call day on the 1st is recognised. Unknown shift codes never
/// fail the calculation; default times are used instead.
///
/// # Errors
///
/// Returns `InvalidPeriod` if `month` is not 1-12 or the year is out of range.
///
/// # Example
///
/// ```
/// use hakedis_engine::calculation::compute_monthly_entitlement;
/// use hakedis_engine::calendar::HolidayCalendar;
/// use hakedis_engine::catalog::ShiftCatalog;
/// use hakedis_engine::models::AssignmentBook;
///
/// let summary = compute_monthly_entitlement(
///     "ayse",
///     2,
///     2026,
///     &AssignmentBook::new(),
///     &ShiftCatalog::new(),
///     &HolidayCalendar::embedded(),
/// )
/// .unwrap();
/// assert_eq!(summary.days.len(), 28);
/// assert_eq!(summary.audit_trace.len(), 28);
/// ```
pub fn compute_monthly_entitlement(
    staff_id: &str,
    month: u32,
    year: i32,
    assignments: &AssignmentBook,
    catalog: &ShiftCatalog,
    calendar: &HolidayCalendar,
) -> EngineResult<MonthlyEntitlementSummary> {
    let started = Instant::now();
    let first_day = first_day_of_month(year, month)?;
    let next_month = first_day
        .checked_add_months(Months::new(1))
        .ok_or(EngineError::InvalidPeriod { year, month })?;

    let mut days = Vec::new();
    let mut audit_trace = Vec::new();
    let mut totals = EntitlementTotals::default();
    let mut step_number: u32 = 1;

    for date in first_day.iter_days().take_while(|d| *d < next_month) {
        let result =
            compute_daily_entitlement(staff_id, date, assignments, catalog, calendar, step_number);
        debug!(
            staff_id,
            date = %date,
            rule = %result.audit_step.rule_id,
            worked = %result.entitlement.worked_hours,
            expected = %result.entitlement.expected_hours,
            "Classified day"
        );
        totals.accumulate(&result.entitlement);
        days.push(result.entitlement);
        audit_trace.push(result.audit_step);
        step_number += 1;
    }

    info!(
        staff_id,
        year,
        month = first_day.month(),
        days = days.len(),
        worked = %totals.worked_hours,
        expected = %totals.expected_hours,
        excess = %totals.excess_hours,
        missing = %totals.missing_hours,
        elapsed_us = started.elapsed().as_micros() as u64,
        "Monthly entitlement calculated"
    );

    Ok(MonthlyEntitlementSummary {
        calculation_id: Uuid::new_v4(),
        calculated_at: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        staff_id: staff_id.to_string(),
        year,
        month,
        days,
        totals,
        audit_trace,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ShiftAssignment, ShiftDefinition};
    use chrono::{NaiveDate, NaiveTime};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn catalog() -> ShiftCatalog {
        let n = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        let marker_start = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        ShiftCatalog::from_definitions(vec![
            ShiftDefinition::new("N", "Nöbet", n, n),
            ShiftDefinition::new("NE", "Nöbet Ertesi", marker_start, n).post_on_call(),
        ])
        .unwrap()
    }

    fn compute(month: u32, year: i32, book: &AssignmentBook) -> MonthlyEntitlementSummary {
        compute_monthly_entitlement("ayse", month, year, book, &catalog(), &HolidayCalendar::embedded())
            .unwrap()
    }

    // ==========================================================================
    // ME-001: one entry per day, in order
    // ==========================================================================
    #[test]
    fn test_me_001_every_day_once_in_order() {
        for (month, year, expected) in [(1, 2026, 31), (2, 2026, 28), (2, 2024, 29), (4, 2026, 30)] {
            let summary = compute(month, year, &AssignmentBook::new());
            assert_eq!(summary.days.len(), expected);
            assert!(summary.days.windows(2).all(|w| w[0].date < w[1].date));
            assert_eq!(summary.days[0].date.day(), 1);
        }
    }

    // ==========================================================================
    // ME-002: totals are the sums of the daily figures
    // ==========================================================================
    #[test]
    fn test_me_002_totals_equal_daily_sums() {
        let book: AssignmentBook = ["2026-03-03", "2026-03-10", "2026-03-19", "2026-03-28"]
            .iter()
            .map(|d| ShiftAssignment::new("ayse", make_date(d), "N"))
            .collect();
        let summary = compute(3, 2026, &book);
        let worked: Decimal = summary.days.iter().map(|d| d.worked_hours).sum();
        let expected: Decimal = summary.days.iter().map(|d| d.expected_hours).sum();
        let missing: Decimal = summary.days.iter().map(|d| d.missing_hours).sum();
        let excess: Decimal = summary.days.iter().map(|d| d.excess_hours).sum();
        assert_eq!(summary.totals.worked_hours, worked);
        assert_eq!(summary.totals.expected_hours, expected);
        assert_eq!(summary.totals.missing_hours, missing);
        assert_eq!(summary.totals.excess_hours, excess);
    }

    // ==========================================================================
    // ME-003: a shift on the previous month's last day carries over
    // ==========================================================================
    #[test]
    fn test_me_003_previous_month_last_day_carries_over() {
        // 2026-02-28 Saturday on-call, 2026-03-01 Sunday
        let book: AssignmentBook = vec![ShiftAssignment::new("ayse", make_date("2026-02-28"), "N")]
            .into_iter()
            .collect();
        let summary = compute(3, 2026, &book);
        let first = summary.day(make_date("2026-03-01")).unwrap();
        assert!(first.classification.is_post_on_call());
        assert_eq!(first.expected_hours, Decimal::ZERO);
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        let result = compute_monthly_entitlement(
            "ayse",
            13,
            2026,
            &AssignmentBook::new(),
            &catalog(),
            &HolidayCalendar::embedded(),
        );
        assert!(matches!(
            result,
            Err(EngineError::InvalidPeriod { year: 2026, month: 13 })
        ));
    }

    #[test]
    fn test_audit_trace_numbers_steps_from_one() {
        let summary = compute(4, 2026, &AssignmentBook::new());
        let numbers: Vec<u32> = summary.audit_trace.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, (1..=30).collect::<Vec<u32>>());
    }

    #[test]
    fn test_empty_month_only_uses_no_shift_rules() {
        let summary = compute(3, 2026, &AssignmentBook::new());
        // Ramazan Bayramı arife and three holiday days
        assert_eq!(summary.day(make_date("2026-03-19")).unwrap().shift_type, "Arife (Yarım Gün)");
        assert_eq!(
            summary.day(make_date("2026-03-20")).unwrap().shift_type,
            "Ramazan Bayramı 1. Gün"
        );
        assert_eq!(summary.day(make_date("2026-03-23")).unwrap().shift_type, "Mesai");
        assert!(summary.days.iter().all(|d| !d.classification.is_on_call()));
        // 20 ordinary weekdays and one half-day eve
        assert_eq!(summary.totals.excess_hours, Decimal::ZERO);
        assert_eq!(summary.totals.missing_hours, Decimal::ZERO);
        assert_eq!(summary.totals.worked_hours, summary.totals.expected_hours);
        assert_eq!(summary.totals.worked_hours, dec("204"));
    }

    #[test]
    fn test_summary_metadata() {
        let a = compute(1, 2026, &AssignmentBook::new());
        let b = compute(1, 2026, &AssignmentBook::new());
        assert_ne!(a.calculation_id, b.calculation_id);
        assert_eq!(a.engine_version, ENGINE_VERSION);
        assert_eq!(a.staff_id, "ayse");
        assert_eq!((a.year, a.month), (2026, 1));
    }
}
