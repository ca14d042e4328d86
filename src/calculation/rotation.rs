//! Round-robin on-call rotation.
//!
//! The rotation assigns one on-call shift per day of a month, cycling
//! through the on-duty staff in order. It continues from whoever held the
//! on-call shift on the last day of the previous month, and every on-call
//! day is followed by a post-on-call marker for the same person.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::ShiftCatalog;
use crate::error::{EngineError, EngineResult, first_day_of_month};
use crate::models::{AssignmentBook, ShiftAssignment, ShiftKind};

/// The shift codes written by the rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationCodes {
    /// Code of the on-call shift.
    pub on_call_code: String,
    /// Code of the post-on-call marker.
    pub post_on_call_code: String,
}

impl Default for RotationCodes {
    fn default() -> Self {
        Self {
            on_call_code: "N".to_string(),
            post_on_call_code: "NE".to_string(),
        }
    }
}

fn month_bounds(month: u32, year: i32) -> EngineResult<(NaiveDate, NaiveDate)> {
    let first = first_day_of_month(year, month)?;
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or(EngineError::InvalidPeriod { year, month })?;
    Ok((first, last))
}

/// Assigns the on-call shifts of a month in round-robin order.
///
/// The returned list holds, in order: the day-1 marker for the previous
/// month's last on-call holder (when one is found), then for each day of
/// the month the on-call assignment followed by the next-day marker. The
/// last marker falls on the first day of the following month.
///
/// A previous holder who is no longer on duty still gets the day-1 marker;
/// the rotation then starts from the first on-duty staff member.
///
/// # Errors
///
/// * `InvalidState` if `on_duty_staff` is empty
/// * `InvalidPeriod` if the month is not valid
///
/// # Example
///
/// ```
/// use hakedis_engine::calculation::{RotationCodes, auto_distribute};
/// use hakedis_engine::models::{AssignmentBook, ShiftAssignment};
/// use chrono::NaiveDate;
///
/// let staff = vec!["a".to_string(), "b".to_string(), "c".to_string()];
/// let previous: AssignmentBook = vec![ShiftAssignment::new(
///     "c",
///     NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(),
///     "N",
/// )]
/// .into_iter()
/// .collect();
///
/// let created = auto_distribute(3, 2026, &staff, &previous, &RotationCodes::default()).unwrap();
/// assert_eq!(created[0].staff_id, "c");
/// assert_eq!(created[0].shift_code, "NE");
/// assert_eq!(created[1].staff_id, "a");
/// assert_eq!(created[1].shift_code, "N");
/// ```
pub fn auto_distribute(
    month: u32,
    year: i32,
    on_duty_staff: &[String],
    previous_month: &AssignmentBook,
    codes: &RotationCodes,
) -> EngineResult<Vec<ShiftAssignment>> {
    if on_duty_staff.is_empty() {
        return Err(EngineError::invalid_state(
            "no on-duty staff to distribute on-call shifts to",
        ));
    }
    let (first_day, last_day) = month_bounds(month, year)?;

    let previous_holder = first_day.pred_opt().and_then(|last_of_previous| {
        previous_month
            .on(last_of_previous)
            .iter()
            .find(|a| a.shift_code == codes.on_call_code)
            .map(|a| a.staff_id.clone())
    });

    let starting_index = previous_holder
        .as_ref()
        .and_then(|holder| on_duty_staff.iter().position(|id| id == holder))
        .map_or(0, |position| (position + 1) % on_duty_staff.len());

    debug!(
        year,
        month,
        previous_holder = previous_holder.as_deref().unwrap_or("-"),
        starting_index,
        "Starting rotation"
    );

    let mut created = Vec::new();
    if let Some(holder) = previous_holder {
        created.push(ShiftAssignment::new(
            holder,
            first_day,
            codes.post_on_call_code.as_str(),
        ));
    }

    let days = first_day.iter_days().take_while(|d| *d <= last_day);
    for (offset, date) in days.enumerate() {
        let staff_id = &on_duty_staff[(starting_index + offset) % on_duty_staff.len()];
        created.push(ShiftAssignment::new(
            staff_id.as_str(),
            date,
            codes.on_call_code.as_str(),
        ));
        if let Some(next_day) = date.succ_opt() {
            created.push(ShiftAssignment::new(
                staff_id.as_str(),
                next_day,
                codes.post_on_call_code.as_str(),
            ));
        }
    }

    info!(
        year,
        month,
        staff = on_duty_staff.len(),
        assignments = created.len(),
        "On-call rotation distributed"
    );
    Ok(created)
}

/// Checks that the rotation codes resolve to definitions of the right kind.
///
/// The on-call code must be a regular shift and the marker code a
/// post-on-call marker, otherwise the engine would misread the rotation.
pub fn validate_rotation_codes(catalog: &ShiftCatalog, codes: &RotationCodes) -> EngineResult<()> {
    let on_call = catalog.get(&codes.on_call_code).ok_or_else(|| {
        EngineError::invalid_state(format!(
            "on-call code '{}' is not in the shift catalog",
            codes.on_call_code
        ))
    })?;
    if on_call.kind != ShiftKind::Regular {
        return Err(EngineError::invalid_state(format!(
            "on-call code '{}' must be a regular shift",
            codes.on_call_code
        )));
    }

    let marker = catalog.get(&codes.post_on_call_code).ok_or_else(|| {
        EngineError::invalid_state(format!(
            "post-on-call code '{}' is not in the shift catalog",
            codes.post_on_call_code
        ))
    })?;
    if marker.kind != ShiftKind::PostOnCall {
        return Err(EngineError::invalid_state(format!(
            "post-on-call code '{}' must be a post-on-call marker",
            codes.post_on_call_code
        )));
    }
    Ok(())
}

/// Recomputes a month's rotation inside an assignment book.
///
/// The previous month's assignments are read from the same book, the
/// target month is cleared and the new rotation written, including the
/// marker on the first day of the following month. Returns the
/// number of assignments written; re-running with the same book contents
/// yields the same result.
pub fn redistribute_month(
    book: &mut AssignmentBook,
    month: u32,
    year: i32,
    on_duty_staff: &[String],
    codes: &RotationCodes,
) -> EngineResult<usize> {
    let created = auto_distribute(month, year, on_duty_staff, book, codes)?;
    Ok(book.replace_month(year, month, created))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveTime};
    use crate::models::ShiftDefinition;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn staff(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn previous(holder: &str, date: &str) -> AssignmentBook {
        vec![ShiftAssignment::new(holder, make_date(date), "N")]
            .into_iter()
            .collect()
    }

    fn on_call_holder(created: &[ShiftAssignment], date: NaiveDate) -> Option<&str> {
        created
            .iter()
            .find(|a| a.date == date && a.shift_code == "N")
            .map(|a| a.staff_id.as_str())
    }

    // ==========================================================================
    // RT-001: continue after the previous month's last holder
    // ==========================================================================
    #[test]
    fn test_rt_001_continues_after_last_holder() {
        let created = auto_distribute(
            3,
            2026,
            &staff(&["a", "b", "c"]),
            &previous("c", "2026-02-28"),
            &RotationCodes::default(),
        )
        .unwrap();

        assert_eq!(created[0], ShiftAssignment::new("c", make_date("2026-03-01"), "NE"));
        assert_eq!(created[1], ShiftAssignment::new("a", make_date("2026-03-01"), "N"));
        assert_eq!(created[2], ShiftAssignment::new("a", make_date("2026-03-02"), "NE"));
        assert_eq!(created[3], ShiftAssignment::new("b", make_date("2026-03-02"), "N"));
        assert_eq!(on_call_holder(&created, make_date("2026-03-03")), Some("c"));
        assert_eq!(on_call_holder(&created, make_date("2026-03-04")), Some("a"));
    }

    // ==========================================================================
    // RT-002: no history starts from the first staff member
    // ==========================================================================
    #[test]
    fn test_rt_002_no_history_starts_at_first() {
        let created = auto_distribute(
            4,
            2026,
            &staff(&["a", "b"]),
            &AssignmentBook::new(),
            &RotationCodes::default(),
        )
        .unwrap();
        assert_eq!(created[0].shift_code, "N");
        assert_eq!(created[0].staff_id, "a");
        // 30 on-call days, 30 markers
        assert_eq!(created.len(), 60);
    }

    // ==========================================================================
    // RT-003: empty staff list fails without assigning anything
    // ==========================================================================
    #[test]
    fn test_rt_003_empty_staff_is_invalid_state() {
        let result = auto_distribute(3, 2026, &[], &AssignmentBook::new(), &RotationCodes::default());
        assert!(matches!(result, Err(EngineError::InvalidState { .. })));
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        let result = auto_distribute(0, 2026, &staff(&["a"]), &AssignmentBook::new(), &RotationCodes::default());
        assert!(matches!(result, Err(EngineError::InvalidPeriod { .. })));
    }

    #[test]
    fn test_same_inputs_give_same_rotation() {
        let args = staff(&["a", "b", "c", "d"]);
        let book = previous("b", "2026-05-31");
        let first = auto_distribute(6, 2026, &args, &book, &RotationCodes::default()).unwrap();
        let second = auto_distribute(6, 2026, &args, &book, &RotationCodes::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_last_marker_falls_in_next_month() {
        let created = auto_distribute(
            1,
            2026,
            &staff(&["a", "b", "c"]),
            &AssignmentBook::new(),
            &RotationCodes::default(),
        )
        .unwrap();
        let last = created.last().unwrap();
        assert_eq!(last.date, make_date("2026-02-01"));
        assert_eq!(last.shift_code, "NE");
        // 31 days: index 30 % 3 == 0
        assert_eq!(last.staff_id, "a");
    }

    #[test]
    fn test_holder_off_roster_still_gets_marker() {
        let created = auto_distribute(
            3,
            2026,
            &staff(&["a", "b"]),
            &previous("z", "2026-02-28"),
            &RotationCodes::default(),
        )
        .unwrap();
        assert_eq!(created[0], ShiftAssignment::new("z", make_date("2026-03-01"), "NE"));
        assert_eq!(created[1].staff_id, "a");
    }

    #[test]
    fn test_holder_at_end_of_list_wraps_and_gets_marker() {
        let created = auto_distribute(
            3,
            2026,
            &staff(&["a", "b"]),
            &previous("b", "2026-02-28"),
            &RotationCodes::default(),
        )
        .unwrap();
        assert_eq!(created[0], ShiftAssignment::new("b", make_date("2026-03-01"), "NE"));
        assert_eq!(created[1], ShiftAssignment::new("a", make_date("2026-03-01"), "N"));
    }

    #[test]
    fn test_every_day_has_exactly_one_on_call() {
        let created = auto_distribute(
            2,
            2026,
            &staff(&["a", "b", "c"]),
            &AssignmentBook::new(),
            &RotationCodes::default(),
        )
        .unwrap();
        for day in 1..=28 {
            let date = NaiveDate::from_ymd_opt(2026, 2, day).unwrap();
            let count = created
                .iter()
                .filter(|a| a.date == date && a.shift_code == "N")
                .count();
            assert_eq!(count, 1, "day {}", date.day());
        }
    }

    #[test]
    fn test_redistribute_is_idempotent() {
        let mut book = previous("c", "2026-02-28");
        let args = staff(&["a", "b", "c"]);
        let written = redistribute_month(&mut book, 3, 2026, &args, &RotationCodes::default()).unwrap();
        assert_eq!(written, 1 + 31 * 2);
        let snapshot: Vec<_> = book.iter().cloned().collect();

        redistribute_month(&mut book, 3, 2026, &args, &RotationCodes::default()).unwrap();
        let again: Vec<_> = book.iter().cloned().collect();
        assert_eq!(snapshot, again);
        // previous month untouched, April 1 marker present
        assert_eq!(book.on(make_date("2026-02-28")).len(), 1);
        assert_eq!(book.on(make_date("2026-04-01")).len(), 1);
    }

    #[test]
    fn test_validate_rotation_codes() {
        let t = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        let midnight = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        let catalog = ShiftCatalog::from_definitions(vec![
            ShiftDefinition::new("N", "Nöbet", t, t),
            ShiftDefinition::new("NE", "Nöbet Ertesi", midnight, t).post_on_call(),
        ])
        .unwrap();
        assert!(validate_rotation_codes(&catalog, &RotationCodes::default()).is_ok());

        let swapped = RotationCodes {
            on_call_code: "NE".to_string(),
            post_on_call_code: "N".to_string(),
        };
        assert!(matches!(
            validate_rotation_codes(&catalog, &swapped),
            Err(EngineError::InvalidState { .. })
        ));

        let missing = RotationCodes {
            on_call_code: "X".to_string(),
            ..RotationCodes::default()
        };
        assert!(validate_rotation_codes(&catalog, &missing).is_err());
    }
}
