//! Shift assignments and the date-keyed book that holds them.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One shift held by one staff member on one date.
///
/// The shift definition is referenced by code; a code that the catalog
/// cannot resolve is tolerated and handled with default times.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftAssignment {
    /// The staff member holding the shift.
    pub staff_id: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The code of the assigned shift definition.
    pub shift_code: String,
}

impl ShiftAssignment {
    /// Creates an assignment.
    pub fn new(staff_id: impl Into<String>, date: NaiveDate, shift_code: impl Into<String>) -> Self {
        Self {
            staff_id: staff_id.into(),
            date,
            shift_code: shift_code.into(),
        }
    }

    fn same_slot(&self, other: &ShiftAssignment) -> bool {
        self.staff_id == other.staff_id && self.date == other.date && self.shift_code == other.shift_code
    }
}

/// Shift assignments grouped by date, in date order.
///
/// A staff member may hold several assignments on the same date (for
/// example an on-call shift and a post-on-call marker). Inserting an
/// assignment for a staff/date/code that already exists replaces it.
///
/// # Example
///
/// ```
/// use hakedis_engine::models::{AssignmentBook, ShiftAssignment};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let mut book = AssignmentBook::new();
/// book.insert(ShiftAssignment::new("ayse", date, "N"));
/// book.insert(ShiftAssignment::new("ayse", date, "N"));
/// assert_eq!(book.len(), 1);
/// assert_eq!(book.for_staff_on("ayse", date).count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentBook {
    by_date: BTreeMap<NaiveDate, Vec<ShiftAssignment>>,
}

impl AssignmentBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an assignment, overwriting an identical staff/date/code entry.
    pub fn insert(&mut self, assignment: ShiftAssignment) {
        let day = self.by_date.entry(assignment.date).or_default();
        match day.iter_mut().find(|existing| existing.same_slot(&assignment)) {
            Some(existing) => *existing = assignment,
            None => day.push(assignment),
        }
    }

    /// Removes the assignment of `shift_code` to `staff_id` on `date`.
    ///
    /// Returns true if an assignment was removed.
    pub fn remove(&mut self, staff_id: &str, date: NaiveDate, shift_code: &str) -> bool {
        let Some(day) = self.by_date.get_mut(&date) else {
            return false;
        };
        let before = day.len();
        day.retain(|a| !(a.staff_id == staff_id && a.shift_code == shift_code));
        let removed = day.len() != before;
        if day.is_empty() {
            self.by_date.remove(&date);
        }
        removed
    }

    /// All assignments on a date.
    pub fn on(&self, date: NaiveDate) -> &[ShiftAssignment] {
        self.by_date.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The assignments of one staff member on a date.
    pub fn for_staff_on<'a>(
        &'a self,
        staff_id: &'a str,
        date: NaiveDate,
    ) -> impl Iterator<Item = &'a ShiftAssignment> + 'a {
        self.on(date).iter().filter(move |a| a.staff_id == staff_id)
    }

    /// All assignments falling in the given month, in date order.
    pub fn in_month(&self, year: i32, month: u32) -> impl Iterator<Item = &ShiftAssignment> {
        self.by_date
            .iter()
            .filter(move |(date, _)| date.year() == year && date.month() == month)
            .flat_map(|(_, day)| day.iter())
    }

    /// Removes every assignment in the given month and returns how many were removed.
    pub fn clear_month(&mut self, year: i32, month: u32) -> usize {
        let mut removed = 0;
        self.by_date.retain(|date, day| {
            if date.year() == year && date.month() == month {
                removed += day.len();
                false
            } else {
                true
            }
        });
        removed
    }

    /// Clears the month, then writes the new assignments.
    ///
    /// Assignments dated outside the month (such as a marker rolling into
    /// the next month) are written as well.
    pub fn replace_month(
        &mut self,
        year: i32,
        month: u32,
        assignments: impl IntoIterator<Item = ShiftAssignment>,
    ) -> usize {
        self.clear_month(year, month);
        let mut written = 0;
        for assignment in assignments {
            self.insert(assignment);
            written += 1;
        }
        written
    }

    /// Iterates every assignment in date order.
    pub fn iter(&self) -> impl Iterator<Item = &ShiftAssignment> {
        self.by_date.values().flat_map(|day| day.iter())
    }

    /// The total number of assignments.
    pub fn len(&self) -> usize {
        self.by_date.values().map(Vec::len).sum()
    }

    /// Returns true when the book holds no assignments.
    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}

impl FromIterator<ShiftAssignment> for AssignmentBook {
    fn from_iter<I: IntoIterator<Item = ShiftAssignment>>(iter: I) -> Self {
        let mut book = AssignmentBook::new();
        book.extend(iter);
        book
    }
}

impl Extend<ShiftAssignment> for AssignmentBook {
    fn extend<I: IntoIterator<Item = ShiftAssignment>>(&mut self, iter: I) {
        for assignment in iter {
            self.insert(assignment);
        }
    }
}
