//! Holiday data sources.
//!
//! A [`HolidaySource`] answers "which holidays fall in this date range". The
//! calendar is written against the trait so a remote service, a file or the
//! built-in table can stand behind it.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::HolidayRecord;

use super::embedded::embedded_records;

/// Holidays keyed by date.
pub type HolidayMap = BTreeMap<NaiveDate, HolidayRecord>;

/// A provider of holiday records for a date range.
pub trait HolidaySource: Send + Sync {
    /// A short name used in logs and errors.
    fn name(&self) -> &str;

    /// Returns the holidays between `start` and `end`, both inclusive.
    fn holidays_between(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<HolidayMap>;
}

/// A source backed by an in-memory table.
///
/// # Example
///
/// ```
/// use hakedis_engine::calendar::{HolidaySource, StaticHolidaySource};
/// use chrono::NaiveDate;
///
/// let source = StaticHolidaySource::embedded();
/// let start = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 10, 31).unwrap();
/// let october = source.holidays_between(start, end).unwrap();
/// assert_eq!(october.len(), 2); // 28 (arife) and 29 October
/// ```
#[derive(Debug, Clone)]
pub struct StaticHolidaySource {
    name: String,
    table: HolidayMap,
}

impl StaticHolidaySource {
    /// Builds a source from records; a later record for the same date wins.
    pub fn new(name: impl Into<String>, records: impl IntoIterator<Item = HolidayRecord>) -> Self {
        let table = records.into_iter().map(|r| (r.date, r)).collect();
        Self {
            name: name.into(),
            table,
        }
    }

    /// The built-in Turkish holiday table.
    pub fn embedded() -> Self {
        Self::new("embedded", embedded_records())
    }

    /// Number of dates in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true when the table is empty.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl HolidaySource for StaticHolidaySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn holidays_between(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<HolidayMap> {
        if end < start {
            return Ok(HolidayMap::new());
        }
        Ok(self
            .table
            .range(start..=end)
            .map(|(date, record)| (*date, record.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_range_is_inclusive() {
        let source = StaticHolidaySource::embedded();
        let found = source
            .holidays_between(make_date("2026-03-19"), make_date("2026-03-22"))
            .unwrap();
        assert_eq!(found.len(), 4);
        assert!(found[&make_date("2026-03-19")].is_half_day());
    }

    #[test]
    fn test_reversed_range_is_empty() {
        let source = StaticHolidaySource::embedded();
        let found = source
            .holidays_between(make_date("2026-12-31"), make_date("2026-01-01"))
            .unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_later_record_wins_on_collision() {
        let date = make_date("2027-05-19");
        let source = StaticHolidaySource::new(
            "test",
            vec![
                HolidayRecord::full_day(date, "first"),
                HolidayRecord::full_day(date, "second"),
            ],
        );
        assert_eq!(source.len(), 1);
        let found = source.holidays_between(date, date).unwrap();
        assert_eq!(found[&date].name, "second");
    }

    #[test]
    fn test_embedded_overlap_prefers_religious_name() {
        let date = make_date("2027-05-19");
        let found = StaticHolidaySource::embedded()
            .holidays_between(date, date)
            .unwrap();
        assert_eq!(found[&date].name, "Kurban Bayramı 4. Gün");
    }
}
