//! Range-keyed cache of holiday lookups.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::NaiveDate;

use super::source::HolidayMap;

/// An inclusive date range used as a cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    /// First day of the range.
    pub start: NaiveDate,
    /// Last day of the range.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns true if the date lies inside the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Holiday query results keyed by the queried range.
///
/// The cache is an explicit object: the calendar owns one, and several
/// calendars may share one through an `Arc`. Writers to the underlying
/// holiday data call [`HolidayCache::invalidate`].
#[derive(Debug, Default)]
pub struct HolidayCache {
    entries: RwLock<HashMap<DateRange, Arc<HolidayMap>>>,
}

impl HolidayCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached result for a range.
    pub fn get(&self, range: &DateRange) -> Option<Arc<HolidayMap>> {
        // Poisoning leaves the map intact.
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(range).cloned()
    }

    /// Stores the result for a range and returns the shared copy.
    pub fn insert(&self, range: DateRange, holidays: HolidayMap) -> Arc<HolidayMap> {
        let shared = Arc::new(holidays);
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(range, Arc::clone(&shared));
        shared
    }

    /// Drops every cached range.
    pub fn invalidate(&self) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.clear();
    }

    /// Number of cached ranges.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Returns true when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HolidayRecord;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_insert_then_get_returns_same_map() {
        let cache = HolidayCache::new();
        let range = DateRange::new(make_date("2026-01-01"), make_date("2026-01-31"));
        let mut map = HolidayMap::new();
        map.insert(
            make_date("2026-01-01"),
            HolidayRecord::full_day(make_date("2026-01-01"), "Yılbaşı"),
        );
        let stored = cache.insert(range, map);
        let fetched = cache.get(&range).unwrap();
        assert!(Arc::ptr_eq(&stored, &fetched));
    }

    #[test]
    fn test_invalidate_clears_all_ranges() {
        let cache = HolidayCache::new();
        cache.insert(
            DateRange::new(make_date("2026-01-01"), make_date("2026-01-31")),
            HolidayMap::new(),
        );
        cache.insert(
            DateRange::new(make_date("2026-02-01"), make_date("2026-02-28")),
            HolidayMap::new(),
        );
        assert_eq!(cache.len(), 2);
        cache.invalidate();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_range_contains_is_inclusive() {
        let range = DateRange::new(make_date("2026-03-01"), make_date("2026-03-31"));
        assert!(range.contains(make_date("2026-03-01")));
        assert!(range.contains(make_date("2026-03-31")));
        assert!(!range.contains(make_date("2026-04-01")));
    }
}
