//! The holiday calendar facade used by the entitlement engine.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::error::first_day_of_month;
use crate::models::HolidayRecord;

use super::cache::{DateRange, HolidayCache};
use super::source::{HolidayMap, HolidaySource, StaticHolidaySource};

/// Answers holiday and eve-of-holiday questions per calendar date.
///
/// Lookups go to the primary source one calendar month at a time and are
/// cached per month. When the primary source fails, the built-in table
/// answers instead and nothing is cached, so the next query retries the
/// primary source.
///
/// # Example
///
/// ```
/// use hakedis_engine::calendar::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::embedded();
/// let republic_day = NaiveDate::from_ymd_opt(2026, 10, 29).unwrap();
/// let eve = NaiveDate::from_ymd_opt(2026, 10, 28).unwrap();
///
/// assert!(calendar.is_holiday(republic_day));
/// assert!(calendar.is_eve_of_holiday(eve));
/// assert!(!calendar.is_holiday(eve));
/// assert_eq!(calendar.holiday_name(republic_day).as_deref(), Some("Cumhuriyet Bayramı"));
/// ```
pub struct HolidayCalendar {
    primary: Box<dyn HolidaySource>,
    fallback: StaticHolidaySource,
    cache: Arc<HolidayCache>,
}

impl HolidayCalendar {
    /// A calendar backed by `source`, falling back to the built-in table.
    pub fn new(source: impl HolidaySource + 'static) -> Self {
        Self {
            primary: Box::new(source),
            fallback: StaticHolidaySource::embedded(),
            cache: Arc::new(HolidayCache::new()),
        }
    }

    /// A calendar backed only by the built-in table.
    pub fn embedded() -> Self {
        Self::new(StaticHolidaySource::embedded())
    }

    /// Replaces the cache, e.g. with one shared process-wide.
    pub fn with_cache(mut self, cache: Arc<HolidayCache>) -> Self {
        self.cache = cache;
        self
    }

    /// The cache used by this calendar.
    pub fn cache(&self) -> &Arc<HolidayCache> {
        &self.cache
    }

    /// Drops all cached lookups. Call after any write to the holiday data.
    pub fn invalidate_cache(&self) {
        debug!(source = self.primary.name(), "Invalidating holiday cache");
        self.cache.invalidate();
    }

    /// The record for a date, if it is a holiday or eve.
    pub fn record(&self, date: NaiveDate) -> Option<HolidayRecord> {
        let month = month_range(date)?;
        self.lookup(month).get(&date).cloned()
    }

    /// Returns true when the date is an official (full day) holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.record(date).is_some_and(|r| r.is_full_day())
    }

    /// Returns true when the date is an eve-of-holiday half day.
    pub fn is_eve_of_holiday(&self, date: NaiveDate) -> bool {
        self.record(date).is_some_and(|r| r.is_half_day())
    }

    /// The name of the holiday or eve on a date.
    pub fn holiday_name(&self, date: NaiveDate) -> Option<String> {
        self.record(date).map(|r| r.display_name().to_string())
    }

    /// All holidays and eves between `start` and `end`, both inclusive.
    pub fn holidays_between(&self, start: NaiveDate, end: NaiveDate) -> HolidayMap {
        if end < start {
            return HolidayMap::new();
        }
        self.lookup(DateRange::new(start, end)).as_ref().clone()
    }

    fn lookup(&self, range: DateRange) -> Arc<HolidayMap> {
        if let Some(hit) = self.cache.get(&range) {
            return hit;
        }

        match self.primary.holidays_between(range.start, range.end) {
            Ok(holidays) => self.cache.insert(range, holidays),
            Err(err) => {
                warn!(
                    source = self.primary.name(),
                    start = %range.start,
                    end = %range.end,
                    error = %err,
                    "Holiday source failed, using embedded table"
                );
                // The embedded table cannot fail.
                Arc::new(
                    self.fallback
                        .holidays_between(range.start, range.end)
                        .unwrap_or_default(),
                )
            }
        }
    }
}

impl std::fmt::Debug for HolidayCalendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HolidayCalendar")
            .field("primary", &self.primary.name())
            .field("cached_ranges", &self.cache.len())
            .finish()
    }
}

fn month_range(date: NaiveDate) -> Option<DateRange> {
    let start = first_day_of_month(date.year(), date.month()).ok()?;
    let next = start.checked_add_months(chrono::Months::new(1))?;
    Some(DateRange::new(start, next.pred_opt()?))
}
