//! Holiday calendar for entitlement calculations.
//!
//! This module provides the [`HolidayCalendar`] facade, the pluggable
//! [`HolidaySource`] capability, the explicit [`HolidayCache`] and the
//! built-in Turkish holiday table used as a fallback.

mod cache;
mod embedded;
mod holiday_calendar;
mod source;

pub use cache::{DateRange, HolidayCache};
pub use embedded::{EMBEDDED_YEARS, embedded_records};
pub use holiday_calendar::HolidayCalendar;
pub use source::{HolidayMap, HolidaySource, StaticHolidaySource};
