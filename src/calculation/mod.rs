//! Calculation logic for the entitlement engine.
//!
//! This module contains wall-clock arithmetic, day classification, the
//! per-day and monthly entitlement calculations, and the round-robin
//! on-call rotation.

mod clock;
mod daily_entitlement;
mod day_classification;
mod monthly_entitlement;
mod rotation;

pub use clock::{
    MINUTES_PER_DAY, elapsed_minutes, elapsed_whole_hours, format_clock, minutes_since_midnight,
    parse_clock,
};
pub use daily_entitlement::{DailyEntitlementResult, compute_daily_entitlement, turkish_weekday_name};
pub use day_classification::{
    ClassifiedDay, DayContext, DayShifts, EVE_EXPECTED_HOURS, ON_CALL_EVE_EXPECTED_HOURS,
    classify_day, default_post_on_call_exit, default_shift_start, end_of_day, eve_exit,
    ordinary_entry, ordinary_exit,
};
pub use monthly_entitlement::{ENGINE_VERSION, compute_monthly_entitlement};
pub use rotation::{RotationCodes, auto_distribute, redistribute_month, validate_rotation_codes};
