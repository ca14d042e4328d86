//! Core data models for the hakedis engine.
//!
//! This module contains all the domain models used throughout the engine.

pub(crate) mod clock_format;
mod assignment;
mod entitlement;
mod holiday;
mod shift_definition;
mod staff;

pub use assignment::{AssignmentBook, ShiftAssignment};
pub use entitlement::{
    AuditStep, DailyEntitlement, DayClassification, EntitlementTotals, MonthlyEntitlementSummary,
    OnCallAnnotation, PostOnCallVariant,
};
pub use holiday::{DEFAULT_HOLIDAY_NAME, HolidayKind, HolidayRecord};
pub use shift_definition::{AllotmentDay, HourAllotment, ShiftDefinition, ShiftKind};
pub use staff::{Roster, StaffMember};
