//! Shift definition catalog.
//!
//! This module provides the [`ShiftCatalog`] type that stores shift
//! definitions by code and answers the small set of questions the engine
//! and the rotation assigner ask about them.

mod shift_catalog;

pub use shift_catalog::{DEFAULT_EXPECTED_HOURS, ShiftCatalog, duration_label, expected_hours_for};
