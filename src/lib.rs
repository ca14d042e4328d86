//! On-call overtime entitlement engine (nöbet hakedişi)
//!
//! This crate computes monthly worked, expected, missing and excess hours
//! for hospital staff working 24-hour on-call rotations, taking official
//! Turkish holidays and eve-of-holiday half days into account. It also
//! distributes the on-call rotation for a month.

#![warn(missing_docs)]

pub mod calculation;
pub mod calendar;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
