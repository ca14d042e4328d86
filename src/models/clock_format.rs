//! Serde adapters that read and write wall-clock times as `HH:MM`.

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serializer};

use crate::calculation::{format_clock, parse_clock};

/// `#[serde(with = "clock_format::hhmm")]` for `NaiveTime` fields.
pub mod hhmm {
    use super::*;

    /// Serializes a time as `HH:MM`.
    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_clock(*time))
    }

    /// Deserializes `HH:MM` or `HH:MM:SS`.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_clock(&raw).map_err(serde::de::Error::custom)
    }
}

/// `#[serde(with = "clock_format::hhmm_option")]` for `Option<NaiveTime>` fields.
pub mod hhmm_option {
    use super::*;

    /// Serializes `Some` as `HH:MM` and `None` as null.
    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(time) => serializer.serialize_some(&format_clock(*time)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes an optional `HH:MM` string.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|value| parse_clock(&value).map_err(serde::de::Error::custom))
            .transpose()
    }
}
