//! Configuration types for the entitlement engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::calculation::RotationCodes;
use crate::catalog::ShiftCatalog;
use crate::models::{HolidayRecord, Roster, ShiftDefinition};

/// Metadata and engine settings from `engine.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// The human-readable name of the configuration (e.g. the hospital unit).
    pub name: String,
    /// The version of the configuration.
    pub version: String,
    /// Shift codes written by the on-call rotation.
    #[serde(default)]
    pub rotation: RotationCodes,
    /// Code of the shift whose weekday table applies to ordinary working days.
    #[serde(default)]
    pub ordinary_shift_code: Option<String>,
}

/// Shift definitions file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftsConfig {
    /// All configured shift definitions.
    pub shifts: Vec<ShiftDefinition>,
}

/// Holiday file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysConfig {
    /// Holidays and eves.
    pub holidays: Vec<HolidayRecord>,
}

/// The complete engine configuration loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the various
/// YAML files in a configuration directory.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    metadata: EngineMetadata,
    catalog: ShiftCatalog,
    roster: Roster,
    /// Holidays from `holidays.yaml`, when the file is present.
    holidays: Option<Vec<HolidayRecord>>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(
        metadata: EngineMetadata,
        catalog: ShiftCatalog,
        roster: Roster,
        holidays: Option<Vec<HolidayRecord>>,
    ) -> Self {
        Self {
            metadata,
            catalog,
            roster,
            holidays,
        }
    }

    /// Returns the engine metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the shift catalog.
    pub fn catalog(&self) -> &ShiftCatalog {
        &self.catalog
    }

    /// Returns the staff roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the configured holidays, if a holiday file was present.
    pub fn holidays(&self) -> Option<&[HolidayRecord]> {
        self.holidays.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_metadata_defaults_rotation_codes() {
        let yaml = "name: Acil Servis\nversion: \"2026-01\"\n";
        let metadata: EngineMetadata = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(metadata.rotation, RotationCodes::default());
        assert!(metadata.ordinary_shift_code.is_none());
    }

    #[test]
    fn test_engine_metadata_reads_custom_codes() {
        let yaml = r#"
name: Acil Servis
version: "2026-01"
rotation:
  on_call_code: "24"
  post_on_call_code: "24E"
ordinary_shift_code: M
"#;
        let metadata: EngineMetadata = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(metadata.rotation.on_call_code, "24");
        assert_eq!(metadata.rotation.post_on_call_code, "24E");
        assert_eq!(metadata.ordinary_shift_code.as_deref(), Some("M"));
    }

    #[test]
    fn test_holidays_config_parses_kinds() {
        let yaml = r#"
holidays:
  - date: 2026-10-28
    name: Cumhuriyet Bayramı Arifesi
    kind: half_day
  - date: 2026-10-29
    name: Cumhuriyet Bayramı
    kind: full_day
"#;
        let config: HolidaysConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.holidays.len(), 2);
        assert!(config.holidays[0].is_half_day());
        assert!(config.holidays[1].is_full_day());
    }
}
