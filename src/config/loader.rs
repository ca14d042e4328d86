//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::calculation::{RotationCodes, validate_rotation_codes};
use crate::calendar::{HolidayCalendar, StaticHolidaySource};
use crate::catalog::ShiftCatalog;
use crate::error::{EngineError, EngineResult};
use crate::models::Roster;

use super::types::{EngineConfig, EngineMetadata, HolidaysConfig, ShiftsConfig};

/// Loads and provides access to engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and builds the shift catalog, the roster and the holiday calendar.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/hakedis/
/// ├── engine.yaml    # Name, version, rotation codes
/// ├── shifts.yaml    # Shift definitions
/// ├── roster.yaml    # Staff and rotation order
/// └── holidays.yaml  # Optional; replaces the built-in holiday table
/// ```
///
/// # Example
///
/// ```no_run
/// use hakedis_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/hakedis").unwrap();
///
/// let on_call = loader.catalog().by_code("N").unwrap();
/// println!("On-call shift: {}", on_call.display_name);
///
/// let order = loader.roster().on_duty_in_rotation_order();
/// println!("Rotation: {:?}", order);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/hakedis")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A shift definition is invalid
    /// - The rotation codes do not resolve to an on-call shift and a
    ///   post-on-call marker
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load engine.yaml
        let metadata = Self::load_yaml::<EngineMetadata>(&path.join("engine.yaml"))?;

        // Load shifts.yaml
        let shifts = Self::load_yaml::<ShiftsConfig>(&path.join("shifts.yaml"))?;
        let mut catalog = ShiftCatalog::from_definitions(shifts.shifts)?;
        if let Some(code) = &metadata.ordinary_shift_code {
            catalog.by_code(code)?;
            catalog = catalog.with_ordinary_code(code.as_str());
        }
        validate_rotation_codes(&catalog, &metadata.rotation)?;

        // Load roster.yaml
        let roster = Self::load_yaml::<Roster>(&path.join("roster.yaml"))?;

        // holidays.yaml is optional
        let holidays_path = path.join("holidays.yaml");
        let holidays = if holidays_path.exists() {
            Some(Self::load_yaml::<HolidaysConfig>(&holidays_path)?.holidays)
        } else {
            debug!(path = %holidays_path.display(), "No holiday file, using built-in table");
            None
        };

        info!(
            name = %metadata.name,
            version = %metadata.version,
            shifts = catalog.len(),
            staff = roster.staff.len(),
            "Configuration loaded"
        );

        Ok(Self {
            config: EngineConfig::new(metadata, catalog, roster, holidays),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the engine metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        self.config.metadata()
    }

    /// Returns the shift catalog.
    pub fn catalog(&self) -> &ShiftCatalog {
        self.config.catalog()
    }

    /// Returns the staff roster.
    pub fn roster(&self) -> &Roster {
        self.config.roster()
    }

    /// Returns the shift codes used by the rotation.
    pub fn rotation_codes(&self) -> &RotationCodes {
        &self.config.metadata().rotation
    }

    /// Builds a holiday calendar.
    ///
    /// The holiday file, when present, is the primary source; otherwise the
    /// built-in table is. The built-in table is the fallback in both cases.
    pub fn calendar(&self) -> HolidayCalendar {
        match self.config.holidays() {
            Some(records) => HolidayCalendar::new(StaticHolidaySource::new(
                "holidays.yaml",
                records.iter().cloned(),
            )),
            None => HolidayCalendar::embedded(),
        }
    }
}
