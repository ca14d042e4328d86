//! Configuration loading and management for the entitlement engine.
//!
//! This module provides functionality to load engine configuration from YAML
//! files, including engine metadata, shift definitions, the staff roster and
//! an optional holiday table.
//!
//! # Example
//!
//! ```no_run
//! use hakedis_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/hakedis").unwrap();
//! println!("Loaded configuration: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, EngineMetadata, HolidaysConfig, ShiftsConfig};
