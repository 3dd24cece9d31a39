//! # way-config
//!
//! Layered configuration loading for Waypoint using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`WAYPOINT_*` prefix, `__` as separator)
//! 2. Project-level `.waypoint/config.toml`
//! 3. User-level `~/.config/waypoint/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `WAYPOINT_API__BASE_URL` -> `api.base_url`,
//! `WAYPOINT_GENERAL__PLANNING_YEAR` -> `general.planning_year`, etc.
//! The `__` (double underscore) separates nested config sections.

mod api;
mod error;
mod export;
mod general;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use export::ExportConfig;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WayConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl WayConfig {
    /// Load configuration from all sources (TOML files + environment
    /// variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` before building the figment. This is the typical
    /// entry point for the CLI and tests.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".waypoint/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("WAYPOINT_").split("__"));

        figment
    }

    /// Check field constraints figment cannot express.
    ///
    /// `general.planning_year` must be positive: it feeds the `Q1 <year>`
    /// display quarter labels, and a zero or negative year would silently
    /// produce labels no item quarter can ever match.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.general.planning_year < 1 {
            return Err(ConfigError::InvalidValue {
                field: "general.planning_year".to_string(),
                reason: format!("must be a positive year, got {}", self.general.planning_year),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("waypoint").join("config.toml"))
    }
}
