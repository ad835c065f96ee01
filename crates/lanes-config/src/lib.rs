//! # lanes-config
//!
//! Layered configuration loading for lanes using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LANES_*` prefix, `__` as separator)
//! 2. Project-level `.lanes/config.toml`
//! 3. User-level `~/.config/lanes/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LANES_STORAGE__PATH` -> `storage.path`,
//! `LANES_GENERAL__SEED_NEW_BOARDS` -> `general.seed_new_boards`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use lanes_config::LanesConfig;
//!
//! let config = LanesConfig::load_with_dotenv().expect("config");
//! if let Some(path) = config.storage.database_path() {
//!     println!("Database: {path}");
//! }
//! ```

mod error;
mod general;
mod storage;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use storage::{IN_MEMORY_PATH, StorageConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LanesConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl LanesConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".lanes/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("LANES_").split("__"))
    }

    /// Reject values that would only fail later at first use.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a blank default board name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.default_board_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "general.default_board_name".into(),
                reason: "must not be blank".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lanes").join("config.toml"))
    }
}
