//! Embedded database location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Path value that selects a private in-memory database.
pub const IN_MEMORY_PATH: &str = ":memory:";

const fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Whether local persistence is available at all. When off, boards live
    /// only for the lifetime of the process.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Database file path, or `:memory:`. Empty means the platform data
    /// directory (`<data_dir>/lanes/lanes.db`).
    #[serde(default)]
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            path: String::new(),
        }
    }
}

impl StorageConfig {
    /// Resolved database path, or `None` when storage is disabled or no data
    /// directory can be determined.
    #[must_use]
    pub fn database_path(&self) -> Option<String> {
        if !self.enabled {
            return None;
        }
        if !self.path.trim().is_empty() {
            return Some(self.path.trim().to_string());
        }
        Self::default_database_path().map(|p| p.to_string_lossy().into_owned())
    }

    fn default_database_path() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("lanes").join("lanes.db"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_storage_has_no_path() {
        let config = StorageConfig {
            enabled: false,
            path: "/tmp/lanes.db".into(),
        };
        assert_eq!(config.database_path(), None);
    }

    #[test]
    fn explicit_path_is_used_verbatim() {
        let config = StorageConfig {
            enabled: true,
            path: IN_MEMORY_PATH.into(),
        };
        assert_eq!(config.database_path().as_deref(), Some(":memory:"));
    }

    #[test]
    fn empty_path_falls_back_to_data_dir() {
        let config = StorageConfig::default();
        if let Some(path) = config.database_path() {
            assert!(path.ends_with("lanes.db"), "unexpected default path: {path}");
        }
    }
}
