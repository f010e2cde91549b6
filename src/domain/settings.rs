//! Application configuration model.
//!
//! Mirrors the sections of `config.toml`. Every field has a default so a
//! partial or missing file still yields a complete configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::models::{Delimiter, Direction};

/// Conversion defaults applied at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Delimiter selected when no `--delimiter` is given.
    #[serde(default)]
    pub delimiter: Delimiter,

    /// Tab the interactive session opens on.
    #[serde(default)]
    pub direction: Direction,
}

/// Presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long the copy confirmation stays visible, in milliseconds.
    #[serde(default = "default_notice_ms")]
    pub notice_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notice_ms: default_notice_ms(),
        }
    }
}

const fn default_notice_ms() -> u64 {
    1500
}

/// Path configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathConfig {
    /// Base data directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub paths: PathConfig,
}

impl AppConfig {
    /// Get the data directory, using default if not configured.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.paths
            .data_dir
            .clone()
            .unwrap_or_else(Self::default_data_dir)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".listjoin")
    }

    /// Get the preferences file path.
    #[must_use]
    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir().join("preferences.toml")
    }

    /// Copy confirmation lifetime.
    #[must_use]
    pub const fn notice_delay(&self) -> Duration {
        Duration::from_millis(self.ui.notice_ms)
    }
}
