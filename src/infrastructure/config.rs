//! Configuration file management.
//!
//! Handles loading and saving TOML configuration files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppConfig, AppError, Result};

/// Default configuration file content.
const DEFAULT_CONFIG: &str = r#"# listjoin configuration
# Auto-generated - edit as needed

[defaults]
# Delimiter used when none is given: comma | semicolon | pipe | space
delimiter = "comma"

# Tab the interactive session opens on: join | split
direction = "join"

[ui]
# How long the copy confirmation stays visible, in milliseconds
notice_ms = 1500

[paths]
# Custom data directory (optional, defaults to ~/.listjoin)
# data_dir = "/custom/path"
"#;

/// Load configuration from file or fall back to defaults.
///
/// # Errors
/// Returns error if file exists but cannot be read or parsed.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path();

    if path.exists() {
        load_config_from_file(&path)
    } else {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        Ok(AppConfig::default())
    }
}

/// Load configuration from a specific file.
///
/// # Errors
/// Returns error if file cannot be read or parsed.
pub fn load_config_from_file(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::io(format!("Failed to read config file: {}", path.display()), e))?;

    let config = toml::from_str(&content)
        .map_err(|e| AppError::config(format!("Failed to parse config file: {e}")))?;

    tracing::debug!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

/// Load configuration, falling back to defaults when the file is unusable.
///
/// The load error is returned alongside so callers can report it.
#[must_use]
pub fn load_config_or_default() -> (AppConfig, Option<AppError>) {
    load_or_default_from(&config_file_path())
}

fn load_or_default_from(path: &Path) -> (AppConfig, Option<AppError>) {
    if !path.exists() {
        return (AppConfig::default(), None);
    }

    match load_config_from_file(path) {
        Ok(config) => (config, None),
        Err(e) => {
            tracing::warn!(path = %path.display(), "Using default configuration: {e}");
            (AppConfig::default(), Some(e))
        }
    }
}

/// Save configuration to the default config file.
///
/// # Errors
/// Returns error if file cannot be written.
pub fn save_config(config: &AppConfig) -> Result<PathBuf> {
    let path = config_file_path();
    save_config_to_file(config, &path)?;
    Ok(path)
}

/// Save configuration to a specific file.
///
/// # Errors
/// Returns error if the config cannot be serialized or the file cannot be written.
pub fn save_config_to_file(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AppError::io("Failed to create config directory", e))?;
    }

    let content = toml::to_string_pretty(config)
        .map_err(|e| AppError::config(format!("Failed to serialize config: {e}")))?;

    fs::write(path, content).map_err(|e| {
        AppError::io(format!("Failed to write config file: {}", path.display()), e)
    })?;

    tracing::info!(path = %path.display(), "Configuration saved");

    Ok(())
}

/// Create the default configuration file if it doesn't exist.
///
/// Returns `true` when a new file was written.
///
/// # Errors
/// Returns error if file cannot be created.
pub fn ensure_config_exists() -> Result<bool> {
    ensure_config_at(&config_file_path())
}

fn ensure_config_at(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AppError::io("Failed to create config directory", e))?;
    }

    fs::write(path, DEFAULT_CONFIG)
        .map_err(|e| AppError::io("Failed to create default config", e))?;

    tracing::info!(path = %path.display(), "Created default configuration");

    Ok(true)
}

/// Get the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    AppConfig::default_data_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Delimiter, Direction};
    use tempfile::tempdir;

    #[test]
    fn test_default_config_parses() {
        let config: AppConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.defaults.delimiter, Delimiter::Comma);
        assert_eq!(config.defaults.direction, Direction::ListToJoined);
        assert_eq!(config.ui.notice_ms, 1500);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nested/config.toml");

        let mut config = AppConfig::default();
        config.defaults.delimiter = Delimiter::Space;
        config.defaults.direction = Direction::JoinedToList;
        config.ui.notice_ms = 300;

        save_config_to_file(&config, &config_path).unwrap();
        let loaded = load_config_from_file(&config_path).unwrap();

        assert_eq!(loaded.defaults.delimiter, Delimiter::Space);
        assert_eq!(loaded.defaults.direction, Direction::JoinedToList);
        assert_eq!(loaded.ui.notice_ms, 300);
    }

    #[test]
    fn test_broken_config_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[defaults\n").unwrap();

        let (config, err) = load_or_default_from(&config_path);
        assert_eq!(config.defaults.delimiter, Delimiter::Comma);
        assert!(matches!(err, Some(AppError::Config { .. })));

        let (_, err) = load_or_default_from(&dir.path().join("missing.toml"));
        assert!(err.is_none());
    }

    #[test]
    fn test_bad_delimiter_is_config_error() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[defaults]\ndelimiter = \"tab\"\n").unwrap();

        let err = load_config_from_file(&config_path).unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
    }

    #[test]
    fn test_ensure_config_only_writes_once() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("sub/config.toml");

        assert!(ensure_config_at(&config_path).unwrap());
        assert!(!ensure_config_at(&config_path).unwrap());
        assert!(load_config_from_file(&config_path).is_ok());
    }
}
