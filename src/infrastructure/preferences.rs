//! Persisted user preferences.
//!
//! Preferences are a flat string table stored as TOML next to the config file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, Result};

/// Key/value preference storage.
pub trait PreferenceStore {
    /// Read a stored value.
    ///
    /// # Errors
    /// Returns error if the backing store exists but cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value, replacing any previous one.
    ///
    /// # Errors
    /// Returns error if the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Preferences kept in a TOML file.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            AppError::io(
                format!("Failed to read preferences: {}", self.path.display()),
                e,
            )
        })?;

        toml::from_str(&content)
            .map_err(|e| AppError::config(format!("Failed to parse preferences: {e}")))
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self.load()?.remove(key);
        tracing::debug!(key, found = value.is_some(), "Preference read");
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut table = self.load()?;
        table.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::io("Failed to create preferences directory", e))?;
        }

        let content = toml::to_string_pretty(&table)
            .map_err(|e| AppError::config(format!("Failed to serialize preferences: {e}")))?;

        fs::write(&self.path, content).map_err(|e| {
            AppError::io(
                format!("Failed to write preferences: {}", self.path.display()),
                e,
            )
        })?;

        tracing::debug!(key, path = %self.path.display(), "Preference written");
        Ok(())
    }
}

/// In-memory preferences for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: std::sync::Mutex<BTreeMap<String, String>>,
}

#[cfg(test)]
impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
