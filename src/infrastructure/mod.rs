//! Infrastructure layer - external adapters (clipboard, filesystem).
//!
//! This layer handles all I/O operations and external dependencies.

pub mod clipboard;
pub mod config;
pub mod preferences;

pub use clipboard::{Clipboard, SystemClipboard};
pub use config::{
    config_file_path, ensure_config_exists, load_config, load_config_or_default, save_config,
};
pub use preferences::{FilePreferenceStore, PreferenceStore};

#[cfg(test)]
pub use clipboard::MemoryClipboard;
#[cfg(test)]
pub use preferences::MemoryPreferenceStore;
