//! Startup language resolution and persistence.

use crate::domain::{Language, Result};
use crate::infrastructure::PreferenceStore;

/// Preference key the language code is stored under.
pub const LANG_KEY: &str = "lang";

/// Environment variables consulted for the system locale, highest priority first.
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

/// Maps a locale string such as `uk_UA.UTF-8` to a UI language.
#[must_use]
pub fn language_from_locale(locale: &str) -> Language {
    if locale.trim().to_lowercase().starts_with("uk") {
        Language::Uk
    } else {
        Language::En
    }
}

/// Language implied by the process environment.
#[must_use]
pub fn detect_system_language() -> Language {
    detect_with(|name| std::env::var(name).ok())
}

fn detect_with(lookup: impl Fn(&str) -> Option<String>) -> Language {
    LOCALE_VARS
        .iter()
        .filter_map(|&name| lookup(name))
        .find(|value| !value.trim().is_empty())
        .map_or(Language::En, |value| language_from_locale(&value))
}

/// Picks the startup language: explicit flag, stored preference, then system locale.
///
/// An unreadable or unrecognized stored value is ignored with a warning.
pub fn resolve_language(explicit: Option<Language>, store: &dyn PreferenceStore) -> Language {
    if let Some(lang) = explicit {
        return lang;
    }

    match store.get(LANG_KEY) {
        Ok(Some(code)) => match code.parse::<Language>() {
            Ok(lang) => return lang,
            Err(e) => tracing::warn!(code = %code, "Ignoring stored language: {e}"),
        },
        Ok(None) => {}
        Err(e) => tracing::warn!("Failed to read language preference: {e}"),
    }

    detect_system_language()
}

/// Stores the chosen language.
///
/// # Errors
/// Returns error if the preference store cannot be written.
pub fn persist_language(store: &dyn PreferenceStore, language: Language) -> Result<()> {
    store.set(LANG_KEY, language.code())?;
    tracing::info!(language = %language, "Language preference saved");
    Ok(())
}
