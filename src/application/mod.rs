//! Application layer - conversion logic and UI orchestration.
//!
//! This layer contains the converters, the explicit UI state and its
//! actions, localization, and the interactive session built on them.

pub mod converter;
pub mod copy;
pub mod formatter;
pub mod i18n;
pub mod language;
pub mod notice;
pub mod session;
pub mod state;

pub use formatter::{format_report_json, format_report_table, ConversionReport, OutputFormat};
pub use i18n::{Catalog, TextProvider};
pub use language::{persist_language, resolve_language};
pub use session::Session;
pub use state::ConverterState;
