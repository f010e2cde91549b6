//! Domain layer - core types and errors.
//!
//! This layer contains pure value types and error types
//! without any external dependencies (clipboard, filesystem, etc.).

pub mod error;
pub mod models;
pub mod settings;

pub use error::{AppError, Result};
pub use models::{CopyField, Delimiter, Direction, Language};
pub use settings::AppConfig;
