//! Domain-level error types for listjoin.
//!
//! All errors are typed with `thiserror`. Conversions themselves are total,
//! so every variant here comes from an external collaborator (clipboard,
//! filesystem, configuration) or from output serialization.

use thiserror::Error;

/// Application-level errors.
#[derive(Error, Debug)]
pub enum AppError {
    /// Clipboard access denied or unavailable.
    #[error("Clipboard unavailable: {message}")]
    Clipboard {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration or argument error.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// JSON serialization failed.
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// IO operation failed.
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl AppError {
    /// Create a clipboard error without an underlying IO cause.
    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard {
            message: message.into(),
            source: None,
        }
    }

    /// Create a clipboard error caused by a failed process spawn or pipe write.
    pub fn clipboard_io(message: impl Into<String>, err: std::io::Error) -> Self {
        Self::Clipboard {
            message: message.into(),
            source: Some(err),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a JSON error.
    pub fn json(err: serde_json::Error) -> Self {
        Self::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create an IO error with context.
    pub fn io(message: impl Into<String>, err: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(err),
        }
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_error_display() {
        let err = AppError::clipboard("no clipboard tool found");
        assert_eq!(err.to_string(), "Clipboard unavailable: no clipboard tool found");
        assert!(matches!(err, AppError::Clipboard { source: None, .. }));
    }

    #[test]
    fn test_io_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AppError::io("Failed to write preferences", io);
        assert!(matches!(err, AppError::Io { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }
}
