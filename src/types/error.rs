//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Error Categories
//!
//! - **Request**: bad preference patch or unknown framework id. Recoverable,
//!   the current request is aborted and the caller shows a placeholder.
//! - **Integration**: a format or package manager name outside the supported
//!   set. Fail fast, never default silently.
//! - **System**: I/O, serialization and configuration failures.

use thiserror::Error;

// =============================================================================
// Error Categories
// =============================================================================

/// Coarse error categories used by the CLI to pick an exit message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller supplied something we cannot use for this request
    Request,
    /// Enum value outside the closed set, a wiring bug in the caller
    Integration,
    /// I/O, serialization or configuration failure
    System,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Request => write!(f, "REQUEST"),
            Self::Integration => write!(f, "INTEGRATION"),
            Self::System => write!(f, "SYSTEM"),
        }
    }
}

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum KitError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Config error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    /// Unknown or malformed field in a preference patch
    #[error("Invalid preference '{field}': {reason}")]
    InvalidPreference { field: String, reason: String },

    /// Framework id not present in the catalog
    #[error("Unknown framework '{0}'. Run 'prettierkit list' to see supported frameworks")]
    UnknownFramework(String),

    #[error("Unsupported output format '{0}'. Valid values: json, yaml, js")]
    UnsupportedFormat(String),

    #[error("Unsupported package manager '{0}'. Valid values: npm, yarn, pnpm, bun")]
    UnsupportedManager(String),

    /// A config document could not be read back in its encoding
    #[error("Failed to parse {format} config: {message}")]
    Parse { format: String, message: String },
}

pub type Result<T> = std::result::Result<T, KitError>;

// =============================================================================
// Helper Functions
// =============================================================================

impl KitError {
    /// Create an invalid preference error
    pub fn invalid_preference(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPreference {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a reader error for the given encoding
    pub fn parse(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            format: format.into(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidPreference { .. } | Self::UnknownFramework(_) | Self::Parse { .. } => {
                ErrorCategory::Request
            }
            Self::UnsupportedFormat(_) | Self::UnsupportedManager(_) => ErrorCategory::Integration,
            Self::Io(_) | Self::Json(_) | Self::Yaml(_) | Self::Config(_) => ErrorCategory::System,
        }
    }

    /// Check if the caller can recover by falling back to placeholder output
    pub fn is_recoverable(&self) -> bool {
        self.category() == ErrorCategory::Request
    }
}

/// Context extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> Result<T>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> Result<T> {
        self.map_err(|e| KitError::Config(format!("{}: {}", context.into(), e)))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category_display() {
        assert_eq!(ErrorCategory::Request.to_string(), "REQUEST");
        assert_eq!(ErrorCategory::Integration.to_string(), "INTEGRATION");
        assert_eq!(ErrorCategory::System.to_string(), "SYSTEM");
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(KitError::UnknownFramework("ember".into()).is_recoverable());
        assert!(KitError::invalid_preference("tabWidth", "must be greater than 0").is_recoverable());
        assert!(!KitError::UnsupportedFormat("toml".into()).is_recoverable());
        assert!(!KitError::UnsupportedManager("deno".into()).is_recoverable());
        assert!(!KitError::Config("broken".into()).is_recoverable());
    }

    #[test]
    fn test_invalid_preference_display() {
        let err = KitError::invalid_preference("semicolons", "unknown field");
        assert_eq!(
            err.to_string(),
            "Invalid preference 'semicolons': unknown field"
        );
    }

    #[test]
    fn test_with_context() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = res.with_context("Reading config").unwrap_err();
        assert_eq!(err.to_string(), "Config error: Reading config: missing");
    }
}
