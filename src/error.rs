//! Error types for table-pager
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for table-pager
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Argument Errors
    // ============================================================================
    #[error("Invalid argument '{name}': {message}")]
    InvalidArgument { name: String, message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Data Source Errors
    // ============================================================================
    #[error("Invalid continuation token: {token}")]
    InvalidToken { token: String },

    #[error("Data source error: {message}")]
    DataSource { message: String },

    #[error("Response draw {actual} does not match request draw {expected}")]
    DrawMismatch { expected: i64, actual: i64 },

    #[error("No page after page {page}")]
    NoMorePages { page: u64 },

    #[error("Invalid search pattern: {0}")]
    Regex(#[from] regex::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an invalid token error
    pub fn invalid_token(token: impl Into<String>) -> Self {
        Self::InvalidToken {
            token: token.into(),
        }
    }

    /// Create a data source error
    pub fn data_source(message: impl Into<String>) -> Self {
        Self::DataSource {
            message: message.into(),
        }
    }

    /// Check if this error came from bad caller input
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }
}

/// Result type alias for table-pager
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
