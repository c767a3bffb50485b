//! Error types for Relay Kit
//!
//! The pagination engine and the global id codec are total and never fail.
//! Errors only come from strict pagination policies, configuration loading
//! and the CLI.

use crate::pagination::Boundary;
use thiserror::Error;

/// The main error type for Relay Kit
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Cursor '{cursor}' given as `{boundary}` does not match any edge")]
    UnmatchedCursor { boundary: Boundary, cursor: String },

    #[error("Argument `{argument}` must not be negative, got {value}")]
    NegativeCount { argument: &'static str, value: i32 },

    #[error("Node at index {index} has no usable '{field}' field")]
    MissingNodeId { index: usize, field: String },

    // ============================================================================
    // Global Id Errors
    // ============================================================================
    #[error("Invalid global id: {global_id}")]
    InvalidGlobalId { global_id: String },

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
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an unmatched cursor error
    pub fn unmatched_cursor(boundary: Boundary, cursor: impl Into<String>) -> Self {
        Self::UnmatchedCursor {
            boundary,
            cursor: cursor.into(),
        }
    }

    /// Create an invalid global id error
    pub fn invalid_global_id(global_id: impl Into<String>) -> Self {
        Self::InvalidGlobalId {
            global_id: global_id.into(),
        }
    }

    /// Check if this error was caused by client-supplied arguments.
    ///
    /// Resolvers map these to a validation failure (HTTP 400 or a GraphQL
    /// user error) instead of an internal error.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::UnmatchedCursor { .. } | Error::NegativeCount { .. } | Error::InvalidGlobalId { .. }
        )
    }
}

/// Result type alias for Relay Kit
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
