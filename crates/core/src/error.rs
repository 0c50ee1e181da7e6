//! Error types for Halqa Admin
//!
//! This module provides unified error handling across the console,
//! covering transport failures, server-reported failures, authentication
//! failures, local form validation, configuration, and session storage.

use thiserror::Error;

/// Fallback copy shown when the server does not supply a message
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// The main error type for Halqa Admin
#[derive(Debug, Error)]
pub enum ConsoleError {
    // ========================================================================
    // Remote Errors
    // ========================================================================
    /// The request never produced a response (connect, timeout, TLS, ...)
    #[error("Network error: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The server rejected the bearer token (HTTP 401)
    #[error("Authentication required")]
    Unauthorized,

    /// The response body could not be decoded
    #[error("Unexpected response: {0}")]
    Decode(String),

    // ========================================================================
    // Local Errors
    // ========================================================================
    /// A form field failed validation
    #[error("{message}")]
    Validation { field: String, message: String },

    /// Invalid or missing configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Session storage failed
    #[error("Session storage error: {0}")]
    Session(String),

    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl ConsoleError {
    /// Create a field validation error
    pub fn validation(field: impl Into<String>, msg: impl Into<String>) -> Self {
        ConsoleError::Validation {
            field: field.into(),
            message: msg.into(),
        }
    }

    /// Create an API error
    pub fn api(status: u16, msg: impl Into<String>) -> Self {
        ConsoleError::Api {
            status,
            message: msg.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        ConsoleError::Config(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        ConsoleError::Internal(msg.into())
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        ConsoleError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error means the session is no longer valid
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ConsoleError::Unauthorized)
    }

    /// Check if this error is a local validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, ConsoleError::Validation { .. })
    }

    /// Check if this error came from the remote side (network or server)
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            ConsoleError::Transport(_)
                | ConsoleError::Api { .. }
                | ConsoleError::Unauthorized
                | ConsoleError::Decode(_)
        )
    }

    /// The field a validation error points at
    pub fn field(&self) -> Option<&str> {
        match self {
            ConsoleError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Copy suitable for a message banner
    ///
    /// Server and validation messages pass through verbatim; everything
    /// else collapses to a generic sentence.
    pub fn user_message(&self) -> String {
        match self {
            ConsoleError::Api { message, .. } if !message.trim().is_empty() => message.clone(),
            ConsoleError::Validation { message, .. } => message.clone(),
            ConsoleError::Unauthorized => "Your session has expired. Please sign in again.".into(),
            ConsoleError::Transport(_) => {
                "Unable to reach the server. Please check your connection.".into()
            }
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Result type alias using ConsoleError
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> ConsoleResult<T>;
}

impl<T, E: Into<ConsoleError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> ConsoleResult<T> {
        self.map_err(|e| {
            let err: ConsoleError = e.into();
            ConsoleError::WithContext {
                context: context.into(),
                message: err.to_string(),
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
