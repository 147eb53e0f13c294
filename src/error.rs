//! Unified error types for mailvet.
//!
//! This module provides the error hierarchy for the library, with rich
//! context for debugging and user-friendly messages.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mailvet operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MailvetError {
    /// Errors while talking to the validation service
    #[error("Validation request failed: {context}")]
    Client {
        context: String,
        #[source]
        source: ClientErrorKind,
    },

    /// Errors during report or export generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors (bad user input, e.g. an empty address list)
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific client error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ClientErrorKind {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Service returned error status {status}: {body}")]
    ServiceError { status: u16, body: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Unsupported input file: {0} (expected .csv or .txt)")]
    UnsupportedFile(String),
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for mailvet operations
pub type Result<T> = std::result::Result<T, MailvetError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl MailvetError {
    /// Create a client error with context
    pub fn client(context: impl Into<String>, source: ClientErrorKind) -> Self {
        Self::Client {
            context: context.into(),
            source,
        }
    }

    /// Create a report error with context
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for MailvetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for MailvetError {
    fn from(err: serde_json::Error) -> Self {
        Self::client(
            "JSON deserialization",
            ClientErrorKind::InvalidResponse(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context,
/// creating a chain that shows the path through the code.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    ///
    /// The closure is only called if the result is an error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<MailvetError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: MailvetError, new_ctx: &str) -> MailvetError {
    match err {
        MailvetError::Client {
            context: existing,
            source,
        } => MailvetError::Client {
            context: chain_context(new_ctx, &existing),
            source,
        },
        MailvetError::Report {
            context: existing,
            source,
        } => MailvetError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        MailvetError::Io {
            path,
            message,
            source,
        } => MailvetError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        MailvetError::Config(msg) => MailvetError::Config(chain_context(new_ctx, &msg)),
        MailvetError::Validation(msg) => MailvetError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
