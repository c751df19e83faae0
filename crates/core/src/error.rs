//! Core Error Types
//!
//! Defines the foundational error types used across the Code Insight workspace.
//! These error types are dependency-free (only thiserror + serde_json + std) to
//! keep the core crate lightweight.
//!
//! Normalization is deliberately absent from this taxonomy: converting a model
//! reply into an `AnalysisRecord` is total and degrades instead of failing.

use thiserror::Error;

/// Core error type for the Code Insight workspace.
///
/// Validation errors (`InvalidMode`, `InvalidRequest`) fail fast before any
/// network call. `Upstream` carries the provider's original message for
/// diagnostics.
#[derive(Error, Debug)]
pub enum InsightError {
    /// Mode identifier outside the enumerated set
    #[error("Invalid analysis mode: {mode}")]
    InvalidMode { mode: String },

    /// Missing or empty required request fields
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The external model invocation failed or returned no content
    #[error("Upstream model error: {0}")]
    Upstream(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for core errors
pub type InsightResult<T> = Result<T, InsightError>;

impl InsightError {
    /// Create an invalid-mode error
    pub fn invalid_mode(mode: impl Into<String>) -> Self {
        Self::InvalidMode { mode: mode.into() }
    }

    /// Create an invalid-request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Create an upstream error
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Convert InsightError to a string
impl From<InsightError> for String {
    fn from(err: InsightError) -> String {
        err.to_string()
    }
}
