//! Provider Types
//!
//! Shared request/response types, configuration, and the error taxonomy for
//! model providers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default maximum output tokens requested from the model.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 4000;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Errors surfaced by model providers.
///
/// These propagate to the caller as-is with their original message attached;
/// no retry or backoff happens inside the providers.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Rate limited: {message}")]
    RateLimited {
        message: String,
        retry_after: Option<u64>,
    },

    #[error("Model not found: {model}")]
    ModelNotFound { model: String },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Server error: {message}")]
    ServerError {
        message: String,
        status: Option<u16>,
    },

    #[error("Network error: {message}")]
    NetworkError { message: String },

    #[error("Failed to parse provider response: {message}")]
    ParseError { message: String },

    #[error("Model returned no content")]
    EmptyResponse,

    #[error("{message}")]
    Other { message: String },
}

/// Result type alias for provider errors
pub type LlmResult<T> = Result<T, LlmError>;

/// Role of a conversation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

/// One text message in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }
}

/// Token usage counts reported by the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStats {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// A complete (non-streamed) reply from the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelReply {
    /// The reply text; `None` when the provider returned no content
    pub content: Option<String>,
    /// Model identifier that produced the reply
    pub model: String,
    /// Token usage, zeroed when the provider omits it
    pub usage: UsageStats,
}

/// Which concrete provider to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// OpenAI-compatible chat-completions gateway
    Gateway,
    /// Native Gemini generateContent API
    Gemini,
}

impl std::str::FromStr for ProviderKind {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gateway" => Ok(ProviderKind::Gateway),
            "gemini" => Ok(ProviderKind::Gemini),
            other => Err(LlmError::InvalidRequest {
                message: format!("Unknown provider kind: {}", other),
            }),
        }
    }
}

/// Configuration for a model provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider selection
    pub kind: ProviderKind,
    /// API credential; checked at send time, not at construction
    pub api_key: Option<String>,
    /// Model identifier
    pub model: String,
    /// Endpoint override; each provider has its own default
    pub base_url: Option<String>,
    /// Maximum output tokens hint forwarded to the API
    pub max_output_tokens: u32,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: ProviderKind::Gateway,
            api_key: None,
            model: String::new(),
            base_url: None,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
