//! Model Provider Trait
//!
//! Defines the common interface for all model providers. The engine treats
//! the provider as an opaque external collaborator: one awaited call per
//! request, no retries, failures propagate with their original message.

use async_trait::async_trait;

use super::types::{LlmError, LlmResult, Message, ModelReply, ProviderConfig};

/// Trait that all model providers must implement.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Returns the provider name for identification.
    fn name(&self) -> &'static str;

    /// Returns the current model being used.
    fn model(&self) -> &str;

    /// Send a conversation and get a complete response.
    ///
    /// # Arguments
    /// * `messages` - Conversation history (the instruction document rides as
    ///   a single user message for analysis requests)
    /// * `system` - Optional system prompt
    async fn send_message(
        &self,
        messages: Vec<Message>,
        system: Option<String>,
    ) -> LlmResult<ModelReply>;

    /// Check if the provider is healthy and reachable.
    ///
    /// For API providers this validates the API key.
    async fn health_check(&self) -> LlmResult<()>;

    /// Get the configuration for this provider.
    fn config(&self) -> &ProviderConfig;
}

/// Helper function to create an error for a missing API key
pub fn missing_api_key_error(provider: &str) -> LlmError {
    LlmError::AuthenticationFailed {
        message: format!("API key not configured for {}", provider),
    }
}

/// Helper function to map HTTP error status codes onto the error taxonomy
pub fn parse_http_error(status: u16, body: &str, provider: &str) -> LlmError {
    match status {
        401 => LlmError::AuthenticationFailed {
            message: format!("{}: Invalid API key", provider),
        },
        403 => LlmError::AuthenticationFailed {
            message: format!("{}: Access denied", provider),
        },
        404 => LlmError::ModelNotFound {
            model: body.to_string(),
        },
        429 => LlmError::RateLimited {
            message: body.to_string(),
            retry_after: None,
        },
        400 => LlmError::InvalidRequest {
            message: body.to_string(),
        },
        500..=599 => LlmError::ServerError {
            message: body.to_string(),
            status: Some(status),
        },
        _ => LlmError::Other {
            message: format!("HTTP {}: {}", status, body),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_error() {
        let err = missing_api_key_error("gateway");
        match err {
            LlmError::AuthenticationFailed { message } => {
                assert!(message.contains("gateway"));
            }
            _ => panic!("Expected AuthenticationFailed"),
        }
    }

    #[test]
    fn test_parse_http_error() {
        let err = parse_http_error(401, "unauthorized", "gemini");
        assert!(matches!(err, LlmError::AuthenticationFailed { .. }));

        let err = parse_http_error(429, "rate limited", "gemini");
        assert!(matches!(err, LlmError::RateLimited { .. }));

        let err = parse_http_error(500, "internal error", "gemini");
        assert!(matches!(err, LlmError::ServerError { .. }));

        let err = parse_http_error(418, "teapot", "gemini");
        assert!(matches!(err, LlmError::Other { .. }));
    }
}
