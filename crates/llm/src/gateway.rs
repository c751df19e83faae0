//! AI Gateway Provider
//!
//! Implementation of the ModelProvider trait for an OpenAI-compatible
//! chat-completions gateway. This is the default path for hosted models
//! fronted by a gateway endpoint.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::http_client::build_http_client;
use super::provider::{missing_api_key_error, parse_http_error, ModelProvider};
use super::types::{
    LlmError, LlmResult, Message, MessageRole, ModelReply, ProviderConfig, UsageStats,
};

/// Default gateway chat-completions endpoint
const GATEWAY_API_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";

/// Default model routed through the gateway
pub const DEFAULT_GATEWAY_MODEL: &str = "google/gemini-2.5-flash";

/// OpenAI-compatible gateway provider
pub struct GatewayProvider {
    config: ProviderConfig,
    client: reqwest::Client,
}

impl GatewayProvider {
    /// Create a new gateway provider with the given configuration.
    pub fn new(mut config: ProviderConfig) -> Self {
        if config.model.is_empty() {
            config.model = DEFAULT_GATEWAY_MODEL.to_string();
        }
        let client = build_http_client(config.timeout_secs);
        Self { config, client }
    }

    /// Get the API base URL
    fn base_url(&self) -> &str {
        self.config.base_url.as_deref().unwrap_or(GATEWAY_API_URL)
    }

    /// Build the request body for the API
    fn build_request_body(&self, messages: &[Message], system: Option<&str>) -> serde_json::Value {
        let mut wire_messages: Vec<serde_json::Value> = Vec::new();

        if let Some(sys) = system {
            wire_messages.push(serde_json::json!({
                "role": "system",
                "content": sys
            }));
        }

        for msg in messages {
            let role = match msg.role {
                MessageRole::User => "user",
                MessageRole::Assistant => "assistant",
                MessageRole::System => "system",
            };
            wire_messages.push(serde_json::json!({
                "role": role,
                "content": msg.content
            }));
        }

        serde_json::json!({
            "model": self.config.model,
            "messages": wire_messages,
            "max_tokens": self.config.max_output_tokens,
        })
    }

    /// Parse a response from the gateway
    fn parse_response(&self, response: &GatewayResponse) -> ModelReply {
        let content = response
            .choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.clone());

        let usage = response
            .usage
            .as_ref()
            .map(|u| UsageStats {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
            })
            .unwrap_or_default();

        ModelReply {
            content,
            model: response
                .model
                .clone()
                .unwrap_or_else(|| self.config.model.clone()),
            usage,
        }
    }
}

#[async_trait]
impl ModelProvider for GatewayProvider {
    fn name(&self) -> &'static str {
        "gateway"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn send_message(
        &self,
        messages: Vec<Message>,
        system: Option<String>,
    ) -> LlmResult<ModelReply> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| missing_api_key_error("gateway"))?;

        let body = self.build_request_body(&messages, system.as_deref());
        debug!(model = %self.config.model, "sending gateway request");

        let response = self
            .client
            .post(self.base_url())
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body_text = response.text().await.map_err(|e| LlmError::NetworkError {
            message: e.to_string(),
        })?;

        if status != 200 {
            return Err(parse_http_error(status, &body_text, "gateway"));
        }

        let gateway_response: GatewayResponse =
            serde_json::from_str(&body_text).map_err(|e| LlmError::ParseError {
                message: format!("Failed to parse response: {}", e),
            })?;

        Ok(self.parse_response(&gateway_response))
    }

    async fn health_check(&self) -> LlmResult<()> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| missing_api_key_error("gateway"))?;

        // List models to verify the key without spending output tokens
        let models_url = self
            .base_url()
            .replace("/chat/completions", "/models");

        let response = self
            .client
            .get(&models_url)
            .header("Authorization", format!("Bearer {}", api_key))
            .send()
            .await
            .map_err(|e| LlmError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        if status == 200 {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(parse_http_error(status, &body, "gateway"))
        }
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

/// Gateway API response format (OpenAI-compatible)
#[derive(Debug, Deserialize)]
struct GatewayResponse {
    model: Option<String>,
    choices: Vec<Choice>,
    usage: Option<ResponseUsage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}
