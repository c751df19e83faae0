//! Gemini Provider
//!
//! Implementation of the ModelProvider trait for Google's native Gemini
//! generateContent API. Used when calling Gemini directly with an API key
//! instead of going through a gateway.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::http_client::build_http_client;
use super::provider::{missing_api_key_error, parse_http_error, ModelProvider};
use super::types::{
    LlmError, LlmResult, Message, MessageRole, ModelReply, ProviderConfig, UsageStats,
};

/// Default Gemini API base URL
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default Gemini model
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-exp";

/// Native Gemini provider
pub struct GeminiProvider {
    config: ProviderConfig,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Create a new Gemini provider with the given configuration.
    pub fn new(mut config: ProviderConfig) -> Self {
        if config.model.is_empty() {
            config.model = DEFAULT_GEMINI_MODEL.to_string();
        }
        let client = build_http_client(config.timeout_secs);
        Self { config, client }
    }

    /// Get the API base URL
    fn base_url(&self) -> &str {
        self.config.base_url.as_deref().unwrap_or(GEMINI_API_BASE)
    }

    /// Build the generateContent request body.
    ///
    /// Gemini has no "assistant" role; prior assistant turns are sent with
    /// role "model". System text rides in `system_instruction`.
    fn build_request_body(&self, messages: &[Message], system: Option<&str>) -> serde_json::Value {
        let contents: Vec<serde_json::Value> = messages
            .iter()
            .map(|msg| {
                let role = match msg.role {
                    MessageRole::Assistant => "model",
                    // Gemini folds conversation-level system text into user turns
                    MessageRole::User | MessageRole::System => "user",
                };
                serde_json::json!({
                    "role": role,
                    "parts": [{"text": msg.content}]
                })
            })
            .collect();

        let mut body = serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.config.max_output_tokens
            }
        });

        if let Some(sys) = system {
            body["system_instruction"] = serde_json::json!({
                "parts": [{"text": sys}]
            });
        }

        body
    }

    /// Parse a generateContent response.
    fn parse_response(&self, response: &GeminiResponse) -> ModelReply {
        let content = response.candidates.first().map(|c| {
            c.content
                .parts
                .iter()
                .filter_map(|p| p.text.as_deref())
                .collect::<Vec<_>>()
                .join("")
        });
        let content = content.filter(|c| !c.is_empty());

        let usage = response
            .usage_metadata
            .as_ref()
            .map(|u| UsageStats {
                input_tokens: u.prompt_token_count.unwrap_or(0),
                output_tokens: u.candidates_token_count.unwrap_or(0),
            })
            .unwrap_or_default();

        ModelReply {
            content,
            model: self.config.model.clone(),
            usage,
        }
    }
}

#[async_trait]
impl ModelProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
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
            .ok_or_else(|| missing_api_key_error("gemini"))?;

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url(),
            self.config.model,
            api_key
        );
        let body = self.build_request_body(&messages, system.as_deref());
        debug!(model = %self.config.model, "sending generateContent request");

        let response = self
            .client
            .post(&url)
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
            return Err(parse_http_error(status, &body_text, "gemini"));
        }

        let gemini_response: GeminiResponse =
            serde_json::from_str(&body_text).map_err(|e| LlmError::ParseError {
                message: format!("Failed to parse response: {}", e),
            })?;

        Ok(self.parse_response(&gemini_response))
    }

    async fn health_check(&self) -> LlmResult<()> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| missing_api_key_error("gemini"))?;

        let url = format!("{}/models?key={}", self.base_url(), api_key);
        let response = self
            .client
            .get(&url)
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
            Err(parse_http_error(status, &body, "gemini"))
        }
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

/// generateContent response format
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount")]
    prompt_token_count: Option<u32>,
    #[serde(rename = "candidatesTokenCount")]
    candidates_token_count: Option<u32>,
}
