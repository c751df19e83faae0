//! Configuration
//!
//! Environment-driven configuration for the service layer and the CLI shell.
//! Credentials are resolved from the environment at startup; the engine
//! itself never reads configuration.
//!
//! Recognized variables:
//! - `CODE_INSIGHT_PROVIDER` - "gateway" (default) or "gemini"
//! - `CODE_INSIGHT_API_KEY` - credential, overriding the provider-specific vars
//! - `LOVABLE_API_KEY` - gateway credential
//! - `GEMINI_API_KEY` - Gemini credential
//! - `CODE_INSIGHT_MODEL` - model override
//! - `CODE_INSIGHT_BASE_URL` - endpoint override
//! - `CODE_INSIGHT_MAX_OUTPUT_TOKENS` - output budget hint

use std::env;
use std::sync::Arc;

use code_insight_core::{InsightError, InsightResult};
use code_insight_llm::{
    GatewayProvider, GeminiProvider, ModelProvider, ProviderConfig, ProviderKind,
    DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_TIMEOUT_SECS,
};

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub struct InsightConfig {
    /// Which provider to construct
    pub provider: ProviderKind,
    /// API credential; absence surfaces as an authentication error at send time
    pub api_key: Option<String>,
    /// Model override; empty uses the provider's default
    pub model: String,
    /// Endpoint override
    pub base_url: Option<String>,
    /// Output budget hint forwarded to the API
    pub max_output_tokens: u32,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Gateway,
            api_key: None,
            model: String::new(),
            base_url: None,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

impl InsightConfig {
    /// Resolve configuration from the environment.
    pub fn from_env() -> InsightResult<Self> {
        let provider = match env::var("CODE_INSIGHT_PROVIDER") {
            Ok(value) => value
                .parse::<ProviderKind>()
                .map_err(|e| InsightError::config(e.to_string()))?,
            Err(_) => ProviderKind::Gateway,
        };

        let api_key = env::var("CODE_INSIGHT_API_KEY").ok().or_else(|| {
            let fallback = match provider {
                ProviderKind::Gateway => "LOVABLE_API_KEY",
                ProviderKind::Gemini => "GEMINI_API_KEY",
            };
            env::var(fallback).ok()
        });

        let max_output_tokens = match env::var("CODE_INSIGHT_MAX_OUTPUT_TOKENS") {
            Ok(value) => value.parse::<u32>().map_err(|_| {
                InsightError::config(format!(
                    "CODE_INSIGHT_MAX_OUTPUT_TOKENS must be a number, got '{}'",
                    value
                ))
            })?,
            Err(_) => DEFAULT_MAX_OUTPUT_TOKENS,
        };

        Ok(Self {
            provider,
            api_key,
            model: env::var("CODE_INSIGHT_MODEL").unwrap_or_default(),
            base_url: env::var("CODE_INSIGHT_BASE_URL").ok(),
            max_output_tokens,
        })
    }

    /// Lower this configuration into a provider configuration.
    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            kind: self.provider,
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            max_output_tokens: self.max_output_tokens,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Construct the configured model provider.
pub fn create_provider(config: &InsightConfig) -> Arc<dyn ModelProvider> {
    let provider_config = config.provider_config();
    match config.provider {
        ProviderKind::Gateway => Arc::new(GatewayProvider::new(provider_config)),
        ProviderKind::Gemini => Arc::new(GeminiProvider::new(provider_config)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InsightConfig::default();
        assert_eq!(config.provider, ProviderKind::Gateway);
        assert_eq!(config.max_output_tokens, DEFAULT_MAX_OUTPUT_TOKENS);
    }

    #[test]
    fn test_provider_config_lowering() {
        let config = InsightConfig {
            provider: ProviderKind::Gemini,
            api_key: Some("k".to_string()),
            model: "gemini-2.0-flash-exp".to_string(),
            base_url: None,
            max_output_tokens: 2000,
        };
        let pc = config.provider_config();
        assert_eq!(pc.kind, ProviderKind::Gemini);
        assert_eq!(pc.api_key.as_deref(), Some("k"));
        assert_eq!(pc.max_output_tokens, 2000);
    }

    #[test]
    fn test_create_provider_matches_kind() {
        let gateway = create_provider(&InsightConfig::default());
        assert_eq!(gateway.name(), "gateway");

        let gemini = create_provider(&InsightConfig {
            provider: ProviderKind::Gemini,
            ..Default::default()
        });
        assert_eq!(gemini.name(), "gemini");
    }
}
