//! Code Insight LLM
//!
//! Provides a unified interface for the hosted models that perform the actual
//! code analysis:
//! - AI Gateway (OpenAI-compatible chat completions)
//! - Gemini (native generateContent API)
//!
//! Also includes the HTTP client factory and the provider error taxonomy.
//! Providers perform exactly one awaited call per request and never retry;
//! retry/backoff policy belongs to the caller.

pub mod gateway;
pub mod gemini;
pub mod http_client;
pub mod provider;
pub mod types;

// Re-export main types
pub use gateway::{GatewayProvider, DEFAULT_GATEWAY_MODEL};
pub use gemini::{GeminiProvider, DEFAULT_GEMINI_MODEL};
pub use http_client::build_http_client;
pub use provider::ModelProvider;
pub use types::*;
