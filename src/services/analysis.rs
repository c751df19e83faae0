//! Analysis Service
//!
//! Orchestrates one analysis request: validate, build the instruction
//! document, await the single model call, normalize the reply. Prompt
//! building, the network call, and normalization are strictly sequential;
//! there is no internal retry and no sub-task parallelism.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use code_insight_core::{
    AnalysisMode, AnalysisRecord, AnalysisRequest, InsightError, InsightResult,
};
use code_insight_engine::{build_analysis_prompt, normalize, NormalizationTier};
use code_insight_llm::{Message, ModelProvider, UsageStats};

/// The result of one analysis request.
///
/// `raw_text` is the complete, unmodified model reply, retained for
/// support/debugging; it is never one of the record's canonical fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutcome {
    pub mode: AnalysisMode,
    pub record: AnalysisRecord,
    pub tier: NormalizationTier,
    pub raw_text: String,
    pub model: String,
    pub usage: UsageStats,
}

/// Stateless analysis orchestrator over an injected provider.
pub struct AnalysisService {
    provider: Arc<dyn ModelProvider>,
}

impl AnalysisService {
    /// Create a service over the given provider.
    pub fn new(provider: Arc<dyn ModelProvider>) -> Self {
        Self { provider }
    }

    /// Run one analysis request end to end.
    ///
    /// Validation errors fail fast before any network call. Upstream failures
    /// propagate with the provider's original message. Normalization never
    /// fails; a reply that defies the schema degrades to a mostly-empty
    /// record instead.
    pub async fn analyze(&self, request: &AnalysisRequest) -> InsightResult<AnalysisOutcome> {
        request.validate()?;

        let prompt = build_analysis_prompt(request);
        debug!(
            mode = %request.mode,
            source_language = %request.source_language,
            prompt_chars = prompt.len(),
            "dispatching analysis request"
        );

        let reply = self
            .provider
            .send_message(vec![Message::user(prompt)], None)
            .await
            .map_err(|e| InsightError::upstream(e.to_string()))?;

        let raw_text = match reply.content {
            Some(ref text) if !text.trim().is_empty() => text.as_str(),
            _ => {
                return Err(InsightError::upstream(format!(
                    "model {} returned no content",
                    reply.model
                )))
            }
        };

        let normalized = normalize(raw_text, request.mode);
        info!(
            mode = %request.mode,
            tier = ?normalized.tier,
            output_tokens = reply.usage.output_tokens,
            "analysis normalized"
        );

        Ok(AnalysisOutcome {
            mode: request.mode,
            record: normalized.record,
            tier: normalized.tier,
            raw_text: normalized.raw_text,
            model: reply.model,
            usage: reply.usage,
        })
    }
}
