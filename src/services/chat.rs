//! Chat Service
//!
//! One context-grounded conversational exchange: the chat system prompt
//! (role framing, the user's code, prior analyses) plus the running message
//! history, sent as a single model call. The turn-taking loop and transcript
//! persistence belong to the caller.

use std::sync::Arc;

use tracing::debug;

use code_insight_core::{ConversationContext, InsightError, InsightResult};
use code_insight_engine::build_chat_system_prompt;
use code_insight_llm::{Message, ModelProvider};

/// Stateless chat orchestrator over an injected provider.
pub struct ChatService {
    provider: Arc<dyn ModelProvider>,
}

impl ChatService {
    /// Create a service over the given provider.
    pub fn new(provider: Arc<dyn ModelProvider>) -> Self {
        Self { provider }
    }

    /// Run one chat exchange and return the assistant's reply text.
    ///
    /// `history` is the running conversation, ending with the user's latest
    /// message. An empty history is rejected before any network call.
    pub async fn chat(
        &self,
        code: &str,
        language: &str,
        context: &ConversationContext,
        history: Vec<Message>,
    ) -> InsightResult<String> {
        if history.is_empty() {
            return Err(InsightError::invalid_request(
                "chat requires at least one message",
            ));
        }

        let system = build_chat_system_prompt(code, language, context);
        debug!(
            turns = history.len(),
            context_modes = context.len(),
            "dispatching chat turn"
        );

        let reply = self
            .provider
            .send_message(history, Some(system))
            .await
            .map_err(|e| InsightError::upstream(e.to_string()))?;

        match reply.content {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(InsightError::upstream(format!(
                "model {} returned no content",
                reply.model
            ))),
        }
    }
}
