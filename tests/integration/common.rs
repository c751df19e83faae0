//! Shared test fixtures: a mock model provider with canned replies that also
//! captures what was sent to it.

use std::sync::Mutex;

use async_trait::async_trait;

use code_insight::llm::{
    LlmError, LlmResult, Message, ModelProvider, ModelReply, ProviderConfig, UsageStats,
};

/// What the mock should do on the next call.
pub enum MockBehavior {
    /// Return this content
    Reply(String),
    /// Return a reply with no content
    Empty,
    /// Fail with a server error carrying this message
    Fail(String),
}

/// A scripted provider that records the last request it saw.
pub struct MockProvider {
    behavior: MockBehavior,
    config: ProviderConfig,
    /// Last (messages, system) pair sent to the provider
    pub last_request: Mutex<Option<(Vec<Message>, Option<String>)>>,
}

impl MockProvider {
    pub fn replying(content: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Reply(content.into()))
    }

    pub fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            config: ProviderConfig::default(),
            last_request: Mutex::new(None),
        }
    }

    /// The system prompt of the last request, if any.
    pub fn last_system(&self) -> Option<String> {
        self.last_request.lock().unwrap().as_ref()?.1.clone()
    }

    /// The user-visible content of the last request's first message.
    pub fn last_message_content(&self) -> Option<String> {
        let guard = self.last_request.lock().unwrap();
        let (messages, _) = guard.as_ref()?;
        messages.first().map(|m| m.content.clone())
    }
}

#[async_trait]
impl ModelProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn send_message(
        &self,
        messages: Vec<Message>,
        system: Option<String>,
    ) -> LlmResult<ModelReply> {
        *self.last_request.lock().unwrap() = Some((messages, system));

        match &self.behavior {
            MockBehavior::Reply(content) => Ok(ModelReply {
                content: Some(content.clone()),
                model: "mock-model".to_string(),
                usage: UsageStats {
                    input_tokens: 100,
                    output_tokens: 50,
                },
            }),
            MockBehavior::Empty => Ok(ModelReply {
                content: None,
                model: "mock-model".to_string(),
                usage: UsageStats::default(),
            }),
            MockBehavior::Fail(message) => Err(LlmError::ServerError {
                message: message.clone(),
                status: Some(500),
            }),
        }
    }

    async fn health_check(&self) -> LlmResult<()> {
        Ok(())
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }
}
