//! Chat turn tests: system prompt composition from the session context and
//! history handling.

use std::sync::Arc;

use code_insight::core::{AnalysisMode, ConversationContext, InsightError};
use code_insight::llm::Message;
use code_insight::ChatService;

use crate::common::{MockBehavior, MockProvider};

#[tokio::test]
async fn test_chat_grounds_reply_in_session_context() {
    let provider = Arc::new(MockProvider::replying("El análisis previo no encontró riesgos."));
    let service = ChatService::new(provider.clone());

    let mut context = ConversationContext::new();
    context.record(AnalysisMode::Security, "no risks found");
    context.record(AnalysisMode::Tests, "12 cases generated");

    let reply = service
        .chat(
            "def f():\n    pass",
            "python",
            &context,
            vec![Message::user("¿Quedó algún riesgo de seguridad?")],
        )
        .await
        .unwrap();
    assert!(reply.contains("no encontró riesgos"));

    let system = provider.last_system().unwrap();
    assert!(system.contains("```python\ndef f():\n    pass\n```"));
    assert!(system.contains("### Security:\nno risks found"));
    assert!(system.contains("### Tests:\n12 cases generated"));
    // Context sections appear in insertion order.
    assert!(system.find("### Security:").unwrap() < system.find("### Tests:").unwrap());
}

#[tokio::test]
async fn test_chat_with_empty_context_omits_prior_analyses() {
    let provider = Arc::new(MockProvider::replying("Claro, te explico el código."));
    let service = ChatService::new(provider.clone());

    service
        .chat(
            "x = 1",
            "python",
            &ConversationContext::new(),
            vec![Message::user("¿Qué hace este código?")],
        )
        .await
        .unwrap();

    let system = provider.last_system().unwrap();
    assert!(!system.contains("Análisis previos"));
    assert!(!system.contains("###"));
}

#[tokio::test]
async fn test_chat_requires_messages() {
    let provider = Arc::new(MockProvider::replying("unused"));
    let service = ChatService::new(provider.clone());

    let err = service
        .chat("x = 1", "python", &ConversationContext::new(), vec![])
        .await
        .unwrap_err();
    assert!(matches!(err, InsightError::InvalidRequest(_)));
    assert!(provider.last_request.lock().unwrap().is_none());
}

#[tokio::test]
async fn test_chat_history_is_forwarded_in_order() {
    let provider = Arc::new(MockProvider::replying("ok"));
    let service = ChatService::new(provider.clone());

    let history = vec![
        Message::user("¿Qué hace este código?"),
        Message::assistant("Calcula una suma."),
        Message::user("¿Puedes optimizarlo?"),
    ];
    service
        .chat("x = 1", "python", &ConversationContext::new(), history)
        .await
        .unwrap();

    let guard = provider.last_request.lock().unwrap();
    let (messages, _) = guard.as_ref().unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2].content, "¿Puedes optimizarlo?");
}

#[tokio::test]
async fn test_chat_empty_reply_is_upstream_failure() {
    let provider = Arc::new(MockProvider::with_behavior(MockBehavior::Empty));
    let service = ChatService::new(provider);

    let err = service
        .chat(
            "x = 1",
            "python",
            &ConversationContext::new(),
            vec![Message::user("hola")],
        )
        .await
        .unwrap_err();
    assert!(matches!(err, InsightError::Upstream(_)));
}
