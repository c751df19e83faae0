//! Analysis orchestration tests: validate → prompt → send → normalize,
//! across both normalization tiers and the error paths.

use std::sync::Arc;

use code_insight::core::{AnalysisMode, AnalysisRequest, InsightError};
use code_insight::engine::NormalizationTier;
use code_insight::{AnalysisService, SessionStore};

use crate::common::{MockBehavior, MockProvider};

fn security_request() -> AnalysisRequest {
    AnalysisRequest::new(
        "SELECT * FROM users WHERE id = ' + id",
        "sql",
        AnalysisMode::Security,
    )
}

#[tokio::test]
async fn test_strict_json_reply_end_to_end() {
    let provider = Arc::new(MockProvider::replying(
        r#"{"refactoredCode": "parameterized query", "securityAnalysis": "uso de concatenación en SQL"}"#,
    ));
    let service = AnalysisService::new(provider.clone());

    let outcome = service.analyze(&security_request()).await.unwrap();
    assert_eq!(outcome.tier, NormalizationTier::StrictJson);
    assert_eq!(outcome.record.refactored_code, "parameterized query");
    assert_eq!(
        outcome.record.security_analysis,
        "uso de concatenación en SQL"
    );
    assert_eq!(outcome.model, "mock-model");
    assert_eq!(outcome.usage.output_tokens, 50);

    // The instruction document went out as a single user message.
    let prompt = provider.last_message_content().unwrap();
    assert!(prompt.contains("análisis de seguridad"));
    assert!(prompt.contains("```sql"));
    assert!(provider.last_system().is_none());
}

#[tokio::test]
async fn test_unstructured_reply_degrades_to_heuristic() {
    let provider = Arc::new(MockProvider::replying(
        "Revisión completa.\nSe detectó una vulnerabilidad de SQL Injection en la línea 1.\nRecomiendo parametrizar la consulta.",
    ));
    let service = AnalysisService::new(provider);

    let outcome = service.analyze(&security_request()).await.unwrap();
    assert_eq!(outcome.tier, NormalizationTier::Heuristic);
    assert!(outcome
        .record
        .security_analysis
        .contains("vulnerabilidad de SQL Injection"));
    assert!(outcome.record.refactoring_summary.starts_with("Revisión completa."));
    assert!(outcome.raw_text.starts_with("Revisión completa."));
}

#[tokio::test]
async fn test_invalid_request_fails_before_network_call() {
    let provider = Arc::new(MockProvider::replying("unused"));
    let service = AnalysisService::new(provider.clone());

    let request = AnalysisRequest::new("", "python", AnalysisMode::Refactor);
    let err = service.analyze(&request).await.unwrap_err();
    assert!(matches!(err, InsightError::InvalidRequest(_)));
    assert!(provider.last_request.lock().unwrap().is_none());
}

#[tokio::test]
async fn test_upstream_failure_propagates_original_message() {
    let provider = Arc::new(MockProvider::with_behavior(MockBehavior::Fail(
        "model overloaded".to_string(),
    )));
    let service = AnalysisService::new(provider);

    let err = service.analyze(&security_request()).await.unwrap_err();
    match err {
        InsightError::Upstream(message) => assert!(message.contains("model overloaded")),
        other => panic!("expected Upstream, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_reply_is_an_upstream_failure() {
    let provider = Arc::new(MockProvider::with_behavior(MockBehavior::Empty));
    let service = AnalysisService::new(provider);

    let err = service.analyze(&security_request()).await.unwrap_err();
    assert!(matches!(err, InsightError::Upstream(_)));
}

#[tokio::test]
async fn test_outcome_feeds_session_store() {
    let provider = Arc::new(MockProvider::replying(
        r#"{"securityAnalysis": "no risks found"}"#,
    ));
    let service = AnalysisService::new(provider);
    let store = SessionStore::new();

    let outcome = service.analyze(&security_request()).await.unwrap();
    store.record_outcome("session-1", &outcome);

    let context = store.context("session-1");
    assert_eq!(context.get(AnalysisMode::Security), Some("no risks found"));
}

#[tokio::test]
async fn test_translation_request_end_to_end() {
    let provider = Arc::new(MockProvider::replying(
        r#"{"refactoredCode": "const x = 1;", "refactoringSummary": "Traducción directa; no requiere dependencias."}"#,
    ));
    let service = AnalysisService::new(provider.clone());

    let request = AnalysisRequest::new("x = 1", "python", AnalysisMode::Refactor)
        .with_target_language("javascript");
    let outcome = service.analyze(&request).await.unwrap();

    assert_eq!(outcome.record.refactored_code, "const x = 1;");
    let prompt = provider.last_message_content().unwrap();
    assert!(prompt.contains("Traduce el siguiente código de python a javascript"));
}
