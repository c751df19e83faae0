//! Session Store
//!
//! In-memory cache of each session's prior analyses. Recording an outcome
//! extracts the record's primary content through the mode → field table and
//! upserts it into the session's `ConversationContext`. The store is owned
//! here and injected into callers; the context assembler itself stays a pure
//! function of its inputs.

use std::collections::HashMap;
use std::sync::RwLock;

use code_insight_core::ConversationContext;

use super::analysis::AnalysisOutcome;

/// Thread-safe per-session context store.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, ConversationContext>>,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache an analysis outcome's primary content under its session.
    pub fn record_outcome(&self, session_id: &str, outcome: &AnalysisOutcome) {
        let primary = outcome
            .record
            .field_text(outcome.mode.primary_field())
            .to_string();

        let mut sessions = self.sessions.write().unwrap_or_else(|e| e.into_inner());
        sessions
            .entry(session_id.to_string())
            .or_default()
            .record(outcome.mode, primary);
    }

    /// A snapshot of a session's context; empty when the session is unknown.
    pub fn context(&self, session_id: &str) -> ConversationContext {
        let sessions = self.sessions.read().unwrap_or_else(|e| e.into_inner());
        sessions.get(session_id).cloned().unwrap_or_default()
    }

    /// Drop a session's cached analyses.
    pub fn clear(&self, session_id: &str) {
        let mut sessions = self.sessions.write().unwrap_or_else(|e| e.into_inner());
        sessions.remove(session_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use code_insight_core::{AnalysisMode, AnalysisRecord};
    use code_insight_engine::NormalizationTier;
    use code_insight_llm::UsageStats;

    fn outcome(mode: AnalysisMode, record: AnalysisRecord) -> AnalysisOutcome {
        AnalysisOutcome {
            mode,
            record,
            tier: NormalizationTier::StrictJson,
            raw_text: String::new(),
            model: "test-model".to_string(),
            usage: UsageStats::default(),
        }
    }

    #[test]
    fn test_unknown_session_is_empty() {
        let store = SessionStore::new();
        assert!(store.context("nope").is_empty());
    }

    #[test]
    fn test_record_outcome_caches_primary_content() {
        let store = SessionStore::new();
        let record = AnalysisRecord {
            security_analysis: "no risks found".to_string(),
            refactored_code: "baseline".to_string(),
            ..Default::default()
        };
        store.record_outcome("s1", &outcome(AnalysisMode::Security, record));

        let context = store.context("s1");
        assert_eq!(context.get(AnalysisMode::Security), Some("no risks found"));
    }

    #[test]
    fn test_sessions_are_independent() {
        let store = SessionStore::new();
        let record = AnalysisRecord {
            unit_tests: "tests".to_string(),
            ..Default::default()
        };
        store.record_outcome("s1", &outcome(AnalysisMode::Tests, record));

        assert!(store.context("s2").is_empty());
        assert_eq!(store.context("s1").len(), 1);
    }

    #[test]
    fn test_later_outcome_replaces_mode_content() {
        let store = SessionStore::new();
        let first = AnalysisRecord {
            refactored_code: "v1".to_string(),
            ..Default::default()
        };
        let second = AnalysisRecord {
            refactored_code: "v2".to_string(),
            ..Default::default()
        };
        store.record_outcome("s1", &outcome(AnalysisMode::Refactor, first));
        store.record_outcome("s1", &outcome(AnalysisMode::Refactor, second));

        let context = store.context("s1");
        assert_eq!(context.len(), 1);
        assert_eq!(context.get(AnalysisMode::Refactor), Some("v2"));
    }

    #[test]
    fn test_clear_session() {
        let store = SessionStore::new();
        let record = AnalysisRecord {
            documentation: "docs".to_string(),
            ..Default::default()
        };
        store.record_outcome("s1", &outcome(AnalysisMode::Documentation, record));
        store.clear("s1");
        assert!(store.context("s1").is_empty());
    }
}
