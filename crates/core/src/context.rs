//! Conversation Context
//!
//! Per-session memory of prior analyses: an insertion-ordered mapping from
//! mode to the most recent record's primary textual content. Read-only input
//! to the context assembler; it is appended to, never rewritten wholesale,
//! and has no lifecycle beyond the session that owns it.

use serde::{Deserialize, Serialize};

use crate::mode::AnalysisMode;

/// One cached analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContextEntry {
    mode: AnalysisMode,
    content: String,
}

/// Insertion-ordered mode → primary-content mapping for one session.
///
/// Re-recording an existing mode replaces its content in place, preserving
/// the position of the mode's first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationContext {
    entries: Vec<ContextEntry>,
}

impl ConversationContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mode's primary content, upserting in first-occurrence order.
    pub fn record(&mut self, mode: AnalysisMode, content: impl Into<String>) {
        let content = content.into();
        if let Some(entry) = self.entries.iter_mut().find(|e| e.mode == mode) {
            entry.content = content;
        } else {
            self.entries.push(ContextEntry { mode, content });
        }
    }

    /// The cached content for a mode, if any.
    pub fn get(&self, mode: AnalysisMode) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.mode == mode)
            .map(|e| e.content.as_str())
    }

    /// Iterate entries in insertion order of first occurrence.
    pub fn iter(&self) -> impl Iterator<Item = (AnalysisMode, &str)> {
        self.entries.iter().map(|e| (e.mode, e.content.as_str()))
    }

    /// Whether no analyses have been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of modes recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
