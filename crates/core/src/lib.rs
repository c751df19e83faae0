//! Code Insight Core
//!
//! Foundational data model and error types for the Code Insight workspace.
//! This crate has zero dependencies on application-level code (HTTP, LLM
//! providers, CLI, etc.).
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`InsightError`, `InsightResult`)
//! - `mode` - The closed set of analysis modes and the mode → field table
//! - `record` - The eight-field canonical analysis result
//! - `request` - Inbound request shape and validation
//! - `context` - Per-session cache of prior analyses' primary content

pub mod context;
pub mod error;
pub mod mode;
pub mod record;
pub mod request;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{InsightError, InsightResult};

// ── Data Model ─────────────────────────────────────────────────────────
pub use context::ConversationContext;
pub use mode::AnalysisMode;
pub use record::{AnalysisRecord, CommentSeverity, InlineComment, RecordField};
pub use request::AnalysisRequest;
