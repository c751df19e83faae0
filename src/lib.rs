//! Code Insight - Service Layer
//!
//! Wires the prompt orchestration engine to a configured model provider:
//! - Environment-driven configuration and provider construction
//! - Analysis and chat services
//! - Per-session cache of prior analyses
//!
//! The HTTP surface, authentication, and durable persistence are external
//! collaborators and are not part of this crate.

pub mod config;
pub mod services;

// Re-export the workspace crates under one roof
pub use code_insight_core as core;
pub use code_insight_engine as engine;
pub use code_insight_llm as llm;

pub use config::{create_provider, InsightConfig};
pub use services::{AnalysisOutcome, AnalysisService, ChatService, SessionStore};
