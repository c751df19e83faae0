//! Code Insight Engine
//!
//! The prompt orchestration and response normalization core:
//!
//! - `registry` - mode → instruction block lookup
//! - `prompt` - instruction-document composition for analysis requests
//! - `normalizer` - two-tier raw-reply → `AnalysisRecord` normalization
//! - `assembler` - prior-analyses context block and chat system prompt
//!
//! Everything here is a pure function over `code-insight-core` types; no I/O
//! and no shared mutable state. The network boundary lives in
//! `code-insight-llm`, and the session cache is owned by the caller.

pub mod assembler;
pub mod normalizer;
pub mod prompt;
pub mod registry;

pub use assembler::{assemble_context, build_chat_system_prompt};
pub use normalizer::{normalize, NormalizationTier, NormalizedReply};
pub use prompt::build_analysis_prompt;
pub use registry::instructions_for;
