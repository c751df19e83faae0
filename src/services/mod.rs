//! Business logic services
//!
//! - `analysis` - one-shot analysis orchestration
//! - `chat` - context-grounded conversational exchanges
//! - `session` - per-session cache of prior analyses

pub mod analysis;
pub mod chat;
pub mod session;

pub use analysis::{AnalysisOutcome, AnalysisService};
pub use chat::ChatService;
pub use session::SessionStore;
