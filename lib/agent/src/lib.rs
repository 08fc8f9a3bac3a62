//! Conversational CI/CD assistant facade.
//!
//! The [`Agent`] wraps an LLM backend, a single conversation session, and
//! the conversation prompt template. Each analysis request is validated,
//! delegated to the backend with the accumulated history as context, then
//! enriched with an interaction classification and a confidence score.

pub mod agent;
pub mod analysis;
pub mod classify;
pub mod config;
pub mod error;
pub mod score;

pub use agent::Agent;
pub use analysis::{AnalysisMetadata, AnalysisResult, ErrorKind};
pub use classify::InteractionType;
pub use config::AgentConfig;
pub use error::AgentError;
pub use score::confidence_score;
