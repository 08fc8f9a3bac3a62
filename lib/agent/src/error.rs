//! Error types for agent construction.
//!
//! Only initialization failures surface as errors; per-request failures
//! are recovered into [`AnalysisResult`](crate::AnalysisResult) values.

use std::fmt;

/// Errors from constructing an agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    /// No API key was configured.
    MissingApiKey,
    /// Configuration could not be loaded.
    Configuration { reason: String },
    /// The LLM backend could not be constructed.
    Backend { reason: String },
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiKey => {
                write!(f, "no API key found; set OPENAI_API_KEY in the environment")
            }
            Self::Configuration { reason } => {
                write!(f, "failed to load agent configuration: {reason}")
            }
            Self::Backend { reason } => {
                write!(f, "failed to initialize LLM backend: {reason}")
            }
        }
    }
}

impl std::error::Error for AgentError {}
