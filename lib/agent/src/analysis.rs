//! Analysis result model.
//!
//! One [`AnalysisResult`] is produced per call to the agent's analysis
//! entry point and is immutable after creation. It serializes to a simple
//! JSON document tagged by `status`.

use crate::classify::InteractionType;
use pipewright_ai::LlmError;
use serde::{Deserialize, Serialize};

/// Metadata attached to a successful analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Coarse category assigned to the request.
    pub interaction_type: InteractionType,
    /// Heuristic quality proxy in `[0.70, 1.0]`.
    pub confidence_score: f64,
}

/// Category tag for an error-shaped result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Blank or whitespace-only input; no backend call was made.
    EmptyInput,
    /// Provider could not be reached.
    ProviderUnavailable,
    /// The delegated call failed.
    RequestFailed,
    /// The provider response could not be parsed.
    ResponseParseFailed,
    /// The delegated call timed out.
    Timeout,
    /// The provider rate-limited the request.
    RateLimited,
    /// The backend was misconfigured.
    InvalidConfig,
}

impl From<&LlmError> for ErrorKind {
    fn from(err: &LlmError) -> Self {
        match err {
            LlmError::ProviderUnavailable { .. } => Self::ProviderUnavailable,
            LlmError::RequestFailed { .. } => Self::RequestFailed,
            LlmError::ResponseParseFailed { .. } => Self::ResponseParseFailed,
            LlmError::Timeout => Self::Timeout,
            LlmError::RateLimited { .. } => Self::RateLimited,
            LlmError::InvalidConfig { .. } => Self::InvalidConfig,
        }
    }
}

/// Outcome of one analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisResult {
    /// The backend answered; metadata was computed from request and
    /// response.
    Success {
        /// The generated response text.
        response: String,
        /// Classification and confidence metadata.
        metadata: AnalysisMetadata,
    },
    /// Input validation or the delegated call failed.
    Error {
        /// Human-readable error message.
        error: String,
        /// Error category a caller can branch on.
        kind: ErrorKind,
    },
}

impl AnalysisResult {
    /// Creates a success result.
    #[must_use]
    pub fn success(
        response: impl Into<String>,
        interaction_type: InteractionType,
        confidence_score: f64,
    ) -> Self {
        Self::Success {
            response: response.into(),
            metadata: AnalysisMetadata {
                interaction_type,
                confidence_score,
            },
        }
    }

    /// Creates the validation-error result for blank input.
    #[must_use]
    pub fn empty_input() -> Self {
        Self::Error {
            error: "empty input provided".to_string(),
            kind: ErrorKind::EmptyInput,
        }
    }

    /// Converts a delegated-call failure into an error result.
    #[must_use]
    pub fn from_llm_error(err: &LlmError) -> Self {
        Self::Error {
            error: err.to_string(),
            kind: ErrorKind::from(err),
        }
    }

    /// Returns true for success results.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the metadata of a success result.
    #[must_use]
    pub fn metadata(&self) -> Option<&AnalysisMetadata> {
        match self {
            Self::Success { metadata, .. } => Some(metadata),
            Self::Error { .. } => None,
        }
    }
}
