//! Request classification.
//!
//! Assigns a coarse interaction category to free-text input by substring
//! keyword matching. Categories are tested in a fixed priority order and
//! the first match wins; match counts are never compared.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse category label for an analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionType {
    /// Code review and analysis requests.
    CodeAnalysis,
    /// CI/CD pipeline and workflow requests.
    PipelineOptimization,
    /// Security and vulnerability requests.
    SecurityAssessment,
    /// Anything else.
    GeneralInquiry,
}

/// Keyword lists in priority order. Earlier categories win ties.
const CATEGORIES: &[(InteractionType, &[&str])] = &[
    (
        InteractionType::CodeAnalysis,
        &["analyze", "review", "check", "function", "code"],
    ),
    (
        InteractionType::PipelineOptimization,
        &["pipeline", "workflow", "ci", "cd", "actions"],
    ),
    (
        InteractionType::SecurityAssessment,
        &["secure", "vulnerability", "risk", "safety"],
    ),
];

impl InteractionType {
    /// Classifies free-text input into exactly one category.
    ///
    /// Blank input is rejected by the agent before classification and
    /// never reaches this function.
    #[must_use]
    pub fn classify(input: &str) -> Self {
        let input = input.to_lowercase();

        for (category, keywords) in CATEGORIES {
            if keywords.iter().any(|word| input.contains(word)) {
                return *category;
            }
        }

        Self::GeneralInquiry
    }

    /// Returns the wire label for this category.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CodeAnalysis => "code_analysis",
            Self::PipelineOptimization => "pipeline_optimization",
            Self::SecurityAssessment => "security_assessment",
            Self::GeneralInquiry => "general_inquiry",
        }
    }
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_analysis_keywords() {
        assert_eq!(
            InteractionType::classify("Review this Python function: def add(a, b): return a + b"),
            InteractionType::CodeAnalysis
        );
    }

    #[test]
    fn pipeline_keywords() {
        assert_eq!(
            InteractionType::classify("How can I make my GitHub Actions workflow faster?"),
            InteractionType::PipelineOptimization
        );
    }

    #[test]
    fn security_keywords() {
        assert_eq!(
            InteractionType::classify("Is there a vulnerability in this setup?"),
            InteractionType::SecurityAssessment
        );
    }

    #[test]
    fn fallback_label() {
        assert_eq!(
            InteractionType::classify("What time is it?"),
            InteractionType::GeneralInquiry
        );
    }

    #[test]
    fn priority_order_resolves_ties() {
        // "check" (code_analysis) outranks "secure" (security_assessment).
        assert_eq!(
            InteractionType::classify("Check if this Docker configuration is secure"),
            InteractionType::CodeAnalysis
        );
        // "pipeline" (priority 2) outranks "secure" (priority 3).
        assert_eq!(
            InteractionType::classify("make my pipeline more secure"),
            InteractionType::PipelineOptimization
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            InteractionType::classify("REVIEW THIS"),
            InteractionType::CodeAnalysis
        );
    }

    #[test]
    fn classification_is_deterministic() {
        let input = "optimize the workflow";
        assert_eq!(
            InteractionType::classify(input),
            InteractionType::classify(input)
        );
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&InteractionType::PipelineOptimization).unwrap();
        assert_eq!(json, "\"pipeline_optimization\"");
        assert_eq!(InteractionType::PipelineOptimization.as_str(), "pipeline_optimization");
    }
}
