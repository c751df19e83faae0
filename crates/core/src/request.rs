//! Analysis Request
//!
//! The inbound request shape consumed by the engine. Validation fails fast,
//! before any prompt is built or any network call is made.

use serde::{Deserialize, Serialize};

use crate::error::{InsightError, InsightResult};
use crate::mode::AnalysisMode;

/// One code-analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// The code to analyze
    pub source_code: String,
    /// Language identifier of the submitted code (e.g. "python")
    pub source_language: String,
    /// Target language identifier; empty means same as source
    #[serde(default)]
    pub target_language: String,
    /// Requested analysis category
    pub mode: AnalysisMode,
}

impl AnalysisRequest {
    /// Create a request analyzing code in its own language.
    pub fn new(
        source_code: impl Into<String>,
        source_language: impl Into<String>,
        mode: AnalysisMode,
    ) -> Self {
        Self {
            source_code: source_code.into(),
            source_language: source_language.into(),
            target_language: String::new(),
            mode,
        }
    }

    /// Set a target language, turning the request into a translation.
    pub fn with_target_language(mut self, target: impl Into<String>) -> Self {
        self.target_language = target.into();
        self
    }

    /// The effective target language: the explicit target, or the source
    /// language when none was given.
    pub fn resolved_target(&self) -> &str {
        if self.target_language.trim().is_empty() {
            &self.source_language
        } else {
            &self.target_language
        }
    }

    /// Whether this request asks for a cross-language translation.
    pub fn is_translation(&self) -> bool {
        !self.target_language.trim().is_empty()
            && self.target_language.trim() != self.source_language.trim()
    }

    /// Reject requests with empty required fields.
    pub fn validate(&self) -> InsightResult<()> {
        if self.source_code.trim().is_empty() {
            return Err(InsightError::invalid_request("sourceCode must not be empty"));
        }
        if self.source_language.trim().is_empty() {
            return Err(InsightError::invalid_request(
                "sourceLanguage must not be empty",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_passes() {
        let request = AnalysisRequest::new("print('hi')", "python", AnalysisMode::Refactor);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_code_is_rejected() {
        let request = AnalysisRequest::new("   ", "python", AnalysisMode::Refactor);
        let err = request.validate().unwrap_err();
        assert!(matches!(err, InsightError::InvalidRequest(_)));
    }

    #[test]
    fn test_empty_language_is_rejected() {
        let request = AnalysisRequest::new("print('hi')", "", AnalysisMode::Tests);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_target_language_defaults_to_source() {
        let request = AnalysisRequest::new("x = 1", "python", AnalysisMode::Refactor);
        assert_eq!(request.resolved_target(), "python");
        assert!(!request.is_translation());
    }

    #[test]
    fn test_same_target_is_not_translation() {
        let request = AnalysisRequest::new("x = 1", "python", AnalysisMode::Refactor)
            .with_target_language("python");
        assert!(!request.is_translation());
    }

    #[test]
    fn test_different_target_is_translation() {
        let request = AnalysisRequest::new("x = 1", "python", AnalysisMode::Refactor)
            .with_target_language("javascript");
        assert!(request.is_translation());
        assert_eq!(request.resolved_target(), "javascript");
    }
}
