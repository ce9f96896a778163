//! Consultation request value object

use crate::core::question::Question;
use serde::{Deserialize, Serialize};

/// One inbound consultation request (Value Object)
///
/// Immutable once created and scoped to a single orchestration call.
/// The optional language hint is forwarded to the specialists verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationRequest {
    question: Question,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
}

impl ConsultationRequest {
    pub fn new(question: Question) -> Self {
        Self {
            question,
            language: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_to_no_language() {
        let request = ConsultationRequest::new(Question::new("Is PSA screening useful?"));
        assert_eq!(request.question().content(), "Is PSA screening useful?");
        assert!(request.language().is_none());
    }

    #[test]
    fn test_request_with_language() {
        let request =
            ConsultationRequest::new(Question::new("Is PSA screening useful?")).with_language("ko");
        assert_eq!(request.language(), Some("ko"));
    }
}
