//! Question value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Default upper bound on question length, in characters.
///
/// Overridable through the `[consultation]` config section.
pub const DEFAULT_MAX_QUESTION_CHARS: usize = 4096;

/// A medical question to be routed to the specialists (Value Object)
///
/// Construction is the single validation point for inbound text: a
/// `Question` that exists is guaranteed non-empty and within the length
/// bound it was validated against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Create a new question
    ///
    /// # Panics
    /// Panics if the content is empty or only whitespace
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(!content.trim().is_empty(), "Question cannot be empty");
        Self { content }
    }

    /// Try to create a question, validating against a length bound.
    ///
    /// Rejects empty or whitespace-only text with
    /// [`DomainError::EmptyQuestion`] and text longer than `max_chars`
    /// with [`DomainError::QuestionTooLong`].
    pub fn try_new(content: impl Into<String>, max_chars: usize) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::EmptyQuestion);
        }
        let len = content.chars().count();
        if len > max_chars {
            return Err(DomainError::QuestionTooLong {
                len,
                max: max_chars,
            });
        }
        Ok(Self { content })
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
