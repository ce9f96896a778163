//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Question cannot be empty")]
    EmptyQuestion,

    #[error("Question exceeds {max} characters (got {len})")]
    QuestionTooLong { len: usize, max: usize },

    #[error("No specialists configured")]
    NoSpecialists,

    #[error("Operation cancelled")]
    Cancelled,
}

impl DomainError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DomainError::Cancelled)
    }

    /// Check if this error represents invalid inbound input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::EmptyQuestion | DomainError::QuestionTooLong { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_error_display() {
        let error = DomainError::Cancelled;
        assert_eq!(error.to_string(), "Operation cancelled");
    }

    #[test]
    fn test_is_cancelled_check() {
        assert!(DomainError::Cancelled.is_cancelled());
        assert!(!DomainError::EmptyQuestion.is_cancelled());
        assert!(!DomainError::NoSpecialists.is_cancelled());
    }

    #[test]
    fn test_is_validation_check() {
        assert!(DomainError::EmptyQuestion.is_validation());
        assert!(DomainError::QuestionTooLong { len: 10, max: 5 }.is_validation());
        assert!(!DomainError::Cancelled.is_validation());
        assert!(!DomainError::NoSpecialists.is_validation());
    }
}
