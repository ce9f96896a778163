//! Consultation service boundary
//!
//! Accepts one raw external request, validates it, and drives the
//! consultation use case. This boundary adds no business logic of its
//! own: invalid input is rejected before any specialist call is made,
//! and the use case result is returned unchanged.

use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::specialist_gateway::SpecialistGateway;
use crate::use_cases::run_consultation::{ConsultationError, RunConsultationUseCase};
use consilium_domain::{
    ConsultationRequest, ConsultationResult, DEFAULT_MAX_QUESTION_CHARS, Question,
};

/// Service boundary for one external consultation request
pub struct ConsultationService<G: SpecialistGateway + 'static> {
    use_case: RunConsultationUseCase<G>,
    max_question_chars: usize,
}

impl<G: SpecialistGateway + 'static> ConsultationService<G> {
    pub fn new(use_case: RunConsultationUseCase<G>) -> Self {
        Self {
            use_case,
            max_question_chars: DEFAULT_MAX_QUESTION_CHARS,
        }
    }

    /// Override the question length bound
    pub fn with_max_question_chars(mut self, max_chars: usize) -> Self {
        self.max_question_chars = max_chars;
        self
    }

    /// Handle one external request with default (no-op) progress
    pub async fn handle(
        &self,
        question: &str,
        language: Option<&str>,
    ) -> Result<ConsultationResult, ConsultationError> {
        self.handle_with_progress(question, language, &NoProgress)
            .await
    }

    /// Handle one external request with progress callbacks
    pub async fn handle_with_progress(
        &self,
        question: &str,
        language: Option<&str>,
        progress: &dyn ProgressNotifier,
    ) -> Result<ConsultationResult, ConsultationError> {
        // Fail fast: no specialist call is issued for invalid input
        let question = Question::try_new(question, self.max_question_chars)?;

        let mut request = ConsultationRequest::new(question);
        if let Some(language) = language {
            request = request.with_language(language);
        }

        self.use_case.execute_with_progress(request, progress).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::specialist_gateway::SpecialistCallError;
    use consilium_domain::{ConsultationStatus, DomainError, Specialist};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingGateway {
        calls: AtomicUsize,
    }

    impl CountingGateway {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl SpecialistGateway for CountingGateway {
        async fn ask(
            &self,
            _specialist: &Specialist,
            request: &ConsultationRequest,
        ) -> Result<String, SpecialistCallError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("echo: {}", request.question().content()))
        }
    }

    fn service(gateway: Arc<CountingGateway>) -> ConsultationService<CountingGateway> {
        ConsultationService::new(RunConsultationUseCase::new(
            gateway,
            vec![
                Specialist::new("bladder", "http://localhost:8001"),
                Specialist::new("prostate", "http://localhost:8002"),
            ],
        ))
    }

    #[tokio::test]
    async fn test_empty_question_rejected_before_dispatch() {
        let gateway = Arc::new(CountingGateway::new());
        let service = service(Arc::clone(&gateway));

        let result = service.handle("   ", None).await;

        assert!(matches!(
            result,
            Err(ConsultationError::InvalidQuestion(DomainError::EmptyQuestion))
        ));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_over_length_question_rejected_before_dispatch() {
        let gateway = Arc::new(CountingGateway::new());
        let service = service(Arc::clone(&gateway)).with_max_question_chars(8);

        let result = service.handle("a question well over eight chars", None).await;

        assert!(matches!(
            result,
            Err(ConsultationError::InvalidQuestion(
                DomainError::QuestionTooLong { .. }
            ))
        ));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_valid_question_is_dispatched_unchanged() {
        let gateway = Arc::new(CountingGateway::new());
        let service = service(Arc::clone(&gateway));

        let result = service
            .handle("What causes blood in urine?", Some("en"))
            .await
            .unwrap();

        assert_eq!(result.status, ConsultationStatus::Complete);
        assert_eq!(result.question, "What causes blood in urine?");
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 2);
    }
}
