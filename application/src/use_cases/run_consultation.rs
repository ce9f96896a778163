//! Run Consultation use case
//!
//! Fans one consultation request out to every configured specialist,
//! recovers every call into an outcome, and aggregates the outcomes
//! into the final result.

use crate::ports::consultation_logger::{
    ConsultationEvent, ConsultationLogger, NoConsultationLogger,
};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::specialist_gateway::{SpecialistCallError, SpecialistGateway};
use consilium_domain::{
    ConsultationPhase, ConsultationRequest, ConsultationResult, FailureCause, LabeledSynthesis,
    Specialist, SpecialistOutcome, SynthesisPolicy,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Errors that can occur during consultation execution
///
/// Individual specialist failures are never errors at this level - they
/// are recovered into outcomes. Only invalid input, an empty specialist
/// set, and whole-call cancellation surface here.
#[derive(Error, Debug)]
pub enum ConsultationError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(#[from] consilium_domain::DomainError),

    #[error("No specialists configured")]
    NoSpecialists,

    #[error("Consultation cancelled")]
    Cancelled,
}

/// Use case for running a multi-specialist consultation
pub struct RunConsultationUseCase<G: SpecialistGateway + 'static> {
    gateway: Arc<G>,
    specialists: Arc<Vec<Specialist>>,
    policy: Arc<dyn SynthesisPolicy>,
    logger: Arc<dyn ConsultationLogger>,
    cancellation_token: Option<CancellationToken>,
}

impl<G: SpecialistGateway + 'static> RunConsultationUseCase<G> {
    pub fn new(gateway: Arc<G>, specialists: Vec<Specialist>) -> Self {
        Self {
            gateway,
            specialists: Arc::new(specialists),
            policy: Arc::new(LabeledSynthesis::default()),
            logger: Arc::new(NoConsultationLogger),
            cancellation_token: None,
        }
    }

    /// Replace the synthesis policy
    pub fn with_policy(mut self, policy: Arc<dyn SynthesisPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Attach a structured consultation logger
    pub fn with_logger(mut self, logger: Arc<dyn ConsultationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Set a cancellation token for graceful interruption
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    pub fn specialists(&self) -> &[Specialist] {
        &self.specialists
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        request: ConsultationRequest,
    ) -> Result<ConsultationResult, ConsultationError> {
        self.execute_with_progress(request, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        request: ConsultationRequest,
        progress: &dyn ProgressNotifier,
    ) -> Result<ConsultationResult, ConsultationError> {
        if self.specialists.is_empty() {
            return Err(ConsultationError::NoSpecialists);
        }
        check_cancelled(&self.cancellation_token)?;

        info!(
            "Starting consultation with {} specialists",
            self.specialists.len()
        );
        self.logger.log(ConsultationEvent::new(
            "consultation_started",
            json!({
                "question_chars": request.question().content().chars().count(),
                "language": request.language(),
                "specialists": self.specialists.iter().map(|s| s.name()).collect::<Vec<_>>(),
            }),
        ));

        // Phase 1: Dispatch - one concurrent call per specialist
        let outcomes = self.dispatch(&request, progress).await?;

        // Phase 2: Synthesis - pure aggregation of the outcome set
        progress.on_phase_start(&ConsultationPhase::Synthesis, 1);
        let entries: Vec<(Specialist, SpecialistOutcome)> = self
            .specialists
            .iter()
            .cloned()
            .zip(outcomes)
            .collect();
        let result = ConsultationResult::synthesize(
            request.question().content(),
            entries,
            self.policy.as_ref(),
        );
        progress.on_task_complete(&ConsultationPhase::Synthesis, "aggregator", true);
        progress.on_phase_complete(&ConsultationPhase::Synthesis);

        info!(
            "Consultation finished: {} ({}/{} answered)",
            result.status,
            result.answered_count(),
            result.reports.len()
        );
        self.logger.log(ConsultationEvent::new(
            "consultation_completed",
            json!({
                "status": result.status.as_str(),
                "answered": result.answered_count(),
            }),
        ));

        Ok(result)
    }

    /// Dispatch phase: query all specialists in parallel.
    ///
    /// Always waits for every call to resolve; the wait is bounded by
    /// the largest configured per-specialist timeout. The returned
    /// vector holds exactly one outcome per specialist, in configured
    /// order, regardless of completion order.
    async fn dispatch(
        &self,
        request: &ConsultationRequest,
        progress: &dyn ProgressNotifier,
    ) -> Result<Vec<SpecialistOutcome>, ConsultationError> {
        progress.on_phase_start(&ConsultationPhase::Dispatch, self.specialists.len());

        let mut join_set = JoinSet::new();

        for (index, specialist) in self.specialists.iter().enumerate() {
            let gateway = Arc::clone(&self.gateway);
            let specialist = specialist.clone();
            let request = request.clone();

            join_set.spawn(async move {
                let (outcome, detail) = Self::call_specialist(&gateway, &specialist, &request).await;
                (index, specialist, outcome, detail)
            });
        }

        let mut outcomes: Vec<Option<SpecialistOutcome>> =
            (0..self.specialists.len()).map(|_| None).collect();

        loop {
            let joined = match &self.cancellation_token {
                Some(token) => tokio::select! {
                    _ = token.cancelled() => {
                        // Abandon outstanding calls; a cancelled
                        // consultation yields no partial result.
                        join_set.abort_all();
                        warn!("Consultation cancelled with calls outstanding");
                        return Err(ConsultationError::Cancelled);
                    }
                    joined = join_set.join_next() => joined,
                },
                None => join_set.join_next().await,
            };

            let Some(joined) = joined else { break };

            match joined {
                Ok((index, specialist, outcome, detail)) => {
                    match (&outcome, detail) {
                        (SpecialistOutcome::Answered { latency, .. }, _) => {
                            info!("Specialist {} answered in {:?}", specialist, latency);
                        }
                        (SpecialistOutcome::TimedOut, _) => {
                            warn!(
                                "Specialist {} timed out after {:?}",
                                specialist,
                                specialist.timeout()
                            );
                        }
                        (SpecialistOutcome::Failed { cause }, detail) => {
                            warn!(
                                "Specialist {} failed ({}): {}",
                                specialist,
                                cause,
                                detail.as_deref().unwrap_or("no detail")
                            );
                        }
                    }
                    progress.on_task_complete(
                        &ConsultationPhase::Dispatch,
                        specialist.name(),
                        outcome.is_answered(),
                    );
                    self.logger.log(ConsultationEvent::new(
                        "specialist_outcome",
                        json!({
                            "specialist": specialist.name(),
                            "outcome": &outcome,
                        }),
                    ));
                    outcomes[index] = Some(outcome);
                }
                Err(e) => {
                    warn!("Consultation task join error: {}", e);
                }
            }
        }

        progress.on_phase_complete(&ConsultationPhase::Dispatch);

        // A task that could not be joined still yields an explicit
        // failure entry - the result always covers every specialist.
        Ok(outcomes
            .into_iter()
            .map(|o| o.unwrap_or_else(|| SpecialistOutcome::failed(FailureCause::Unexpected)))
            .collect())
    }

    /// One specialist call, recovered into an outcome.
    ///
    /// The per-specialist timeout is enforced here, so a gateway that
    /// stalls cannot hold the consultation past the configured bound.
    /// Returns the outcome plus an optional failure detail for logging.
    async fn call_specialist(
        gateway: &G,
        specialist: &Specialist,
        request: &ConsultationRequest,
    ) -> (SpecialistOutcome, Option<String>) {
        let started = Instant::now();

        match tokio::time::timeout(specialist.timeout(), gateway.ask(specialist, request)).await {
            Ok(Ok(text)) => (SpecialistOutcome::answered(text, started.elapsed()), None),
            Ok(Err(SpecialistCallError::Timeout)) => (SpecialistOutcome::TimedOut, None),
            Ok(Err(e)) => {
                let cause = e.cause();
                (SpecialistOutcome::failed(cause), Some(e.to_string()))
            }
            Err(_elapsed) => (SpecialistOutcome::TimedOut, None),
        }
    }
}

/// Check if cancellation has been requested.
///
/// Returns `Err(ConsultationError::Cancelled)` if the token exists and
/// is cancelled.
pub(crate) fn check_cancelled(token: &Option<CancellationToken>) -> Result<(), ConsultationError> {
    if let Some(token) = token
        && token.is_cancelled()
    {
        return Err(ConsultationError::Cancelled);
    }
    Ok(())
}
