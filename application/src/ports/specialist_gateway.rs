//! Specialist gateway port
//!
//! Defines the interface for one outbound call to a specialist agent.
//! Implementations (adapters) live in the infrastructure layer.

use async_trait::async_trait;
use consilium_domain::{ConsultationRequest, FailureCause, Specialist};
use thiserror::Error;

/// Errors a specialist call can fail with.
///
/// These never escape the fan-out coordinator: the use case recovers
/// every variant into a [`consilium_domain::SpecialistOutcome`].
#[derive(Error, Debug)]
pub enum SpecialistCallError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Call timed out")]
    Timeout,

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl SpecialistCallError {
    /// Machine-readable failure classification for the outcome record.
    pub fn cause(&self) -> FailureCause {
        match self {
            SpecialistCallError::Connection(_) => FailureCause::Connection,
            SpecialistCallError::Protocol(_) => FailureCause::Protocol,
            SpecialistCallError::Timeout => FailureCause::Timeout,
            SpecialistCallError::Unexpected(_) => FailureCause::Unexpected,
        }
    }
}

/// Gateway for specialist agent communication
///
/// One call sends the question to one specialist and returns its answer
/// text. The gateway is stateless and safe to share across concurrent
/// consultations; it performs a single attempt per call - retry policy,
/// if any, belongs to the caller, and this system configures none.
#[async_trait]
pub trait SpecialistGateway: Send + Sync {
    /// Ask one specialist the question carried by `request`.
    async fn ask(
        &self,
        specialist: &Specialist,
        request: &ConsultationRequest,
    ) -> Result<String, SpecialistCallError>;
}
