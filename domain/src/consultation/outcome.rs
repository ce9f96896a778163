//! Per-specialist call outcomes

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Machine-readable classification of a failed specialist call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureCause {
    /// The agent could not be reached (connection refused, DNS, ...)
    Connection,
    /// The agent was reached but the exchange was malformed
    /// (non-success status, undecodable payload)
    Protocol,
    /// The transport reported a timeout
    Timeout,
    /// Anything that fits no other bucket
    Unexpected,
}

impl FailureCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureCause::Connection => "connection",
            FailureCause::Protocol => "protocol",
            FailureCause::Timeout => "timeout",
            FailureCause::Unexpected => "unexpected",
        }
    }
}

impl std::fmt::Display for FailureCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of one specialist call (Value Object)
///
/// Exactly one of these exists per configured specialist per
/// consultation. Timeouts and failures are outcomes, not errors - they
/// never escape the fan-out as exceptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SpecialistOutcome {
    /// The specialist answered within its timeout
    Answered {
        text: String,
        /// Wall-clock duration of the call
        latency: Duration,
    },
    /// The per-specialist timeout elapsed before a response arrived
    TimedOut,
    /// The call failed for a transport or protocol reason
    Failed { cause: FailureCause },
}

impl SpecialistOutcome {
    /// Creates a successful outcome from a specialist's answer.
    pub fn answered(text: impl Into<String>, latency: Duration) -> Self {
        SpecialistOutcome::Answered {
            text: text.into(),
            latency,
        }
    }

    /// Creates a failed outcome with a cause classification.
    pub fn failed(cause: FailureCause) -> Self {
        SpecialistOutcome::Failed { cause }
    }

    /// Returns `true` if the specialist produced an answer.
    pub fn is_answered(&self) -> bool {
        matches!(self, SpecialistOutcome::Answered { .. })
    }

    /// The answer text, if this outcome carries one.
    pub fn answer_text(&self) -> Option<&str> {
        match self {
            SpecialistOutcome::Answered { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Short failure marker for non-answered outcomes
    /// (`timed_out`, or the failure cause).
    pub fn failure_label(&self) -> Option<&'static str> {
        match self {
            SpecialistOutcome::Answered { .. } => None,
            SpecialistOutcome::TimedOut => Some("timed_out"),
            SpecialistOutcome::Failed { cause } => Some(cause.as_str()),
        }
    }
}
