//! Specialist value object representing one configured agent

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default per-call timeout for a specialist agent.
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(30);

/// A configured specialist agent (Value Object)
///
/// The process-wide specialist set is an ordered list of these, loaded
/// once at startup and never mutated afterwards. Nothing in the
/// coordination logic assumes a particular number of specialists; the
/// reference deployment happens to run two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialist {
    name: String,
    endpoint: String,
    timeout: Duration,
    weight: u32,
}

impl Specialist {
    pub fn new(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
            timeout: DEFAULT_CALL_TIMEOUT,
            weight: 1,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Stable identifier used as the key in consultation results
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base address of the agent service, e.g. `http://localhost:8001`
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Per-call timeout for this specialist
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Tie-break weight, available to synthesis policies
    pub fn weight(&self) -> u32 {
        self.weight
    }
}

impl std::fmt::Display for Specialist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
