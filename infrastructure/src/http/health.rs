//! Specialist health probes
//!
//! Operational tooling around the orchestration core: a cheap liveness
//! check per specialist, used by the CLI's `--health` mode. Probes use
//! a short fixed timeout independent of the consultation timeouts.

use crate::http::gateway::{HttpSpecialistGateway, agent_url};
use consilium_domain::Specialist;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Timeout for one `/health` probe.
pub const HEALTH_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Liveness classification of one specialist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthState {
    /// Probe returned HTTP 200
    Healthy,
    /// Probe returned a non-success status
    Degraded,
    /// Probe could not complete
    Unreachable,
}

impl HealthState {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthState::Healthy => "healthy",
            HealthState::Degraded => "degraded",
            HealthState::Unreachable => "unreachable",
        }
    }
}

impl std::fmt::Display for HealthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of probing one specialist
#[derive(Debug, Clone, Serialize)]
pub struct SpecialistHealth {
    pub specialist: String,
    pub state: HealthState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl HttpSpecialistGateway {
    /// Probe one specialist's `/health` route.
    pub async fn check_health(&self, specialist: &Specialist) -> SpecialistHealth {
        let url = agent_url(specialist.endpoint(), "health");
        debug!("Probing specialist {} at {}", specialist, url);

        let (state, detail) = match self
            .client
            .get(&url)
            .timeout(HEALTH_PROBE_TIMEOUT)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => (HealthState::Healthy, None),
            Ok(response) => (
                HealthState::Degraded,
                Some(format!("HTTP {}", response.status().as_u16())),
            ),
            Err(e) => (HealthState::Unreachable, Some(e.to_string())),
        };

        SpecialistHealth {
            specialist: specialist.name().to_string(),
            state,
            detail,
        }
    }

    /// Probe every configured specialist, in configured order.
    pub async fn check_all_health(&self, specialists: &[Specialist]) -> Vec<SpecialistHealth> {
        let mut results = Vec::with_capacity(specialists.len());
        for specialist in specialists {
            results.push(self.check_health(specialist).await);
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_state_labels() {
        assert_eq!(HealthState::Healthy.as_str(), "healthy");
        assert_eq!(HealthState::Degraded.as_str(), "degraded");
        assert_eq!(HealthState::Unreachable.as_str(), "unreachable");
    }

    #[tokio::test]
    async fn test_unreachable_specialist_is_classified() {
        // Nothing listens on this port; the probe must classify rather
        // than error out.
        let gateway = HttpSpecialistGateway::new();
        let specialist = Specialist::new("ghost", "http://127.0.0.1:1");

        let health = gateway.check_health(&specialist).await;
        assert_eq!(health.specialist, "ghost");
        assert_eq!(health.state, HealthState::Unreachable);
        assert!(health.detail.is_some());
    }
}
