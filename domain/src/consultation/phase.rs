//! Consultation phases for progress reporting

use serde::{Deserialize, Serialize};

/// Phase of a consultation run
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsultationPhase {
    /// Dispatch phase - all specialists are queried in parallel
    Dispatch,
    /// Synthesis phase - answered opinions are merged into one summary
    Synthesis,
}

impl ConsultationPhase {
    pub fn as_str(&self) -> &str {
        match self {
            ConsultationPhase::Dispatch => "dispatch",
            ConsultationPhase::Synthesis => "synthesis",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            ConsultationPhase::Dispatch => "Specialist Dispatch",
            ConsultationPhase::Synthesis => "Synthesis",
        }
    }
}

impl std::fmt::Display for ConsultationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_names() {
        assert_eq!(ConsultationPhase::Dispatch.as_str(), "dispatch");
        assert_eq!(ConsultationPhase::Synthesis.display_name(), "Synthesis");
    }
}
