//! Consultation results - aggregation of per-specialist outcomes
//!
//! [`ConsultationResult::synthesize`] is the response aggregator: a pure
//! function from the ordered outcome set to the final result. Identical
//! inputs always produce byte-identical results, which keeps synthesis
//! reproducible across runs even though network completion order varies.

use crate::consultation::outcome::SpecialistOutcome;
use crate::consultation::specialist::Specialist;
use crate::synthesis::{SpecialistOpinion, SynthesisPolicy};
use serde::{Deserialize, Serialize};

/// One specialist's entry in the result listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialistReport {
    /// Name of the specialist this report belongs to
    pub specialist: String,
    /// What happened to the call
    #[serde(flatten)]
    pub outcome: SpecialistOutcome,
}

impl SpecialistReport {
    pub fn new(specialist: impl Into<String>, outcome: SpecialistOutcome) -> Self {
        Self {
            specialist: specialist.into(),
            outcome,
        }
    }
}

/// Overall status of a consultation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsultationStatus {
    /// Every specialist answered
    Complete,
    /// At least one answered, at least one did not
    Partial,
    /// No specialist answered
    Unavailable,
}

impl ConsultationStatus {
    /// Derive the overall status from the outcome set.
    ///
    /// Order-independent and monotonic in the count of answered outcomes.
    pub fn derive(reports: &[SpecialistReport]) -> Self {
        let answered = reports.iter().filter(|r| r.outcome.is_answered()).count();
        if answered == 0 {
            ConsultationStatus::Unavailable
        } else if answered == reports.len() {
            ConsultationStatus::Complete
        } else {
            ConsultationStatus::Partial
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultationStatus::Complete => "complete",
            ConsultationStatus::Partial => "partial",
            ConsultationStatus::Unavailable => "unavailable",
        }
    }
}

impl std::fmt::Display for ConsultationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Complete result of one consultation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationResult {
    /// The original question
    pub question: String,
    /// Per-specialist reports, in configured specialist order
    pub reports: Vec<SpecialistReport>,
    /// Overall status derived from the reports
    pub status: ConsultationStatus,
    /// Merged opinion, `None` when no specialist answered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl ConsultationResult {
    /// Aggregate per-specialist outcomes into the final result.
    ///
    /// `entries` must be in configured specialist order; that order is
    /// preserved in the report listing and in the synthesis input. Only
    /// answered outcomes feed the synthesis policy; non-answered
    /// specialists keep their failure marker in the listing. When no
    /// specialist answered, no synthesis is attempted and the summary
    /// stays `None`.
    pub fn synthesize(
        question: impl Into<String>,
        entries: Vec<(Specialist, SpecialistOutcome)>,
        policy: &dyn SynthesisPolicy,
    ) -> Self {
        let question = question.into();

        let opinions: Vec<SpecialistOpinion<'_>> = entries
            .iter()
            .filter_map(|(specialist, outcome)| {
                outcome.answer_text().map(|text| SpecialistOpinion {
                    specialist: specialist.name(),
                    weight: specialist.weight(),
                    text,
                })
            })
            .collect();

        let summary = if opinions.is_empty() {
            None
        } else {
            Some(policy.synthesize(&question, &opinions))
        };

        let reports: Vec<SpecialistReport> = entries
            .into_iter()
            .map(|(specialist, outcome)| SpecialistReport::new(specialist.name(), outcome))
            .collect();

        let status = ConsultationStatus::derive(&reports);

        Self {
            question,
            reports,
            status,
            summary,
        }
    }

    /// Look up the report for a specialist by name.
    pub fn report_for(&self, specialist: &str) -> Option<&SpecialistReport> {
        self.reports.iter().find(|r| r.specialist == specialist)
    }

    /// Number of specialists that answered.
    pub fn answered_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| r.outcome.is_answered())
            .count()
    }
}
