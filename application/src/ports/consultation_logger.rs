//! Port for structured consultation logging.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures each
//! consultation (question, per-specialist outcomes, final status) in a
//! machine-readable format (JSONL).

use serde_json::Value;

/// A structured consultation event for logging.
pub struct ConsultationEvent {
    /// Event type identifier (e.g., "consultation_started",
    /// "specialist_outcome", "consultation_completed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConsultationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging consultation events to a structured log.
///
/// Implementations write each event as a single record (e.g., one JSONL
/// line). The `log` method is intentionally synchronous and non-fallible
/// to avoid disrupting the consultation flow - logging failures are
/// silently ignored.
pub trait ConsultationLogger: Send + Sync {
    /// Record a consultation event.
    fn log(&self, event: ConsultationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConsultationLogger;

impl ConsultationLogger for NoConsultationLogger {
    fn log(&self, _event: ConsultationEvent) {}
}
