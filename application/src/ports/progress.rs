//! Progress notification port
//!
//! Defines the interface for reporting progress during a consultation.

use consilium_domain::ConsultationPhase;

/// Callback for progress updates during consultation execution
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, progress bars, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called when a phase starts
    fn on_phase_start(&self, phase: &ConsultationPhase, total_tasks: usize);

    /// Called when a task completes within a phase
    fn on_task_complete(&self, phase: &ConsultationPhase, specialist: &str, success: bool);

    /// Called when a phase completes
    fn on_phase_complete(&self, phase: &ConsultationPhase);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: &ConsultationPhase, _total_tasks: usize) {}
    fn on_task_complete(&self, _phase: &ConsultationPhase, _specialist: &str, _success: bool) {}
    fn on_phase_complete(&self, _phase: &ConsultationPhase) {}
}
