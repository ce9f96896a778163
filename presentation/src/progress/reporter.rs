//! Progress reporting for consultation execution

use colored::Colorize;
use consilium_application::ports::progress::ProgressNotifier;
use consilium_domain::ConsultationPhase;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports progress during consultation execution with progress bars
pub struct ProgressReporter {
    multi: MultiProgress,
    phase_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            phase_bar: Mutex::new(None),
        }
    }

    fn phase_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }

    fn phase_display_name(phase: &ConsultationPhase) -> &'static str {
        match phase {
            ConsultationPhase::Dispatch => "Phase 1: Specialist Dispatch",
            ConsultationPhase::Synthesis => "Phase 2: Synthesis",
        }
    }

    fn phase_short_name(phase: &ConsultationPhase) -> &'static str {
        match phase {
            ConsultationPhase::Dispatch => "Phase 1",
            ConsultationPhase::Synthesis => "Phase 2",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: &ConsultationPhase, total_tasks: usize) {
        let phase_name = Self::phase_display_name(phase);

        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::phase_style());
        pb.set_prefix(phase_name.to_string());
        pb.set_message("Starting...");

        *self.phase_bar.lock().unwrap() = Some(pb);
    }

    fn on_task_complete(&self, _phase: &ConsultationPhase, specialist: &str, success: bool) {
        if let Some(pb) = self.phase_bar.lock().unwrap().as_ref() {
            let status = if success {
                format!("{} {}", "v".green(), specialist)
            } else {
                format!("{} {}", "x".red(), specialist)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_phase_complete(&self, phase: &ConsultationPhase) {
        if let Some(pb) = self.phase_bar.lock().unwrap().take() {
            let phase_name = Self::phase_short_name(phase);
            pb.finish_with_message(format!("{} complete!", phase_name.green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: &ConsultationPhase, total_tasks: usize) {
        let phase_name = ProgressReporter::phase_display_name(phase);
        println!(
            "{} {} ({} tasks)",
            "->".cyan(),
            phase_name.bold(),
            total_tasks
        );
    }

    fn on_task_complete(&self, _phase: &ConsultationPhase, specialist: &str, success: bool) {
        if success {
            println!("  {} {}", "v".green(), specialist);
        } else {
            println!("  {} {} (no answer)", "x".red(), specialist);
        }
    }

    fn on_phase_complete(&self, _phase: &ConsultationPhase) {
        println!();
    }
}
