//! Console output formatter for consultation results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use consilium_domain::{ConsultationResult, ConsultationStatus, SpecialistOutcome};

/// Message shown instead of a summary when no specialist answered.
const DEGRADED_NOTICE: &str =
    "No specialist responded. The consultation service is temporarily unavailable - \
please try again later.";

/// Formats consultation results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn status_line(status: ConsultationStatus) -> String {
        let label = match status {
            ConsultationStatus::Complete => status.as_str().green().bold(),
            ConsultationStatus::Partial => status.as_str().yellow().bold(),
            ConsultationStatus::Unavailable => status.as_str().red().bold(),
        };
        format!("{} {}\n", "Status:".cyan().bold(), label)
    }

    fn report_section(result: &ConsultationResult) -> String {
        let mut output = String::new();
        for report in &result.reports {
            match &report.outcome {
                SpecialistOutcome::Answered { text, latency } => {
                    output.push_str(&format!(
                        "\n{}\n{}\n",
                        format!("── {} ({:.1?}) ──", report.specialist, latency)
                            .yellow()
                            .bold(),
                        text
                    ));
                }
                SpecialistOutcome::TimedOut => {
                    output.push_str(&format!(
                        "\n{}\n{}\n",
                        format!("── {} ──", report.specialist).red().bold(),
                        "Did not respond within its timeout".red()
                    ));
                }
                SpecialistOutcome::Failed { cause } => {
                    output.push_str(&format!(
                        "\n{}\n{}\n",
                        format!("── {} ──", report.specialist).red().bold(),
                        format!("Failed: {}", cause).red()
                    ));
                }
            }
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, result: &ConsultationResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Consultation Results"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Question:".cyan().bold(),
            result.question
        ));
        output.push_str(&Self::status_line(result.status));

        output.push_str(&Self::section_header("Specialist Reports"));
        output.push_str(&Self::report_section(result));

        output.push_str(&Self::section_header("Combined Opinion"));
        match &result.summary {
            Some(summary) => {
                output.push('\n');
                output.push_str(summary);
                output.push('\n');
            }
            None => {
                output.push_str(&format!("\n{}\n", DEGRADED_NOTICE.red()));
            }
        }

        output
    }

    fn format_json(&self, result: &ConsultationResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_summary_only(&self, result: &ConsultationResult) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "=== Consultation Summary ===".cyan().bold()
        ));
        output.push_str(&format!("{} {}\n\n", "Q:".bold(), result.question));

        match &result.summary {
            Some(summary) => {
                output.push_str(summary);
                output.push('\n');
            }
            None => {
                output.push_str(DEGRADED_NOTICE);
                output.push('\n');
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use consilium_domain::{LabeledSynthesis, Specialist};
    use std::time::Duration;

    fn partial_result() -> ConsultationResult {
        ConsultationResult::synthesize(
            "Is BCG therapy safe?",
            vec![
                (
                    Specialist::new("bladder", "http://localhost:8001"),
                    SpecialistOutcome::answered(
                        "BCG therapy causes local irritation",
                        Duration::from_millis(1200),
                    ),
                ),
                (
                    Specialist::new("prostate", "http://localhost:8002"),
                    SpecialistOutcome::TimedOut,
                ),
            ],
            &LabeledSynthesis::default(),
        )
    }

    fn unavailable_result() -> ConsultationResult {
        ConsultationResult::synthesize(
            "Q",
            vec![(
                Specialist::new("bladder", "http://localhost:8001"),
                SpecialistOutcome::TimedOut,
            )],
            &LabeledSynthesis::default(),
        )
    }

    #[test]
    fn test_full_format_lists_specialists_in_order() {
        colored::control::set_override(false);
        let output = ConsoleFormatter.format(&partial_result());

        let bladder_at = output.find("bladder").unwrap();
        let prostate_at = output.find("prostate").unwrap();
        assert!(bladder_at < prostate_at);
        assert!(output.contains("Did not respond within its timeout"));
        assert!(output.contains("BCG therapy causes local irritation"));
    }

    #[test]
    fn test_unavailable_shows_degraded_notice() {
        colored::control::set_override(false);
        let output = ConsoleFormatter.format(&unavailable_result());
        assert!(output.contains(DEGRADED_NOTICE));

        let summary_only = ConsoleFormatter.format_summary_only(&unavailable_result());
        assert!(summary_only.contains(DEGRADED_NOTICE));
    }

    #[test]
    fn test_json_format_round_trips() {
        let result = partial_result();
        let json = ConsoleFormatter.format_json(&result);
        let parsed: ConsultationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
