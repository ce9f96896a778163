//! Output formatter trait

use consilium_domain::ConsultationResult;

/// Trait for formatting consultation results
pub trait OutputFormatter {
    /// Format the complete consultation result
    fn format(&self, result: &ConsultationResult) -> String;

    /// Format as JSON
    fn format_json(&self, result: &ConsultationResult) -> String;

    /// Format the merged summary only (concise output)
    fn format_summary_only(&self, result: &ConsultationResult) -> String;
}
