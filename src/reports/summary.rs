//! Summary report renderer for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ansi_color, ReportFormat, ReportGenerator};
use crate::error::Result;
use crate::model::ValidationReport;

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, report: &ValidationReport) -> Result<String> {
        let mut lines = Vec::new();

        lines.push(self.color("Validation Summary", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        lines.push(format!(
            "{}  {}",
            self.color("Processed:", "cyan"),
            report.total
        ));
        if let Some(filtered) = report.filtered {
            lines.push(format!(
                "{}   {}",
                self.color("Filtered:", "cyan"),
                filtered
            ));
        }
        lines.push(format!(
            "{}      {} / {}",
            self.color("Valid:", "cyan"),
            report.valid_count(),
            report.results.len()
        ));
        lines.push(format!(
            "{}     {} / {}",
            self.color("Exists:", "cyan"),
            report.existing_count(),
            report.results.len()
        ));

        if !report.results.is_empty() {
            lines.push(String::new());
            for (email, outcome) in &report.results {
                let marker = if outcome.is_deliverable() {
                    self.color("✓", "green")
                } else {
                    self.color("✗", "red")
                };
                if outcome.message.is_empty() {
                    lines.push(format!("  {marker} {email}"));
                } else {
                    lines.push(format!("  {marker} {email} - {}", outcome.message));
                }
            }
        }

        lines.push(String::new());
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
