//! Aligned table renderer for terminal output.
//!
//! Mirrors the columns of the service's results table:
//! Email | Valid | Exists | Message.

use super::{ansi_color, ReportFormat, ReportGenerator};
use crate::error::Result;
use crate::model::ValidationReport;
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 4] = ["Email", "Valid", "Exists", "Message"];

/// Table reporter for terminal output
pub struct TableReporter {
    /// Use colored output
    colored: bool,
}

impl TableReporter {
    /// Create a new table reporter
    #[must_use]
    pub const fn new(colored: bool) -> Self {
        Self { colored }
    }

    /// Render a Yes/No flag cell padded to `width` display columns.
    ///
    /// Padding is computed from the visible text, not the ANSI-wrapped
    /// string, so color codes never skew alignment.
    fn flag_cell(&self, flag: bool, width: usize) -> String {
        let text = if flag { "Yes" } else { "No" };
        let color = if flag { "green" } else { "red" };
        let deficit = width.saturating_sub(text.width());
        format!(
            "{}{}",
            ansi_color(text, color, self.colored),
            " ".repeat(deficit)
        )
    }
}

/// Pad a cell to `width` display columns (unicode-aware).
fn pad(text: &str, width: usize) -> String {
    let deficit = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(deficit))
}

impl ReportGenerator for TableReporter {
    fn generate(&self, report: &ValidationReport) -> Result<String> {
        let email_width = report
            .results
            .keys()
            .map(|e| e.width())
            .chain([HEADERS[0].width()])
            .max()
            .unwrap_or(0);
        let flag_width = HEADERS[2].width();

        let mut lines = Vec::new();
        lines.push(format!(
            "{}  {}  {}  {}",
            pad(HEADERS[0], email_width),
            pad(HEADERS[1], flag_width),
            pad(HEADERS[2], flag_width),
            HEADERS[3]
        ));
        lines.push(ansi_color(
            &"─".repeat(email_width + 2 * flag_width + HEADERS[3].width() + 6),
            "dim",
            self.colored,
        ));

        for (email, outcome) in &report.results {
            lines.push(format!(
                "{}  {}  {}  {}",
                pad(email, email_width),
                self.flag_cell(outcome.valid, flag_width),
                self.flag_cell(outcome.exists, flag_width),
                outcome.message
            ));
        }

        lines.push(String::new());
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Table
    }
}
