//! Terminal rendering of validation reports.
//!
//! This module provides multiple output formats for a validation run:
//! - Summary: compact shell-friendly output
//! - Table: aligned tabular terminal output
//! - JSON: structured data for programmatic integration
//! - CSV: the results table for spreadsheet import

mod csv;
mod json;
mod summary;
mod table;

pub use csv::CsvReporter;
pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use table::TableReporter;

use crate::error::Result;
use crate::model::ValidationReport;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for rendered reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Brief summary output
    #[default]
    Summary,
    /// Aligned table for the terminal
    Table,
    /// Structured JSON output
    Json,
    /// CSV for spreadsheet import
    Csv,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Summary => write!(f, "summary"),
            ReportFormat::Table => write!(f, "table"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Trait for report renderers
pub trait ReportGenerator {
    /// Render a validation report to text
    fn generate(&self, report: &ValidationReport) -> Result<String>;

    /// Get the format this renderer produces
    fn format(&self) -> ReportFormat;
}

/// Apply ANSI color formatting if colored output is enabled.
pub(crate) fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Create a report renderer for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat, colored: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => Box::new(SummaryReporter::new(colored)),
        ReportFormat::Table => Box::new(TableReporter::new(colored)),
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Csv => Box::new(CsvReporter::new()),
    }
}
