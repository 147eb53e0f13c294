//! JSON report renderer.
//!
//! Serializes the full validation report for programmatic integration.

use super::{ReportFormat, ReportGenerator};
use crate::error::{MailvetError, ReportErrorKind, Result};
use crate::model::ValidationReport;

/// JSON report renderer.
pub struct JsonReporter;

impl JsonReporter {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, report: &ValidationReport) -> Result<String> {
        serde_json::to_string_pretty(report).map_err(|e| {
            MailvetError::report(
                "serializing report",
                ReportErrorKind::JsonSerializationError(e.to_string()),
            )
        })
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ValidationOutcome;
    use indexmap::IndexMap;

    #[test]
    fn test_json_round_trips() {
        let mut results = IndexMap::new();
        results.insert(
            "a@x.com".to_string(),
            ValidationOutcome {
                valid: true,
                exists: true,
                message: "Email exists".to_string(),
            },
        );
        let report = ValidationReport {
            total: 1,
            filtered: None,
            results,
            csv_data: "Email,Valid,Exists,Message\n".to_string(),
        };

        let json = JsonReporter::new().generate(&report).unwrap();
        let parsed: ValidationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.total, 1);
        assert!(parsed.results["a@x.com"].exists);
    }
}
