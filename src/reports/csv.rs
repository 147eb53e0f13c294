//! CSV report renderer.
//!
//! Prefers the service-produced CSV when present (byte-for-byte wire
//! fidelity); regenerates it locally for reports that never touched the
//! service, such as offline lint runs.

use super::{ReportFormat, ReportGenerator};
use crate::error::Result;
use crate::model::ValidationReport;

/// CSV report renderer.
pub struct CsvReporter;

impl CsvReporter {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for CsvReporter {
    fn generate(&self, report: &ValidationReport) -> Result<String> {
        if report.csv_data.is_empty() {
            Ok(report.to_csv())
        } else {
            Ok(report.csv_data.clone())
        }
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ValidationOutcome, CSV_HEADER};
    use indexmap::IndexMap;

    #[test]
    fn test_prefers_service_csv() {
        let report = ValidationReport {
            total: 0,
            filtered: None,
            results: IndexMap::new(),
            csv_data: "Email,Valid,Exists,Message\nx@y.z,true,true,ok\n".to_string(),
        };
        let out = CsvReporter::new().generate(&report).unwrap();
        assert_eq!(out, report.csv_data);
    }

    #[test]
    fn test_regenerates_when_missing() {
        let mut results = IndexMap::new();
        results.insert(
            "a@x.com".to_string(),
            ValidationOutcome {
                valid: false,
                exists: false,
                message: "Invalid email format".to_string(),
            },
        );
        let report = ValidationReport {
            total: 1,
            filtered: None,
            results,
            csv_data: String::new(),
        };
        let out = CsvReporter::new().generate(&report).unwrap();
        assert!(out.starts_with(CSV_HEADER));
        assert!(out.contains("a@x.com,false,false,Invalid email format"));
    }
}
