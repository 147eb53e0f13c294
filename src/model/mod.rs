//! Core data model for validation results.
//!
//! The validation service returns one [`ValidationOutcome`] per address plus
//! a ready-made CSV rendering of the whole run. [`ValidationReport`] bundles
//! them together and is the unit every renderer and exporter works on.

mod table;

pub use table::{split_fields, ResultRow, ResultsTable};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Column order of the results CSV, fixed by the service contract.
pub const CSV_HEADER: &str = "Email,Valid,Exists,Message";

/// Index of the email column in a result row.
pub const COL_EMAIL: usize = 0;
/// Index of the exists-flag column in a result row.
pub const COL_EXISTS: usize = 2;

/// Server-determined outcome for a single email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// Format validity (syntax + resolvable domain)
    pub valid: bool,
    /// Deliverability: the mailbox answered an SMTP probe
    pub exists: bool,
    /// Human-readable explanation
    #[serde(default)]
    pub message: String,
}

impl ValidationOutcome {
    /// True when the address passed both checks.
    #[must_use]
    pub const fn is_deliverable(&self) -> bool {
        self.valid && self.exists
    }
}

/// One validation run: per-address outcomes plus the service's CSV rendering.
///
/// `results` preserves service insertion order so rendered tables and
/// regenerated CSV follow the order addresses were submitted in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Number of addresses submitted
    pub total: usize,
    /// Number of results returned (bulk runs only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filtered: Option<usize>,
    /// Outcome per address, in submission order
    pub results: IndexMap<String, ValidationOutcome>,
    /// CSV rendering produced by the service (header + one row per address)
    #[serde(default)]
    pub csv_data: String,
}

impl ValidationReport {
    /// Count of addresses with a valid format.
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.results.values().filter(|r| r.valid).count()
    }

    /// Count of addresses confirmed to exist.
    #[must_use]
    pub fn existing_count(&self) -> usize {
        self.results.values().filter(|r| r.exists).count()
    }

    /// True when at least one address failed a check.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.results.values().any(|r| !r.is_deliverable())
    }

    /// Regenerate the results CSV locally with RFC 4180 quoting.
    ///
    /// Matches the service's column order and `true`/`false` boolean
    /// rendering, so the output is interchangeable with `csv_data`.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut out = String::from(CSV_HEADER);
        out.push('\n');
        for (email, outcome) in &self.results {
            out.push_str(&quote_field(email));
            out.push(',');
            out.push_str(if outcome.valid { "true" } else { "false" });
            out.push(',');
            out.push_str(if outcome.exists { "true" } else { "false" });
            out.push(',');
            out.push_str(&quote_field(&outcome.message));
            out.push('\n');
        }
        out
    }
}

/// Quote a CSV field when it contains a delimiter, quote, or newline.
fn quote_field(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
