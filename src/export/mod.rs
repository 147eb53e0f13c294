//! Export of validation results as downloadable CSV or TXT payloads.
//!
//! [`format_export`] is the pure core: given a results CSV blob, a filter
//! flag, and a format, it produces the exact payload the service's web
//! client offers for download, including the canonical MIME type and file
//! name. Writing the payload to disk is a separate step ([`write_export`]).

use crate::error::{ErrorContext, Result};
use crate::model::ResultsTable;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Export payload format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Full results table: header plus one row per address
    #[default]
    Csv,
    /// Email addresses only, one per line, no header
    Txt,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Txt => write!(f, "txt"),
        }
    }
}

/// A formatted export payload ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    /// The textual payload
    pub content: String,
    /// MIME type of the payload
    pub mime_type: &'static str,
    /// Canonical file name for the payload
    pub file_name: &'static str,
}

/// Format a results CSV blob for export.
///
/// Row 0 of `csv_data` is the header; empty and whitespace-only rows are
/// discarded. When `only_existing` is set, a data row is kept only if its
/// exists column (index 2), trimmed, equals the literal `true`.
///
/// - [`ExportFormat::Csv`] keeps the header verbatim and emits kept rows
///   unchanged, joined with `\n`.
/// - [`ExportFormat::Txt`] emits the email column of kept rows, one per
///   line, no header.
///
/// Pure function: identical inputs yield identical output.
#[must_use]
pub fn format_export(csv_data: &str, only_existing: bool, format: ExportFormat) -> Export {
    let table = ResultsTable::parse(csv_data);

    match format {
        ExportFormat::Csv => {
            let mut lines = vec![table.header()];
            lines.extend(
                table
                    .rows()
                    .iter()
                    .filter(|row| !only_existing || row.exists())
                    .map(|row| row.raw()),
            );
            Export {
                content: lines.join("\n"),
                mime_type: "text/csv",
                file_name: "validation_results.csv",
            }
        }
        ExportFormat::Txt => {
            let emails: Vec<String> = table
                .rows()
                .iter()
                .filter(|row| !only_existing || row.exists())
                .filter_map(|row| row.email())
                .collect();
            Export {
                content: emails.join("\n"),
                mime_type: "text/plain",
                file_name: "email_addresses.txt",
            }
        }
    }
}

impl Export {
    /// Resolve the output path: an explicit path wins, otherwise the
    /// payload's canonical file name in the current directory.
    #[must_use]
    pub fn resolve_path(&self, explicit: Option<&Path>) -> PathBuf {
        explicit.map_or_else(|| PathBuf::from(self.file_name), Path::to_path_buf)
    }
}

/// Write an export payload to disk, returning the path written.
pub fn write_export(export: &Export, path: Option<&Path>) -> Result<PathBuf> {
    let target = export.resolve_path(path);
    std::fs::write(&target, &export.content)
        .with_context(|| format!("writing export to {}", target.display()))?;
    tracing::info!("Export written to {}", target.display());
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Email,Valid,Exists,Message\na@x.com,true,true,ok\nb@x.com,true,false,no-mx\n";

    #[test]
    fn test_csv_unfiltered_preserves_rows() {
        let export = format_export(SAMPLE, false, ExportFormat::Csv);
        assert_eq!(
            export.content,
            "Email,Valid,Exists,Message\na@x.com,true,true,ok\nb@x.com,true,false,no-mx"
        );
        assert_eq!(export.mime_type, "text/csv");
        assert_eq!(export.file_name, "validation_results.csv");
    }

    #[test]
    fn test_csv_filtered_keeps_existing_only() {
        let export = format_export(SAMPLE, true, ExportFormat::Csv);
        assert_eq!(
            export.content,
            "Email,Valid,Exists,Message\na@x.com,true,true,ok"
        );
    }

    #[test]
    fn test_txt_filtered_emails_only() {
        let export = format_export(SAMPLE, true, ExportFormat::Txt);
        assert_eq!(export.content, "a@x.com");
        assert_eq!(export.mime_type, "text/plain");
        assert_eq!(export.file_name, "email_addresses.txt");
    }

    #[test]
    fn test_txt_unfiltered_all_emails() {
        let export = format_export(SAMPLE, false, ExportFormat::Txt);
        assert_eq!(export.content, "a@x.com\nb@x.com");
    }

    #[test]
    fn test_header_only_table() {
        let header = "Email,Valid,Exists,Message\n";
        assert_eq!(
            format_export(header, true, ExportFormat::Csv).content,
            "Email,Valid,Exists,Message"
        );
        assert_eq!(format_export(header, true, ExportFormat::Txt).content, "");
    }

    #[test]
    fn test_prefix_addresses_do_not_cross_match() {
        // a@x.com does not exist; a@x.com.evil does. An address that is a
        // prefix of another must not inherit the other row's exists flag.
        let data = "Email,Valid,Exists,Message\na@x.com,true,false,no\na@x.com.evil,true,true,ok\n";
        let export = format_export(data, true, ExportFormat::Txt);
        assert_eq!(export.content, "a@x.com.evil");
    }

    #[test]
    fn test_idempotent() {
        let first = format_export(SAMPLE, true, ExportFormat::Csv);
        let second = format_export(SAMPLE, true, ExportFormat::Csv);
        assert_eq!(first, second);
    }

    #[test]
    fn test_quoted_message_row_stays_aligned() {
        let data =
            "Email,Valid,Exists,Message\na@x.com,false,false,\"Domain gone, no MX\"\nb@x.com,true,true,ok\n";
        let export = format_export(data, true, ExportFormat::Csv);
        // The quoted comma must not shift the exists column
        assert_eq!(export.content, "Email,Valid,Exists,Message\nb@x.com,true,true,ok");
    }

    #[test]
    fn test_crlf_input() {
        let data = "Email,Valid,Exists,Message\r\na@x.com,true,true,ok\r\n";
        let export = format_export(data, true, ExportFormat::Txt);
        assert_eq!(export.content, "a@x.com");
    }

    #[test]
    fn test_resolve_path_defaults_to_canonical_name() {
        let export = format_export(SAMPLE, false, ExportFormat::Txt);
        assert_eq!(
            export.resolve_path(None),
            PathBuf::from("email_addresses.txt")
        );
        assert_eq!(
            export.resolve_path(Some(Path::new("/tmp/out.txt"))),
            PathBuf::from("/tmp/out.txt")
        );
    }
}
