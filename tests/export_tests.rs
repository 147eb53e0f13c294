//! Integration tests for the export formatter.
//!
//! These exercise the documented export contract: header handling, the
//! exists-column filter predicate, TXT extraction, and purity.

use mailvet::export::{format_export, ExportFormat};

const HEADER: &str = "Email,Valid,Exists,Message";

fn table(rows: &[&str]) -> String {
    let mut blob = String::from(HEADER);
    for row in rows {
        blob.push('\n');
        blob.push_str(row);
    }
    blob.push('\n');
    blob
}

// ============================================================================
// CSV format
// ============================================================================

mod csv_format {
    use super::*;

    #[test]
    fn header_is_always_included_verbatim() {
        let blob = table(&["a@x.com,true,false,no"]);
        for filter in [false, true] {
            let export = format_export(&blob, filter, ExportFormat::Csv);
            assert!(
                export.content.starts_with(HEADER),
                "header missing for filter={filter}: {}",
                export.content
            );
        }
    }

    #[test]
    fn unfiltered_returns_all_rows_in_order() {
        let rows = [
            "a@x.com,true,true,ok",
            "b@x.com,true,false,no-mx",
            "c@x.com,false,false,bad format",
        ];
        let export = format_export(&table(&rows), false, ExportFormat::Csv);
        let expected = format!("{HEADER}\n{}", rows.join("\n"));
        assert_eq!(export.content, expected);
    }

    #[test]
    fn filtered_keeps_only_trimmed_true_rows() {
        let rows = [
            "a@x.com,true,true,ok",
            "b@x.com,true,false,no-mx",
            "c@x.com,true, true ,spaced flag",
            "d@x.com,true,TRUE,case matters",
        ];
        let export = format_export(&table(&rows), true, ExportFormat::Csv);
        // " true " trims to "true"; "TRUE" does not equal the literal
        assert_eq!(
            export.content,
            format!("{HEADER}\na@x.com,true,true,ok\nc@x.com,true, true ,spaced flag")
        );
    }

    #[test]
    fn blank_rows_are_discarded() {
        let blob = format!("{HEADER}\n\na@x.com,true,true,ok\n   \n\n");
        let export = format_export(&blob, false, ExportFormat::Csv);
        assert_eq!(export.content, format!("{HEADER}\na@x.com,true,true,ok"));
    }

    #[test]
    fn filtered_payload_carries_csv_metadata() {
        let blob = table(&["a@x.com,true,true,ok", "b@x.com,true,false,no-mx"]);
        let export = format_export(&blob, true, ExportFormat::Csv);
        assert_eq!(export.content, format!("{HEADER}\na@x.com,true,true,ok"));
        assert_eq!(export.mime_type, "text/csv");
        assert_eq!(export.file_name, "validation_results.csv");
    }
}

// ============================================================================
// TXT format
// ============================================================================

mod txt_format {
    use super::*;

    #[test]
    fn filtered_payload_carries_txt_metadata() {
        let blob = table(&["a@x.com,true,true,ok", "b@x.com,true,false,no-mx"]);
        let export = format_export(&blob, true, ExportFormat::Txt);
        assert_eq!(export.content, "a@x.com");
        assert_eq!(export.mime_type, "text/plain");
        assert_eq!(export.file_name, "email_addresses.txt");
    }

    #[test]
    fn no_header_in_txt_output() {
        let blob = table(&["a@x.com,true,true,ok"]);
        let export = format_export(&blob, false, ExportFormat::Txt);
        assert_eq!(export.content, "a@x.com");
    }

    #[test]
    fn unfiltered_lists_every_email() {
        let blob = table(&[
            "a@x.com,true,true,ok",
            "b@x.com,false,false,bad",
            "c@x.com,true,false,no-mx",
        ]);
        let export = format_export(&blob, false, ExportFormat::Txt);
        assert_eq!(export.content, "a@x.com\nb@x.com\nc@x.com");
    }

    #[test]
    fn filter_is_row_aligned_not_prefix_matched() {
        // "a@x.com" is a prefix of "a@x.com.evil"; each row must be judged
        // by its own exists column.
        let blob = table(&[
            "a@x.com,true,false,no",
            "a@x.com.evil,true,true,ok",
        ]);
        let export = format_export(&blob, true, ExportFormat::Txt);
        assert_eq!(export.content, "a@x.com.evil");
    }

    #[test]
    fn duplicate_addresses_keep_per_row_flags() {
        let blob = table(&["dup@x.com,true,true,ok", "dup@x.com,true,false,flaky"]);
        let export = format_export(&blob, true, ExportFormat::Txt);
        assert_eq!(export.content, "dup@x.com");
    }
}

// ============================================================================
// Cross-format properties
// ============================================================================

#[test]
fn header_only_table() {
    let blob = format!("{HEADER}\n");
    assert_eq!(
        format_export(&blob, true, ExportFormat::Csv).content,
        HEADER
    );
    assert_eq!(format_export(&blob, false, ExportFormat::Txt).content, "");
}

#[test]
fn idempotent_for_identical_inputs() {
    let blob = table(&["a@x.com,true,true,ok", "b@x.com,true,false,no-mx"]);
    for format in [ExportFormat::Csv, ExportFormat::Txt] {
        for filter in [false, true] {
            let first = format_export(&blob, filter, format);
            let second = format_export(&blob, filter, format);
            assert_eq!(first, second, "format={format} filter={filter}");
        }
    }
}

#[test]
fn crlf_rows_filter_correctly() {
    // /validate responses carry CRLF line endings
    let blob = format!("{HEADER}\r\na@x.com,true,true,ok\r\nb@x.com,true,false,no\r\n");
    let txt = format_export(&blob, true, ExportFormat::Txt);
    assert_eq!(txt.content, "a@x.com");

    let csv = format_export(&blob, true, ExportFormat::Csv);
    // CSV output keeps the original row text, trailing \r included
    assert_eq!(csv.content, format!("{HEADER}\r\na@x.com,true,true,ok\r"));
}

#[test]
fn quoted_comma_fields_stay_column_aligned() {
    let blob = table(&[
        "a@x.com,false,false,\"Domain does not exist, or has no MX records\"",
        "b@x.com,true,true,Email exists",
    ]);
    let export = format_export(&blob, true, ExportFormat::Txt);
    assert_eq!(export.content, "b@x.com");
}
