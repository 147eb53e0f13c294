//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by
//! main.rs. Each handler implements the business logic for a specific CLI
//! subcommand and returns the process exit code.

mod bulk;
mod check;
mod export;
mod lint;

pub use bulk::run_bulk;
pub use check::run_check;
pub use export::run_export;
pub use lint::run_lint;

// Re-export config types used by handlers
pub use crate::config::{BulkConfig, CheckConfig, ExportConfig, LintConfig};

use crate::config::{ExportOptions, OutputConfig, ServerConfig};
use crate::export::{format_export, write_export};
use crate::model::ValidationReport;
use crate::output::{exit_codes, should_use_color, write_output, OutputTarget};
use crate::reports::create_reporter;
use anyhow::{Context, Result};
use std::io::{BufRead, IsTerminal};

/// Build a validator client from server settings.
fn build_client(server: &ServerConfig) -> Result<crate::client::ValidatorClient> {
    let config = crate::client::ValidatorClientConfig {
        base_url: server.base_url.trim_end_matches('/').to_string(),
        timeout: std::time::Duration::from_secs(server.timeout_secs),
    };
    crate::client::ValidatorClient::new(config).context("initializing HTTP client")
}

/// Render a report and write it to the configured target.
fn render_report(report: &ValidationReport, output: &OutputConfig) -> Result<()> {
    let reporter = create_reporter(output.format, should_use_color(output.no_color));
    let content = reporter
        .generate(report)
        .context("rendering validation report")?;
    let target = OutputTarget::from_option(output.file.clone());
    write_output(&content, &target, output.quiet)
}

/// Post-render steps shared by `check` and `bulk`: persist the service CSV
/// and run the optional export.
fn save_and_export(
    report: &ValidationReport,
    save: Option<&std::path::Path>,
    export: Option<&ExportOptions>,
    quiet: bool,
) -> Result<()> {
    if let Some(path) = save {
        // Overwrite, never merge: each run replaces the previous results
        std::fs::write(path, &report.csv_data)
            .with_context(|| format!("saving results to {}", path.display()))?;
        if !quiet {
            tracing::info!("Results saved to {}", path.display());
        }
    }

    if let Some(options) = export {
        let payload = format_export(&report.csv_data, options.only_existing, options.format);
        let written =
            write_export(&payload, options.file.as_deref()).context("writing export payload")?;
        if !quiet {
            eprintln!("Exported {} ({})", written.display(), payload.mime_type);
        }
    }

    Ok(())
}

/// Exit code for a completed validation run.
fn report_exit_code(report: &ValidationReport) -> i32 {
    if report.has_failures() {
        exit_codes::FAILURES
    } else {
        exit_codes::SUCCESS
    }
}

/// Collect addresses from arguments, or from stdin when none are given
/// and stdin is piped. Blank entries are dropped, matching the submission
/// form's newline-split-and-filter behavior.
fn collect_emails(args: &[String]) -> Result<Vec<String>> {
    let raw: Vec<String> = if args.is_empty() && !std::io::stdin().is_terminal() {
        std::io::stdin()
            .lock()
            .lines()
            .collect::<std::io::Result<_>>()
            .context("reading addresses from stdin")?
    } else {
        args.to_vec()
    };

    Ok(raw
        .iter()
        .map(|e| e.trim())
        .filter(|e| !e.is_empty())
        .map(String::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_emails_trims_and_filters() {
        let args = vec![
            " a@x.com ".to_string(),
            String::new(),
            "  ".to_string(),
            "b@x.com".to_string(),
        ];
        let emails = collect_emails(&args).unwrap();
        assert_eq!(emails, vec!["a@x.com", "b@x.com"]);
    }

    #[test]
    fn test_report_exit_codes() {
        let report = ValidationReport::default();
        assert_eq!(report_exit_code(&report), exit_codes::SUCCESS);
    }
}
