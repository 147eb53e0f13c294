//! Bulk command handler.
//!
//! Uploads an address file to the service's `/validate_bulk` endpoint.

use super::{build_client, render_report, report_exit_code, save_and_export, BulkConfig};
use anyhow::{bail, Context, Result};

/// Run the bulk command
pub fn run_bulk(config: BulkConfig) -> Result<i32> {
    if !config.input.exists() {
        bail!("input file not found: {}", config.input.display());
    }

    let client = build_client(&config.server)?;
    let report = client
        .validate_bulk(&config.input)
        .context("error occurred during bulk validation")?;

    tracing::debug!(
        "Bulk run: {} submitted, {} results",
        report.total,
        report.filtered.unwrap_or(report.results.len())
    );

    render_report(&report, &config.output)?;
    save_and_export(
        &report,
        config.save.as_deref(),
        config.export.as_ref(),
        config.output.quiet,
    )?;

    Ok(report_exit_code(&report))
}
