//! Check command handler.
//!
//! Validates a list of addresses via the service's `/validate` endpoint.

use super::{
    build_client, collect_emails, render_report, report_exit_code, save_and_export, CheckConfig,
};
use anyhow::{bail, Context, Result};

/// Run the check command
pub fn run_check(config: CheckConfig) -> Result<i32> {
    let emails = collect_emails(&config.emails)?;
    if emails.is_empty() {
        bail!("no email addresses supplied - pass them as arguments or on stdin");
    }

    let client = build_client(&config.server)?;
    let report = client
        .validate(&emails)
        .context("error occurred during validation")?;

    tracing::debug!(
        "Validated {} addresses: {} valid, {} existing",
        report.total,
        report.valid_count(),
        report.existing_count()
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

