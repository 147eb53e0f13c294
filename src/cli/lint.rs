//! Lint command handler.
//!
//! Offline format check; no service round-trip.

use super::{collect_emails, render_report, LintConfig};
use crate::lint::lint;
use crate::output::exit_codes;
use anyhow::{bail, Context, Result};

/// Run the lint command
pub fn run_lint(config: LintConfig) -> Result<i32> {
    let emails = collect_emails(&config.emails)?;
    if emails.is_empty() {
        bail!("no email addresses supplied - pass them as arguments or on stdin");
    }

    let report = lint(&emails).context("linting addresses")?;

    render_report(&report, &config.output)?;

    if report.results.values().any(|r| !r.valid) {
        Ok(exit_codes::FAILURES)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}
