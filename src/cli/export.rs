//! Export command handler.
//!
//! Formats a saved results CSV into a downloadable CSV/TXT payload.

use super::ExportConfig;
use crate::export::{format_export, write_export};
use crate::output::exit_codes;
use anyhow::{Context, Result};

/// Run the export command
pub fn run_export(config: ExportConfig) -> Result<i32> {
    let csv_data = std::fs::read_to_string(&config.results)
        .with_context(|| format!("reading results from {}", config.results.display()))?;

    let payload = format_export(
        &csv_data,
        config.options.only_existing,
        config.options.format,
    );
    let written =
        write_export(&payload, config.options.file.as_deref()).context("writing export payload")?;

    if !config.quiet {
        eprintln!("Exported {} ({})", written.display(), payload.mime_type);
    }

    Ok(exit_codes::SUCCESS)
}
