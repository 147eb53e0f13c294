//! Output handling for rendered reports.
//!
//! Provides utilities for writing reports to stdout or a file, color
//! gating, and the process exit codes shared by the CLI handlers.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Process exit codes.
pub mod exit_codes {
    /// Every address passed both checks
    pub const SUCCESS: i32 = 0;
    /// At least one address is invalid or does not exist
    pub const FAILURES: i32 = 1;
    /// Operational error (network, IO, bad input)
    pub const ERROR: i32 = 3;
}

/// Target for output - either stdout or a file
#[derive(Debug, Clone)]
pub enum OutputTarget {
    /// Write to stdout
    Stdout,
    /// Write to a file
    File(PathBuf),
}

impl OutputTarget {
    /// Create output target from optional path
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => OutputTarget::File(p),
            None => OutputTarget::Stdout,
        }
    }
}

/// Determine if color should be used based on flags and environment
#[must_use]
pub fn should_use_color(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var("NO_COLOR").is_err()
}

/// Write output to the target (stdout or file)
pub fn write_output(content: &str, target: &OutputTarget, quiet: bool) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            println!("{content}");
            Ok(())
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write output to {path:?}"))?;
            if !quiet {
                tracing::info!("Report written to {path:?}");
            }
            Ok(())
        }
    }
}
