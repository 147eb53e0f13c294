//! Configuration types for mailvet operations.
//!
//! Provides the app-level YAML configuration plus the per-command config
//! structs handed to the CLI handlers.

mod file;

pub use file::{discover_config_file, generate_example_config, load_config_file, load_or_default, ConfigFileError};

use crate::export::ExportFormat;
use crate::reports::ReportFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// App-level configuration (loadable from YAML)
// ============================================================================

/// Top-level application configuration.
///
/// Loaded from a config file when one is discovered; CLI flags override
/// individual fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Validation service connection settings
    pub server: ServerConfig,
    /// Default output settings
    pub output: OutputDefaults,
}

/// Validation service connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the validation service
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Default output settings, overridable per invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputDefaults {
    /// Default report format
    pub format: ReportFormat,
    /// Disable colored output
    pub no_color: bool,
}

// ============================================================================
// Per-command configuration (built from CLI args + AppConfig)
// ============================================================================

/// Output settings for a single invocation.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Report format
    pub format: ReportFormat,
    /// Output file (stdout if not specified)
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

/// Export options attached to a validation run or export command.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Export payload format
    pub format: ExportFormat,
    /// Restrict output to rows flagged as existing
    pub only_existing: bool,
    /// Target file (format's canonical file name if not specified)
    pub file: Option<PathBuf>,
}

/// Configuration for the `check` command.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Addresses to validate
    pub emails: Vec<String>,
    /// Service connection
    pub server: ServerConfig,
    /// Output settings
    pub output: OutputConfig,
    /// Persist the service's results CSV to this path
    pub save: Option<PathBuf>,
    /// Export the results after rendering
    pub export: Option<ExportOptions>,
}

/// Configuration for the `bulk` command.
#[derive(Debug, Clone)]
pub struct BulkConfig {
    /// File of addresses to upload (.csv or .txt)
    pub input: PathBuf,
    /// Service connection
    pub server: ServerConfig,
    /// Output settings
    pub output: OutputConfig,
    /// Persist the service's results CSV to this path
    pub save: Option<PathBuf>,
    /// Export the results after rendering
    pub export: Option<ExportOptions>,
}

/// Configuration for the `export` command.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Saved results CSV to export from
    pub results: PathBuf,
    /// Export options
    pub options: ExportOptions,
    /// Suppress non-essential output
    pub quiet: bool,
}

/// Configuration for the `lint` command.
#[derive(Debug, Clone)]
pub struct LintConfig {
    /// Addresses to check
    pub emails: Vec<String>,
    /// Output settings
    pub output: OutputConfig,
}
