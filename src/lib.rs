//! **Client and export toolkit for the mailvet email validation service.**
//!
//! `mailvet` talks to a validation service that checks email addresses for
//! format validity and deliverability, renders the returned results for the
//! terminal, and exports them as filtered CSV or TXT payloads. It powers
//! both a command-line interface and a Rust library for programmatic use.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The central data structures. A validation run produces a
//!   [`ValidationReport`]: one [`ValidationOutcome`] per address plus the
//!   service's CSV rendering of the whole table.
//! - **[`client`]**: Blocking HTTP client for the service's `/validate` and
//!   `/validate_bulk` endpoints.
//! - **[`export`]**: The export formatter - a pure function turning a
//!   results CSV into a downloadable CSV or TXT payload, optionally
//!   filtered to addresses flagged as existing.
//! - **[`reports`]**: Renderers for summary, table, JSON, and CSV terminal
//!   output.
//! - **[`lint`]**: Offline format checking with the service's own pattern.
//!
//! ## Getting Started: Exporting Saved Results
//!
//! ```
//! use mailvet::export::{format_export, ExportFormat};
//!
//! let csv = "Email,Valid,Exists,Message\na@x.com,true,true,ok\nb@x.com,true,false,no-mx\n";
//!
//! let payload = format_export(csv, true, ExportFormat::Txt);
//! assert_eq!(payload.content, "a@x.com");
//! assert_eq!(payload.file_name, "email_addresses.txt");
//! ```
//!
//! ## Validating Addresses
//!
//! ```no_run
//! use mailvet::client::{ValidatorClient, ValidatorClientConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ValidatorClient::new(ValidatorClientConfig::default())?;
//!     let report = client.validate(&["someone@example.com".to_string()])?;
//!
//!     for (email, outcome) in &report.results {
//!         println!("{email}: {}", outcome.message);
//!     }
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod lint;
pub mod model;
pub mod output;
pub mod reports;

// Re-export main types for convenience
pub use client::{ValidatorClient, ValidatorClientConfig};
pub use config::{AppConfig, OutputConfig, ServerConfig};
pub use error::{ErrorContext, MailvetError, Result};
pub use export::{format_export, write_export, Export, ExportFormat};
pub use model::{ResultsTable, ValidationOutcome, ValidationReport};
pub use reports::{create_reporter, ReportFormat, ReportGenerator};
