//! HTTP client for the validation service.
//!
//! The service exposes two endpoints, both multipart form POSTs:
//! `/validate` takes a JSON-encoded array of addresses in the `emails`
//! field; `/validate_bulk` takes an uploaded `.csv`/`.txt` file in the
//! `file` field. Each call is a single attempt with a configured timeout;
//! failures surface as one terminal error per operation.

use crate::error::{ClientErrorKind, MailvetError, Result};
use crate::model::ValidationReport;
use reqwest::blocking::multipart::Form;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Validation service client configuration.
#[derive(Debug, Clone)]
pub struct ValidatorClientConfig {
    /// Base URL of the validation service
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for ValidatorClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Error payload the service returns on 4xx responses.
#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    error: String,
}

/// HTTP client for the validation service.
pub struct ValidatorClient {
    client: Client,
    config: ValidatorClientConfig,
}

/// Helper to convert reqwest errors to client errors
fn network_error(msg: &str, err: &reqwest::Error) -> MailvetError {
    MailvetError::client(msg, ClientErrorKind::NetworkError(err.to_string()))
}

impl ValidatorClient {
    /// Create a new client against the configured service.
    pub fn new(config: ValidatorClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| network_error("Failed to create HTTP client", &e))?;

        Ok(Self { client, config })
    }

    /// Validate a list of email addresses via `POST /validate`.
    ///
    /// The list must be non-empty; an empty list is rejected client-side
    /// before any request is made.
    pub fn validate(&self, emails: &[String]) -> Result<ValidationReport> {
        if emails.is_empty() {
            return Err(MailvetError::validation(
                "at least one email address is required",
            ));
        }

        let url = format!("{}/validate", self.config.base_url);
        let payload = serde_json::to_string(emails)?;
        let form = Form::new().text("emails", payload);

        tracing::debug!("Submitting {} addresses to {}", emails.len(), url);
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .map_err(|e| network_error("Failed to send validation request", &e))?;

        parse_report(response)
    }

    /// Validate addresses from a file via `POST /validate_bulk`.
    ///
    /// Only `.csv` and `.txt` files are accepted; the guard mirrors the
    /// service's own check so unsupported files never leave the client.
    pub fn validate_bulk(&self, path: &Path) -> Result<ValidationReport> {
        if !has_supported_extension(path) {
            return Err(MailvetError::client(
                "preparing bulk upload",
                ClientErrorKind::UnsupportedFile(path.display().to_string()),
            ));
        }

        let url = format!("{}/validate_bulk", self.config.base_url);
        let form = Form::new()
            .file("file", path)
            .map_err(|e| MailvetError::io(path, e))?;

        tracing::debug!("Uploading {} to {}", path.display(), url);
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .map_err(|e| network_error("Failed to send bulk validation request", &e))?;

        parse_report(response)
    }
}

/// Turn a service response into a report, mapping non-2xx statuses and
/// malformed bodies to client errors.
fn parse_report(response: reqwest::blocking::Response) -> Result<ValidationReport> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        // 4xx bodies carry {"error": "..."}; fall back to the raw text
        let message = serde_json::from_str::<ServiceErrorBody>(&body)
            .map_or(body, |e| e.error);
        return Err(MailvetError::client(
            "validation request",
            ClientErrorKind::ServiceError {
                status: status.as_u16(),
                body: message,
            },
        ));
    }

    response.json().map_err(|e| {
        MailvetError::client(
            "parsing response",
            ClientErrorKind::InvalidResponse(e.to_string()),
        )
    })
}

/// Check whether a path carries a supported upload extension.
fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| {
            let lower = e.to_lowercase();
            lower == "csv" || lower == "txt"
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_defaults() {
        let config = ValidatorClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_supported_extensions() {
        assert!(has_supported_extension(Path::new("emails.csv")));
        assert!(has_supported_extension(Path::new("emails.TXT")));
        assert!(!has_supported_extension(Path::new("emails.xlsx")));
        assert!(!has_supported_extension(Path::new("emails")));
    }

    #[test]
    fn test_empty_list_rejected_before_request() {
        let client = ValidatorClient::new(ValidatorClientConfig::default()).unwrap();
        let err = client.validate(&[]).unwrap_err();
        assert!(matches!(err, MailvetError::Validation(_)));
    }

    #[test]
    fn test_unsupported_file_rejected_before_request() {
        let client = ValidatorClient::new(ValidatorClientConfig::default()).unwrap();
        let err = client.validate_bulk(Path::new("emails.pdf")).unwrap_err();
        assert!(matches!(
            err,
            MailvetError::Client {
                source: ClientErrorKind::UnsupportedFile(_),
                ..
            }
        ));
    }

    #[test]
    fn test_service_error_body_parsing() {
        let body: ServiceErrorBody =
            serde_json::from_str(r#"{"error": "Email addresses are required"}"#).unwrap();
        assert_eq!(body.error, "Email addresses are required");
    }
}
