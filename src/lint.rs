//! Offline email format checking.
//!
//! Applies the same format pattern the validation service uses, without any
//! network call. Useful for weeding out typos before spending a validation
//! run on them. Deliverability is never claimed: `exists` is always false
//! in lint reports.

use crate::error::{MailvetError, Result};
use crate::model::{ValidationOutcome, ValidationReport};
use indexmap::IndexMap;
use regex::Regex;
use std::sync::OnceLock;

/// The service's address format pattern.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("constant pattern compiles"))
}

/// Check whether an address matches the service's format pattern.
#[must_use]
pub fn is_valid_format(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Lint a list of addresses, producing a report renderable like any
/// validation run.
///
/// The list must be non-empty, matching the submission guard of the
/// online path.
pub fn lint(emails: &[String]) -> Result<ValidationReport> {
    if emails.is_empty() {
        return Err(MailvetError::validation(
            "at least one email address is required",
        ));
    }

    let mut results = IndexMap::new();
    for email in emails {
        let valid = is_valid_format(email);
        results.insert(
            email.clone(),
            ValidationOutcome {
                valid,
                exists: false,
                message: if valid {
                    String::new()
                } else {
                    "Invalid email format".to_string()
                },
            },
        );
    }

    Ok(ValidationReport {
        total: emails.len(),
        filtered: None,
        results,
        csv_data: String::new(),
    })
}
