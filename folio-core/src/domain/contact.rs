//! Contact form domain types
//!
//! A [`ContactSubmission`] is what the visitor typed; a [`SubmissionStatus`]
//! is the outcome of the last attempt to send it.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

/// Message fields entered by a visitor
///
/// Serializes to the `{name, email, message}` payload sent to the contact
/// endpoint. Missing form fields deserialize as empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Overwrite one field
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Check the submission before anything is sent
    ///
    /// Empty fields are reported before a malformed email.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if ContactField::ALL.iter().any(|field| self.get(*field).is_empty()) {
            return Err(ValidationError::MissingFields);
        }

        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// One field of a [`ContactSubmission`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [Self::Name, Self::Email, Self::Message];

    /// Form field name
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

const MISSING_FIELDS: &str = "All fields are required";
const INVALID_EMAIL: &str = "Invalid email format";

/// Local validation failure; the display text is shown to the visitor as is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", MISSING_FIELDS)]
    MissingFields,

    #[error("{}", INVALID_EMAIL)]
    InvalidEmail,
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::MissingFields => MISSING_FIELDS,
            ValidationError::InvalidEmail => INVALID_EMAIL,
        }
    }
}

/// Why a validated submission could not be delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendFailure {
    /// The endpoint answered with a non-2xx status
    Rejected,
    /// No response was received
    Transport,
}

/// Outcome of the last submit attempt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Unset,
    ValidationFailed(ValidationError),
    SendFailed(SendFailure),
    SendSucceeded,
}

impl SubmissionStatus {
    /// Status text shown under the form, if any
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Unset => None,
            SubmissionStatus::ValidationFailed(err) => Some(err.message()),
            SubmissionStatus::SendFailed(SendFailure::Rejected) => Some("Failed to send message."),
            SubmissionStatus::SendFailed(SendFailure::Transport) => {
                Some("An error occurred. Please try again.")
            }
            SubmissionStatus::SendSucceeded => Some("Message sent successfully!"),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionStatus::SendSucceeded)
    }
}

/// Whitespace as browsers define it for form validation: ASCII space and
/// controls, the Unicode space separators, and U+FEFF. U+0085 is not included.
const SPACE: &str = r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// `^[^\s@]+@[^\s@]+\.[^\s@]+$` with the whitespace class spelled out
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    let run = format!("[^@{}]+", SPACE);
    Regex::new(&format!(r"^{run}@{run}\.{run}$")).expect("email pattern is valid")
});

/// Basic `local@domain.tld` shape check
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}
