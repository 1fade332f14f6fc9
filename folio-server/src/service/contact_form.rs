//! Contact Form Handler
//!
//! Collects the three contact fields, validates them, and sends them once
//! per submit.

use folio_client::ContactSender;
use folio_core::domain::contact::{
    ContactField, ContactSubmission, SendFailure, SubmissionStatus,
};

/// Contact form state for one view
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    submission: ContactSubmission,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite one field; never validates
    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.submission.set(field, value);
    }

    pub fn submission(&self) -> &ContactSubmission {
        &self.submission
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Validate and send the current fields
    ///
    /// A validation failure returns before any request is made. On delivery
    /// the fields are cleared; on any failure they are kept for correction.
    pub async fn submit(&mut self, sender: &dyn ContactSender) -> SubmissionStatus {
        if let Err(err) = self.submission.validate() {
            tracing::debug!("Contact submission rejected: {}", err);
            self.status = SubmissionStatus::ValidationFailed(err);
            return self.status;
        }

        self.status = match sender.send_contact(&self.submission).await {
            Ok(()) => {
                tracing::info!("Contact message sent");
                self.submission.clear();
                SubmissionStatus::SendSucceeded
            }
            Err(e) if e.is_transport() => {
                tracing::warn!("Contact message could not be delivered: {}", e);
                SubmissionStatus::SendFailed(SendFailure::Transport)
            }
            Err(e) => {
                tracing::warn!("Contact endpoint rejected message: {}", e);
                SubmissionStatus::SendFailed(SendFailure::Rejected)
            }
        };

        self.status
    }
}
