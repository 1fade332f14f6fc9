//! Contact endpoint

use async_trait::async_trait;
use folio_core::domain::contact::ContactSubmission;

use crate::FolioClient;
use crate::error::Result;

/// Delivers a validated contact submission
#[async_trait]
pub trait ContactSender: Send + Sync {
    /// Post the submission as JSON; any 2xx status counts as delivered
    async fn send_contact(&self, submission: &ContactSubmission) -> Result<()>;
}

#[async_trait]
impl ContactSender for FolioClient {
    async fn send_contact(&self, submission: &ContactSubmission) -> Result<()> {
        let url = &self.endpoints.contact_endpoint;
        tracing::debug!("Posting contact message to {}", url);

        let response = self.client.post(url).json(submission).send().await?;

        self.handle_empty_response(response).await
    }
}
