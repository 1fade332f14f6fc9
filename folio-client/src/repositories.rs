//! Repository listing endpoint

use async_trait::async_trait;
use folio_core::domain::repository::RepositoryEntry;

use crate::FolioClient;
use crate::error::Result;

/// Source of the repositories shown on the project list
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// Fetch the account's public repositories in provider order
    ///
    /// Only the provider's first page is returned.
    async fn list_repositories(&self) -> Result<Vec<RepositoryEntry>>;
}

#[async_trait]
impl RepositorySource for FolioClient {
    async fn list_repositories(&self) -> Result<Vec<RepositoryEntry>> {
        let url = self.repositories_url();
        tracing::debug!("Fetching repositories from {}", url);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        let entries: Vec<RepositoryEntry> = self.handle_response(response).await?;
        tracing::debug!("Fetched {} repositories", entries.len());

        Ok(entries)
    }
}
