//! Folio HTTP Client
//!
//! A small, typed HTTP client for the two outbound calls the site makes: the
//! provider's public repository listing and the contact form endpoint.
//!
//! Both calls sit behind async traits ([`RepositorySource`] and
//! [`ContactSender`]) so views can be exercised without a network.
//!
//! # Example
//!
//! ```no_run
//! use folio_client::{Endpoints, FolioClient, RepositorySource};
//!
//! #[tokio::main]
//! async fn main() -> folio_client::Result<()> {
//!     let client = FolioClient::new(Endpoints {
//!         github_api_url: "https://api.github.com".to_string(),
//!         github_user: "Rohan-Bharatia".to_string(),
//!         contact_endpoint: "https://example.com/contact".to_string(),
//!     })?;
//!
//!     for repo in client.list_repositories().await? {
//!         println!("{} ({} stars)", repo.name, repo.stargazers_count);
//!     }
//!     Ok(())
//! }
//! ```

mod contact;
pub mod error;
mod repositories;

// Re-export commonly used types
pub use contact::ContactSender;
pub use error::{ClientError, Result};
pub use repositories::RepositorySource;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// User agent sent with every request; the provider API rejects requests
/// without one.
pub const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// Where the client sends its requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Provider API base URL (e.g., "https://api.github.com")
    pub github_api_url: String,
    /// Account whose public repositories are listed
    pub github_user: String,
    /// Full URL the contact form posts to
    pub contact_endpoint: String,
}

/// HTTP client for the provider API and the contact endpoint
#[derive(Debug, Clone)]
pub struct FolioClient {
    endpoints: Endpoints,
    /// HTTP client instance
    client: Client,
}

impl FolioClient {
    /// Create a new client with the default HTTP settings
    ///
    /// No request timeout is configured; requests resolve at the transport
    /// level.
    pub fn new(endpoints: Endpoints) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                ClientError::InvalidConfig(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self::with_client(endpoints, client))
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    /// The caller is responsible for setting a user agent.
    pub fn with_client(mut endpoints: Endpoints, client: Client) -> Self {
        endpoints.github_api_url = endpoints.github_api_url.trim_end_matches('/').to_string();
        Self { endpoints, client }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// URL of the repository listing for the configured account
    pub fn repositories_url(&self) -> String {
        format!(
            "{}/users/{}/repos",
            self.endpoints.github_api_url, self.endpoints.github_user
        )
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Check the status code and deserialize the JSON body
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Check the status code of a response whose body is ignored
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}
