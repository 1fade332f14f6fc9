//! Server configuration
//!
//! Every setting can be given as a flag or an environment variable and
//! falls back to the defaults of the published site.

use clap::Parser;
use folio_client::Endpoints;
use std::net::SocketAddr;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_GITHUB_USER: &str = "Rohan-Bharatia";
pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://rohan-bharatia.github.io/Rohan-Bharatia/";
pub const DEFAULT_OWNER_NAME: &str = "Rohan";

/// Server configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "folio-server")]
#[command(about = "Personal portfolio site", long_about = None)]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "FOLIO_BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind_addr: SocketAddr,

    /// Provider API base URL
    #[arg(long, env = "FOLIO_GITHUB_API_URL", default_value = DEFAULT_GITHUB_API_URL)]
    pub github_api_url: String,

    /// Account whose public repositories are listed
    #[arg(long, env = "FOLIO_GITHUB_USER", default_value = DEFAULT_GITHUB_USER)]
    pub github_user: String,

    /// URL the contact form posts to
    #[arg(long, env = "FOLIO_CONTACT_ENDPOINT", default_value = DEFAULT_CONTACT_ENDPOINT)]
    pub contact_endpoint: String,

    /// Name shown in the home page heading
    #[arg(long, env = "FOLIO_OWNER_NAME", default_value = DEFAULT_OWNER_NAME)]
    pub owner_name: String,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        require_http_url("github_api_url", &self.github_api_url)?;
        require_http_url("contact_endpoint", &self.contact_endpoint)?;

        if self.github_user.trim().is_empty() {
            anyhow::bail!("github_user cannot be empty");
        }

        if self.github_user.contains('/') {
            anyhow::bail!("github_user must be a bare account name");
        }

        if self.owner_name.trim().is_empty() {
            anyhow::bail!("owner_name cannot be empty");
        }

        Ok(())
    }

    /// Outbound endpoints for the HTTP client
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            github_api_url: self.github_api_url.clone(),
            github_user: self.github_user.clone(),
            contact_endpoint: self.contact_endpoint.clone(),
        }
    }
}

fn require_http_url(name: &str, value: &str) -> anyhow::Result<()> {
    if value.is_empty() {
        anyhow::bail!("{} cannot be empty", name);
    }

    if !value.starts_with("http://") && !value.starts_with("https://") {
        anyhow::bail!("{} must start with http:// or https://", name);
    }

    Ok(())
}
