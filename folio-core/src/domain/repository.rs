//! Repository domain types

use serde::{Deserialize, Serialize};

/// A public repository as reported by the provider API
///
/// Read-only projection of one element of the provider's response. Fields the
/// site does not render are ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryEntry {
    /// Provider identifier, unique per repository
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    /// Primary language label exactly as the provider spells it
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub html_url: String,
}
