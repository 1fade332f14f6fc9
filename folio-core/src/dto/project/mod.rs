//! Project card DTOs
//!
//! A [`ProjectCard`] is what the project list renders for one repository.

use serde::{Deserialize, Serialize};

use crate::domain::language;
use crate::domain::repository::RepositoryEntry;

/// Shown in place of a missing repository description
pub const NO_DESCRIPTION: &str = "No description available";

/// Colored language label on a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageBadge {
    pub label: String,
    pub color: String,
}

impl LanguageBadge {
    /// Build a badge from the raw provider label
    pub fn from_provider_label(raw: &str) -> Self {
        Self {
            label: language::display_label(raw).to_string(),
            color: language::color_for(raw).to_string(),
        }
    }
}

/// One rendered repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// `None` when the repository reports no language
    pub badge: Option<LanguageBadge>,
    pub stars: u64,
    pub forks: u64,
    pub url: String,
}

impl ProjectCard {
    /// Star count as displayed, e.g. `3 ⭐`
    pub fn stars_label(&self) -> String {
        format!("{} ⭐", self.stars)
    }

    /// Fork count as displayed, e.g. `1 🍴`
    pub fn forks_label(&self) -> String {
        format!("{} 🍴", self.forks)
    }
}

impl From<&RepositoryEntry> for ProjectCard {
    fn from(entry: &RepositoryEntry) -> Self {
        ProjectCard {
            id: entry.id,
            title: entry.name.clone(),
            description: non_empty(&entry.description)
                .unwrap_or(NO_DESCRIPTION)
                .to_string(),
            badge: non_empty(&entry.language).map(LanguageBadge::from_provider_label),
            stars: entry.stargazers_count,
            forks: entry.forks_count,
            url: entry.html_url.clone(),
        }
    }
}

/// Empty provider strings count as absent
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
