//! Repository Lister
//!
//! Loads the account's repositories for the project list view.
//!
//! Each `load` takes a new generation number; a response is applied only if
//! no newer load or reset happened while it was in flight.

use folio_client::RepositorySource;
use folio_core::domain::repository::RepositoryEntry;
use folio_core::dto::project::ProjectCard;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Load state of a project list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListerState {
    #[default]
    NotLoaded,
    Loading,
    Loaded(Vec<RepositoryEntry>),
    /// The fetch failed; the view shows an empty list
    EmptyOnError,
}

impl ListerState {
    /// Entries to display; empty unless loaded
    pub fn entries(&self) -> &[RepositoryEntry] {
        match self {
            ListerState::Loaded(entries) => entries,
            _ => &[],
        }
    }

    pub fn cards(&self) -> Vec<ProjectCard> {
        self.entries().iter().map(ProjectCard::from).collect()
    }
}

#[derive(Debug, Default)]
struct Inner {
    generation: u64,
    state: ListerState,
}

/// Project list state for one view
pub struct RepositoryLister {
    source: Arc<dyn RepositorySource>,
    inner: Mutex<Inner>,
}

impl RepositoryLister {
    pub fn new(source: Arc<dyn RepositorySource>) -> Self {
        Self {
            source,
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Current state snapshot
    pub async fn state(&self) -> ListerState {
        self.inner.lock().await.state.clone()
    }

    /// Fetch the repositories and replace the displayed list
    ///
    /// Issues exactly one request. Any failure leaves the list empty and is
    /// logged. Returns the state after this load, which is the newer state
    /// if this response arrived stale.
    pub async fn load(&self) -> ListerState {
        let generation = {
            let mut inner = self.inner.lock().await;
            inner.generation += 1;
            inner.state = ListerState::Loading;
            inner.generation
        };

        let next = match self.source.list_repositories().await {
            Ok(entries) => {
                tracing::debug!("Loaded {} repositories", entries.len());
                ListerState::Loaded(entries)
            }
            Err(e) => {
                tracing::error!("Error fetching repositories: {}", e);
                ListerState::EmptyOnError
            }
        };

        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            tracing::debug!(
                "Discarding stale repository response (generation {}, current {})",
                generation,
                inner.generation
            );
            return inner.state.clone();
        }

        inner.state = next;
        inner.state.clone()
    }

    /// Return to `NotLoaded`; responses still in flight are discarded
    pub async fn reset(&self) {
        let mut inner = self.inner.lock().await;
        inner.generation += 1;
        inner.state = ListerState::NotLoaded;
    }
}
