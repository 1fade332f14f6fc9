//! Shared application state
//!
//! Holds only immutable site settings and the outbound seams. Per-view state
//! (project lists, contact forms) is created inside each handler.

use folio_client::{ContactSender, RepositorySource};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Name shown in the home page heading
    pub owner_name: Arc<str>,
    pub repositories: Arc<dyn RepositorySource>,
    pub contact: Arc<dyn ContactSender>,
}

impl AppState {
    pub fn new(
        owner_name: impl Into<Arc<str>>,
        repositories: Arc<dyn RepositorySource>,
        contact: Arc<dyn ContactSender>,
    ) -> Self {
        Self {
            owner_name: owner_name.into(),
            repositories,
            contact,
        }
    }
}
