//! Project list handlers
//!
//! Each request is one activation: a fresh lister is loaded once and
//! dropped with the response.

use axum::{Json, extract::State, response::Html};
use folio_core::dto::project::ProjectCard;
use std::sync::Arc;

use crate::service::RepositoryLister;
use crate::state::AppState;
use crate::view;

async fn load_cards(state: &AppState) -> Vec<ProjectCard> {
    let lister = RepositoryLister::new(Arc::clone(&state.repositories));
    lister.load().await.cards()
}

/// GET /projects
pub async fn project_list(State(state): State<AppState>) -> Html<String> {
    let cards = load_cards(&state).await;
    tracing::debug!("Rendering {} project cards", cards.len());
    Html(view::projects::render(&cards))
}

/// GET /api/projects
/// Same cards as the project list, as JSON
pub async fn project_cards(State(state): State<AppState>) -> Json<Vec<ProjectCard>> {
    Json(load_cards(&state).await)
}
