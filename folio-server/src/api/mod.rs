//! API Module
//!
//! HTTP layer for the site.
//! Each submodule handles the routes of one view.

pub mod contact;
pub mod pages;
pub mod projects;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the router with every view and endpoint
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Views
        .route("/", get(pages::home))
        .route("/projects", get(projects::project_list))
        .route(
            "/contact",
            get(contact::contact_page).post(contact::submit_contact),
        )
        // Machine-readable endpoints
        .route("/health", get(pages::health_check))
        .route("/api/projects", get(projects::project_cards))
        .fallback(pages::not_found)
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}


#[cfg(test)]
mod e2e_tests;
