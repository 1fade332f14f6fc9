//! Static pages and health check

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};

use crate::state::AppState;
use crate::view;

/// GET /
pub async fn home(State(state): State<AppState>) -> Html<String> {
    Html(view::home::render(&state.owner_name))
}

/// GET /health
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Fallback for every unrouted address
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(view::not_found()))
}
