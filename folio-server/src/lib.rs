//! Folio Server
//!
//! Serves the portfolio site: a landing page, the project list fetched from
//! the provider API, and the contact form.
//!
//! Architecture:
//! - Configuration: flags and environment variables, validated at startup
//! - API: axum handlers, one module per view
//! - Services: view-local state (repository lister, contact form)
//! - Views: HTML rendering

pub mod api;
pub mod config;
pub mod service;
pub mod state;
pub mod view;

#[cfg(test)]
mod testing;
