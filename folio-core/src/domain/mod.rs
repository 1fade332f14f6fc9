//! Core domain types
//!
//! These types describe the data the site works with. Repository records are
//! owned by the provider and only read here; contact submissions are created
//! by the visitor and live for a single form session.

pub mod contact;
pub mod language;
pub mod repository;
