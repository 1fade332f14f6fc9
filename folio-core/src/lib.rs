//! Folio Core
//!
//! Core types for the Folio portfolio site.
//!
//! This crate contains:
//! - Domain types: repository records, contact submissions, language badges
//! - DTOs: render-ready projections handed to the view layer

pub mod domain;
pub mod dto;
