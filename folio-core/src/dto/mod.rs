//! Data Transfer Objects for the view layer
//!
//! DTOs are render-ready projections of domain types. They carry the display
//! rules (labels, placeholders, colors) so views only format them.

pub mod project;
