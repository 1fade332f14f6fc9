//! Service Module
//!
//! View-local state for the site's two interactive components.
//! A service value lives for one view activation and is dropped with it.

pub mod contact_form;
pub mod lister;

pub use contact_form::ContactForm;
pub use lister::{ListerState, RepositoryLister};
