//! Contact form handlers

use axum::{Form, extract::State, response::Html};
use folio_core::domain::contact::{ContactField, ContactSubmission};

use crate::service::ContactForm;
use crate::state::AppState;
use crate::view;

/// GET /contact
/// Empty form
pub async fn contact_page() -> Html<String> {
    Html(view::contact::render(&ContactForm::new()))
}

/// POST /contact
/// Apply the posted fields, submit once, and re-render with the status
pub async fn submit_contact(
    State(state): State<AppState>,
    Form(input): Form<ContactSubmission>,
) -> Html<String> {
    let mut form = ContactForm::new();
    for field in ContactField::ALL {
        form.update_field(field, input.get(field));
    }

    let status = form.submit(state.contact.as_ref()).await;
    tracing::debug!("Contact submit finished: {:?}", status);

    Html(view::contact::render(&form))
}
