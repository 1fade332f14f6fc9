//! Contact form view

use folio_core::domain::contact::{ContactField, ContactSubmission};

use crate::service::ContactForm;

use super::{back_link, escape, layout};

/// Contact page showing the form's current fields and status
pub fn render(form: &ContactForm) -> String {
    let ContactSubmission {
        name,
        email,
        message,
    } = form.submission();

    let status = form
        .status()
        .message()
        .map(|text| format!("<p class=\"status\">{}</p>", escape(text)))
        .unwrap_or_default();

    let body = format!(
        "<div class=\"page\"><h2>Contact Me</h2>{}\
<form class=\"contact-form\" method=\"post\" action=\"/contact\">\
<label>Name: <br><input type=\"text\" name=\"{}\" value=\"{}\" required></label><hr>\
<label>Email: <br><input type=\"email\" name=\"{}\" value=\"{}\" required></label><hr>\
<label>Message: <br><textarea name=\"{}\" rows=\"5\" required>{}</textarea></label><hr>\
<button type=\"submit\" class=\"submit-button\">Send</button><hr>{}</form></div>",
        back_link(),
        ContactField::Name.as_str(),
        escape(name),
        ContactField::Email.as_str(),
        escape(email),
        ContactField::Message.as_str(),
        escape(message),
        status
    );
    layout("Contact Me", &body)
}
