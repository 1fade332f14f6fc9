//! HTML views
//!
//! Pages are rendered as plain strings. Every value that comes from the
//! provider or from a visitor goes through [`escape`].

pub mod contact;
pub mod home;
pub mod projects;

/// Escape text for use in HTML element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap a page body in the shared document shell
pub fn layout(title: &str, body: &str) -> String {
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{}</title></head><body>{}</body></html>",
        escape(title),
        body
    )
}

pub(crate) fn back_link() -> &'static str {
    "<a class=\"back-button\" href=\"/\"><b>&lt;</b> Back to Home</a>"
}

/// Fallback view for unknown addresses
pub fn not_found() -> String {
    layout(
        "Page Not Found",
        "<div class=\"page\"><h2>404: Page Not Found</h2>\
<a href=\"/\" class=\"button\">Go to Home</a></div>",
    )
}
