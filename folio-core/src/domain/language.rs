//! Language badge colors
//!
//! Read-only lookup from a provider language label to the badge background
//! color. Labels outside the table fall back to [`DEFAULT_COLOR`].

/// Badge color for languages missing from the table
pub const DEFAULT_COLOR: &str = "#6a737d";

/// Provider token for C++; rendered as [`CPP_DISPLAY_LABEL`]
pub const CPP_PROVIDER_TOKEN: &str = "Cpp";

pub const CPP_DISPLAY_LABEL: &str = "C++";

const LANGUAGE_COLORS: [(&str, &str); 17] = [
    ("JavaScript", "#f1e05a"),
    ("Python", "#306998"),
    ("C", "#555555"),
    ("Cpp", "#f34b7d"),
    ("Java", "#b07219"),
    ("HTML", "#e34c26"),
    ("CSS", "#563d7c"),
    ("Assembly", "#6E4C13"),
    ("Lua", "#000080"),
    ("Ruby", "#701516"),
    ("Go", "#00ADD8"),
    ("TypeScript", "#2b7489"),
    ("Rust", "#000000"),
    ("Swift", "#ffac45"),
    ("PHP", "#4F5D95"),
    ("Kotlin", "#F18E33"),
    ("Dart", "#00B4AB"),
];

/// Look up the badge color for a raw provider label
///
/// Matching is exact and case-sensitive, like the provider's own labels.
pub fn color_for(language: &str) -> &'static str {
    LANGUAGE_COLORS
        .iter()
        .find(|(label, _)| *label == language)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_COLOR)
}

/// Map a raw provider label to the label shown to visitors
pub fn display_label(language: &str) -> &str {
    if language == CPP_PROVIDER_TOKEN {
        CPP_DISPLAY_LABEL
    } else {
        language
    }
}
