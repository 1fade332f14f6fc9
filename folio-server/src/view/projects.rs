//! Project list view

use folio_core::dto::project::{LanguageBadge, ProjectCard};

use super::{back_link, escape, layout};

const EMPTY_LIST: &str = "No projects to show.";

/// Project list page; an empty slice renders the empty-list message
pub fn render(cards: &[ProjectCard]) -> String {
    let list = if cards.is_empty() {
        format!("<p class=\"empty\">{}</p>", EMPTY_LIST)
    } else {
        cards.iter().map(render_card).collect::<String>()
    };

    let body = format!(
        "<div class=\"projects-container\"><h2>My Projects</h2>{}\
<div class=\"projects-list\">{}</div></div>",
        back_link(),
        list
    );
    layout("My Projects", &body)
}

fn render_card(card: &ProjectCard) -> String {
    let badge = card.badge.as_ref().map(render_badge).unwrap_or_default();
    format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" data-id=\"{}\">\
<div class=\"project-card\"><h3>{}</h3><p>{}</p>\
<div class=\"project-stats\">{}<span>{}</span><span>{}</span></div></div></a>",
        escape(&card.url),
        card.id,
        escape(&card.title),
        escape(&card.description),
        badge,
        card.stars_label(),
        card.forks_label()
    )
}

fn render_badge(badge: &LanguageBadge) -> String {
    format!(
        "<span class=\"language-badge\" style=\"background-color: {}; color: #fff; \
padding: 0.2rem 0.5rem; border-radius: 3px; margin-left: 0.5rem\">{}</span>",
        escape(&badge.color),
        escape(&badge.label)
    )
}
