use super::{escape, layout};

const WELCOME: &str = "I am a high school student interested in programming for the VEX and \
FIRST Robotics Competition, graphics, embedded systems, web development, low-level \
programming, game development, and more.";

/// Landing page
pub fn render(owner_name: &str) -> String {
    let title = format!("{}'s GitHub Portfolio", owner_name);
    let body = format!(
        "<div class=\"app\"><header class=\"header\"><h1>{}</h1></header>\
<main class=\"main\"><section class=\"hero\"><div class=\"hero-text\">\
<h2>Welcome</h2><p>{}</p>\
<div class=\"cta-buttons\">\
<a href=\"/projects\" class=\"button\">View Projects</a>\
<a href=\"/contact\" class=\"button\">Contact Me</a>\
</div></div></section></main></div>",
        escape(&title),
        WELCOME
    );
    layout(&title, &body)
}
