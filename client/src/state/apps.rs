//! Project card ordering and presentation helpers.

#[cfg(test)]
#[path = "apps_test.rs"]
mod apps_test;

use records::AppRecord;

pub const APPS_FALLBACK: &str = "Unable to load projects. Please try again later.";

/// Most tech badges shown on one card.
pub const MAX_TECH_BADGES: usize = 4;

const DEFAULT_ICON: &str = "code";

const TECH_ICONS: &[(&str, &str)] = &[
    ("React", "react"),
    ("Vue.js", "vuejs"),
    ("Python", "python"),
    ("FastAPI", "bolt"),
    ("Docker", "docker"),
    ("Node.js", "node-js"),
    ("MongoDB", "database"),
    ("PostgreSQL", "database"),
];

/// Featured records first; ties keep response order.
pub fn sort_featured_first(mut apps: Vec<AppRecord>) -> Vec<AppRecord> {
    // `sort_by_key` is stable.
    apps.sort_by_key(|app| !app.featured);
    apps
}

/// Badges rendered on a card.
pub fn visible_tech(app: &AppRecord) -> &[String] {
    let end = app.tech_stack.len().min(MAX_TECH_BADGES);
    &app.tech_stack[..end]
}

/// Font Awesome icon name for a card without an image: the first stack entry
/// with a known icon, else `code`.
pub fn app_icon(tech_stack: &[String]) -> &'static str {
    tech_stack
        .iter()
        .find_map(|tech| {
            TECH_ICONS
                .iter()
                .find(|(name, _)| *name == tech.as_str())
                .map(|(_, icon)| *icon)
        })
        .unwrap_or(DEFAULT_ICON)
}
