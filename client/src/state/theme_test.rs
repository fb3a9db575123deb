use super::*;

#[test]
fn empty_store_defaults_to_dark() {
    let store = MemoryStore::default();
    assert_eq!(load_theme(&store), Theme::Dark);
}

#[test]
fn invalid_stored_value_defaults_to_dark() {
    let store = MemoryStore::default();
    store.set(THEME_KEY, "sepia");
    assert_eq!(load_theme(&store), Theme::Dark);
}

#[test]
fn toggle_persists_and_round_trips() {
    let store = MemoryStore::default();
    let theme = load_theme(&store);

    let theme = toggle_theme(&store, theme);
    assert_eq!(theme, Theme::Light);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    assert_eq!(load_theme(&store), Theme::Light);

    let theme = toggle_theme(&store, theme);
    assert_eq!(theme, Theme::Dark);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
}

#[test]
fn icon_follows_theme() {
    assert_eq!(Theme::Dark.icon_class(), "fas fa-sun");
    assert_eq!(Theme::Light.icon_class(), "fas fa-moon");
}

#[test]
fn parse_accepts_only_known_values() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("Dark"), None);
}
