#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::theme::{THEME_KEY, load_theme};

#[test]
fn local_storage_store_is_empty_outside_browser() {
    let store = LocalStorageStore;
    store.set(THEME_KEY, "light");
    assert_eq!(store.get(THEME_KEY), None);
}

#[test]
fn browser_store_falls_back_to_default_theme() {
    let store = browser_store();
    assert_eq!(load_theme(store.as_ref()), Theme::Dark);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Dark);
    apply(Theme::Light);
}
