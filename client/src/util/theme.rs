//! Browser side of the theme toggle.
//!
//! [`LocalStorageStore`] backs the [`SettingsStore`] seam with
//! `window.localStorage`, and [`apply`] writes the `data-theme` attribute on
//! the `<html>` element. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: private browsing or a disabled storage API
//! simply loses the preference. SSR paths no-op to keep server rendering
//! deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::sync::Arc;

use crate::state::theme::{SettingsStore, Theme};

/// `localStorage`-backed settings. Holds no handle, so it is `Send + Sync`
/// and can live inside reactive state.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl SettingsStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            let _ = storage.set_item(key, value);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// Store injected into the theme toggle by the page.
pub fn browser_store() -> Arc<dyn SettingsStore> {
    Arc::new(LocalStorageStore)
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
