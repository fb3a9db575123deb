//! Theme preference and its persistence seam.
//!
//! The preference lives behind [`SettingsStore`] so the toggle logic can be
//! exercised with [`MemoryStore`]; browser builds inject the `localStorage`
//! store from `util::theme`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;
use std::sync::Mutex;

/// Storage key holding `"dark"` or `"light"`.
pub const THEME_KEY: &str = "theme";

/// String key/value settings persisted across page loads.
pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-process store, used for SSR and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_owned(), value.to_owned());
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Toggle button icon: the sun switches away from dark, the moon away
    /// from light.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Dark => "fas fa-sun",
            Self::Light => "fas fa-moon",
        }
    }
}

/// Stored theme, or the default when nothing valid is stored.
pub fn load_theme(store: &dyn SettingsStore) -> Theme {
    store
        .get(THEME_KEY)
        .and_then(|value| Theme::parse(&value))
        .unwrap_or_default()
}

/// Flip `current` and persist the result.
pub fn toggle_theme(store: &dyn SettingsStore, current: Theme) -> Theme {
    let next = current.toggled();
    store.set(THEME_KEY, next.as_str());
    next
}
