//! Fixed navigation bar with section links and the theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bar casts a shadow once the page scrolls past the hero, and its links
//! scroll smoothly to their sections. The theme preference is read from the
//! injected store after hydration, so server markup always starts dark.

use std::sync::Arc;

use leptos::prelude::*;

use crate::state::theme::{SettingsStore, Theme, load_theme, toggle_theme};
use crate::util::scroll::{navbar_shadow, on_anchor_click, window_scroll_y};
use crate::util::theme::apply;

#[component]
pub fn Navbar(store: Arc<dyn SettingsStore>) -> impl IntoView {
    let theme = RwSignal::new(Theme::default());
    let shadow = RwSignal::new("none");

    // Effects only run in the browser, after hydration.
    let initial_store = store.clone();
    Effect::new(move |_| {
        let stored = load_theme(initial_store.as_ref());
        theme.set(stored);
        apply(stored);
        shadow.set(navbar_shadow(window_scroll_y()));
    });

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            shadow.set(navbar_shadow(window_scroll_y()));
        });
        on_cleanup(move || handle.remove());
    }

    let on_toggle = move |_| {
        let next = toggle_theme(store.as_ref(), theme.get_untracked());
        theme.set(next);
        apply(next);
    };

    view! {
        <nav class="navbar navbar-expand-lg fixed-top" style:box-shadow=move || shadow.get()>
            <div class="container">
                <a class="navbar-brand" href="#home" on:click=move |ev| on_anchor_click(&ev, "#home")>
                    "Pablo Garay"
                </a>
                <ul class="navbar-nav ms-auto">
                    <NavLink href="#home" label="Home" />
                    <NavLink href="#apps" label="Projects" />
                    <NavLink href="#blog" label="Blog" />
                    <NavLink href="#contact" label="Contact" />
                </ul>
                <button
                    class="theme-toggle"
                    id="themeToggle"
                    title="Toggle theme"
                    aria-label="Toggle theme"
                    on:click=on_toggle
                >
                    <i class=move || theme.get().icon_class()></i>
                </button>
            </div>
        </nav>
    }
}

#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <li class="nav-item">
            <a class="nav-link" href=href on:click=move |ev| on_anchor_click(&ev, href)>
                {label}
            </a>
        </li>
    }
}
