//! Hero banner with the animated project and article counters.

use leptos::prelude::*;

use crate::util::scroll::on_anchor_click;

/// Animate `counter` from zero up to `target`.
///
/// Sections call this once their data arrives; a failed fetch never calls it
/// and the counter keeps its placeholder.
pub fn start_count_up(counter: RwSignal<Option<u64>>, target: u64) {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::counter::{COUNT_UP_INTERVAL_MS, count_up_frames};

        leptos::task::spawn_local(async move {
            for value in count_up_frames(target) {
                gloo_timers::future::sleep(std::time::Duration::from_millis(COUNT_UP_INTERVAL_MS)).await;
                counter.set(Some(value));
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (counter, target);
    }
}

#[component]
pub fn Hero(projects_count: RwSignal<Option<u64>>, posts_count: RwSignal<Option<u64>>) -> impl IntoView {
    view! {
        <section id="home" class="hero-section">
            <div class="container">
                <div class="hero-content">
                    <h1 class="hero-title">
                        "Hi, I'm " <span class="text-gradient">"Pablo Garay"</span>
                    </h1>
                    <p class="hero-subtitle">
                        "Software engineer building web products, APIs and AI-powered tools."
                    </p>
                    <div class="hero-buttons">
                        <a href="#apps" class="btn btn-primary" on:click=move |ev| on_anchor_click(&ev, "#apps")>
                            "View Projects"
                        </a>
                        <a href="#blog" class="btn btn-outline" on:click=move |ev| on_anchor_click(&ev, "#blog")>
                            "Read Blog"
                        </a>
                    </div>
                    <div class="hero-stats">
                        <StatCounter id="projectsCount" label="Projects" value=projects_count />
                        <StatCounter id="blogCount" label="Articles" value=posts_count />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatCounter(id: &'static str, label: &'static str, value: RwSignal<Option<u64>>) -> impl IntoView {
    let display = move || value.get().map_or_else(|| "0".to_owned(), |n| n.to_string());

    view! {
        <div class="stat-item">
            <span class="stat-number" id=id>{display}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}
