//! Project cards grid.

use leptos::prelude::*;
use records::AppRecord;

use crate::state::apps::{APPS_FALLBACK, app_icon, visible_tech};
use crate::state::load::LoadState;

#[component]
pub fn AppsSection(projects_count: RwSignal<Option<u64>>) -> impl IntoView {
    let apps = RwSignal::new(LoadState::<Vec<AppRecord>>::Loading);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use super::hero::start_count_up;
        use crate::state::apps::sort_featured_first;

        let result = crate::net::api::fetch_apps().await;
        if let Err(e) = &result {
            log::error!("Error loading apps: {e}");
        }
        let state = LoadState::from_result(result.map(sort_featured_first));
        if let Some(target) = state.count() {
            start_count_up(projects_count, target);
        }
        apps.set(state);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = projects_count;

    view! {
        <section id="apps" class="apps-section">
            <div class="container">
                <h2 class="section-title">"Featured Projects"</h2>
                <div class="row" id="appsGrid">
                    {move || match apps.get() {
                        LoadState::Loading => loading_spinner().into_any(),
                        LoadState::Failed => {
                            view! {
                                <div class="col-12 text-center">
                                    <p class="text-muted">{APPS_FALLBACK}</p>
                                </div>
                            }
                                .into_any()
                        }
                        LoadState::Loaded(list) => {
                            list.into_iter().map(|app| view! { <AppCard app /> }).collect_view().into_any()
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

pub(crate) fn loading_spinner() -> impl IntoView {
    view! {
        <div class="col-12 text-center py-5">
            <div class="spinner-border text-primary" role="status">
                <span class="visually-hidden">"Loading..."</span>
            </div>
        </div>
    }
}

#[component]
fn AppCard(app: AppRecord) -> impl IntoView {
    let badges = visible_tech(&app).to_vec();
    let icon_class = format!("fas fa-{}", app_icon(&app.tech_stack));
    let alt = app.name.clone();

    let image = match app.image_url {
        Some(src) => {
            view! { <img src=src alt=alt style="width: 100%; height: 100%; object-fit: cover;" /> }.into_any()
        }
        None => view! { <i class=icon_class></i> }.into_any(),
    };

    let demo = app.demo_url.map(|url| {
        view! {
            <a href=url target="_blank" rel="noopener" class="app-link app-link-primary">
                <i class="fas fa-external-link-alt me-1"></i>
                " Demo"
            </a>
        }
    });
    let code = app.github_url.map(|url| {
        view! {
            <a href=url target="_blank" rel="noopener" class="app-link app-link-secondary">
                <i class="fab fa-github me-1"></i>
                " Code"
            </a>
        }
    });

    view! {
        <div class="col-lg-4 col-md-6 mb-4">
            <div class="app-card" class:featured=app.featured>
                <div class="app-image">{image}</div>
                <div class="app-content">
                    <h3 class="app-title">{app.name}</h3>
                    <p class="app-description">{app.description}</p>
                    <div class="app-tech">
                        {badges.into_iter().map(|tech| view! { <span class="tech-badge">{tech}</span> }).collect_view()}
                    </div>
                    <div class="app-links">{demo} {code}</div>
                </div>
            </div>
        </div>
    }
}
