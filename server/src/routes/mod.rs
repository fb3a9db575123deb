//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API and stitches it with Leptos SSR rendering
//! under a single Axum router. The landing page is rendered at `/`, its WASM
//! bundle is served from `/pkg`, and everything else under the site root is
//! served as static files.

pub mod chat;
pub mod content;
pub mod error;
pub mod health;

use std::path::PathBuf;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::AllowedOrigins;
use crate::state::AppState;

fn cors_layer(origins: &AllowedOrigins) -> CorsLayer {
    let allow_origin = match origins {
        AllowedOrigins::Any => AllowOrigin::any(),
        AllowedOrigins::List(list) => {
            let values: Vec<HeaderValue> = list
                .iter()
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(%origin, "ignoring malformed CORS origin");
                        None
                    }
                })
                .collect();
            AllowOrigin::list(values)
        }
    };
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// JSON API routes used by the landing page.
pub fn api_routes(state: AppState, origins: &AllowedOrigins) -> Router {
    Router::new()
        .route("/api", get(health::banner))
        .route("/api/apps", get(content::list_apps))
        .route("/api/blog", get(content::list_posts))
        .route("/api/blog/{slug}", get(content::get_post))
        .route("/api/chat", post(chat::chat))
        .route("/health", get(health::health))
        .route("/healthz", get(health::healthz))
        .layer(cors_layer(origins))
        .with_state(state)
}

/// Leptos SSR frontend: API routes + landing page at `/` + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn leptos_app(state: AppState, origins: &AllowedOrigins) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state, origins)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(site_root_path))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
