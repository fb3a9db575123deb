//! Project and blog content routes.

use axum::Json;
use axum::extract::{Path, State};
use records::{AppRecord, BlogPost};

use super::error::ApiError;
use crate::services::{apps, blog};
use crate::state::AppState;

/// `GET /api/apps`: every project record in file order.
pub async fn list_apps(State(state): State<AppState>) -> Result<Json<Vec<AppRecord>>, ApiError> {
    Ok(Json(apps::load_apps(state.data_dir()).await?))
}

/// `GET /api/blog`: post summaries, newest first.
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<BlogPost>>, ApiError> {
    Ok(Json(blog::list_posts(state.data_dir()).await?))
}

/// `GET /api/blog/:slug`: one post with its HTML body.
pub async fn get_post(State(state): State<AppState>, Path(slug): Path<String>) -> Result<Json<BlogPost>, ApiError> {
    Ok(Json(blog::get_post(state.data_dir(), &slug).await?))
}
