//! REST API helpers for the landing page endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! requests are only issued from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (transport, non-2xx status, undecodable body) collapses into
//! one [`ApiError`] so widgets can swap in their static fallback without
//! caring which step broke.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::{AppRecord, BlogPost};

/// Same-origin API prefix.
pub const API_BASE_URL: &str = "";

/// Failure of a single API request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn apps_endpoint() -> String {
    format!("{API_BASE_URL}/api/apps")
}

#[cfg(any(test, feature = "hydrate"))]
fn blog_endpoint() -> String {
    format!("{API_BASE_URL}/api/blog")
}

#[cfg(any(test, feature = "hydrate"))]
fn blog_post_endpoint(encoded_slug: &str) -> String {
    format!("{API_BASE_URL}/api/blog/{encoded_slug}")
}

#[cfg(any(test, feature = "hydrate"))]
fn chat_endpoint() -> String {
    format!("{API_BASE_URL}/api/chat")
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the project records from `/api/apps`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-OK status, or a body
/// that is not a JSON array of records.
pub async fn fetch_apps() -> Result<Vec<AppRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&apps_endpoint()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the blog post summaries from `/api/blog`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-OK status, or an
/// undecodable body.
pub async fn fetch_blog_posts() -> Result<Vec<BlogPost>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&blog_endpoint()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch one full post (with rendered HTML content) from `/api/blog/{slug}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-OK status (404 for an
/// unknown slug), or an undecodable body.
pub async fn fetch_blog_post(slug: &str) -> Result<BlogPost, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let encoded: String = js_sys::encode_uri_component(slug).into();
        get_json(&blog_post_endpoint(&encoded)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = slug;
        Err(ApiError::Unavailable)
    }
}

/// Send one chat message via `POST /api/chat` and return the reply text.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-OK status (422, 502,
/// 503 from the server), or an undecodable body.
pub async fn send_chat(message: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = records::ChatRequest::new(message);
        let resp = gloo_net::http::Request::post(&chat_endpoint())
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body: records::ChatReply = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.response)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        Err(ApiError::Unavailable)
    }
}
