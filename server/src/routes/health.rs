//! Service banner and health checks.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::chat::now_rfc3339;
use crate::state::AppState;

pub const SERVICE_NAME: &str = "Personal Landing Page API";

#[derive(Debug, Serialize)]
pub struct Banner {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub blog: &'static str,
    pub apps: &'static str,
    pub chat: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub timestamp: String,
    pub services: ServiceStatus,
}

/// `GET /api`: name and version.
pub async fn banner() -> Json<Banner> {
    Json(Banner { status: "healthy", message: SERVICE_NAME, version: env!("CARGO_PKG_VERSION") })
}

/// `GET /health`: per-feature status.
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(health_report(&state, now_rfc3339()))
}

pub(crate) fn health_report(state: &AppState, timestamp: String) -> Health {
    Health {
        status: "healthy",
        timestamp,
        services: ServiceStatus {
            blog: "operational",
            apps: "operational",
            chat: if state.chat_configured() { "operational" } else { "unconfigured" },
        },
    }
}

/// `GET /healthz`: liveness probe.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
