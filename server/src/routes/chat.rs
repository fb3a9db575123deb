//! Chat assistant route.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use records::{ChatReply, ChatRequest};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::error::ApiError;
use crate::services::assistant;
use crate::state::AppState;

/// `POST /api/chat`: answer one message.
///
/// Body rejections (bad JSON, missing `message`, wrong content type) are
/// answered as `{"detail"}` like every other failure.
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, ApiError> {
    let Json(body) = body?;
    let message = body.validate()?;
    let response = assistant::reply(state.llm.as_deref(), &state.system_prompt, message).await?;
    Ok(Json(ChatReply { response, timestamp: now_rfc3339() }))
}

pub(crate) fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}
