//! HTTP plumbing shared by the provider clients.

use std::time::Duration;

use serde::Serialize;

use super::config::LlmTimeouts;
use super::types::LlmError;

pub(crate) fn build_client(timeouts: LlmTimeouts) -> Result<reqwest::Client, LlmError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeouts.request_secs))
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .build()
        .map_err(|e| LlmError::ClientBuild(e.to_string()))
}

/// Send `body` as JSON and return the response text of a 2xx answer.
pub(crate) async fn post_json(request: reqwest::RequestBuilder, body: &impl Serialize) -> Result<String, LlmError> {
    let response = request
        .json(body)
        .send()
        .await
        .map_err(|e| LlmError::Transport(e.to_string()))?;
    let status = response.status();
    let text = response.text().await.map_err(|e| LlmError::Transport(e.to_string()))?;
    if !status.is_success() {
        return Err(LlmError::Status { status: status.as_u16(), body: text });
    }
    Ok(text)
}
