//! Anthropic Messages API adapter.
//!
//! Posts a single-turn `/v1/messages` request; the reply text is every
//! `text` block joined in order. Other block kinds are skipped.

use serde::{Deserialize, Serialize};

use super::config::LlmTimeouts;
use super::http;
use super::types::{Completion, LlmError, Prompt, Sampling, TokenUsage};

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

pub struct AnthropicClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl AnthropicClient {
    /// # Errors
    ///
    /// Returns [`LlmError::ClientBuild`] if the HTTP client cannot be built.
    pub fn new(api_key: String, model: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        Ok(Self { http: http::build_client(timeouts)?, api_key, model })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// # Errors
    ///
    /// Returns an [`LlmError`] on transport failure, non-2xx status or an
    /// undecodable body.
    pub async fn complete(&self, sampling: Sampling, prompt: Prompt<'_>) -> Result<Completion, LlmError> {
        let body = messages_request(&self.model, sampling, prompt);
        let request = self
            .http
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION);
        let text = http::post_json(request, &body).await?;
        parse_messages_response(&text)
    }
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    #[serde(skip_serializing_if = "is_blank")]
    system: &'a str,
    messages: [UserTurn<'a>; 1],
}

#[derive(Serialize)]
struct UserTurn<'a> {
    role: &'static str,
    content: &'a str,
}

fn is_blank(value: &&str) -> bool {
    value.is_empty()
}

fn messages_request<'a>(model: &'a str, sampling: Sampling, prompt: Prompt<'a>) -> MessagesRequest<'a> {
    MessagesRequest {
        model,
        max_tokens: sampling.max_tokens,
        temperature: sampling.temperature,
        system: prompt.system.trim(),
        messages: [UserTurn { role: "user", content: prompt.message }],
    }
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<Block>,
    model: String,
    #[serde(default)]
    stop_reason: Option<String>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Block {
    Text { text: String },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
struct Usage {
    input_tokens: u64,
    output_tokens: u64,
}

fn parse_messages_response(json: &str) -> Result<Completion, LlmError> {
    let resp: MessagesResponse = serde_json::from_str(json).map_err(|e| LlmError::Decode(e.to_string()))?;

    let text = resp
        .content
        .into_iter()
        .filter_map(|block| match block {
            Block::Text { text } => Some(text),
            Block::Other => None,
        })
        .collect::<String>();

    Ok(Completion {
        text,
        model: resp.model,
        truncated: resp.stop_reason.as_deref() == Some("max_tokens"),
        usage: resp
            .usage
            .map(|u| TokenUsage { input: u.input_tokens, output: u.output_tokens })
            .unwrap_or_default(),
    })
}

#[cfg(test)]
#[path = "anthropic_test.rs"]
mod tests;
