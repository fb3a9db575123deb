//! OpenAI-compatible Chat Completions adapter.
//!
//! Posts to `{base_url}/chat/completions`, so any API mirroring the `OpenAI`
//! wire format works by overriding the base URL.

use serde::{Deserialize, Serialize};

use super::config::LlmTimeouts;
use super::http;
use super::types::{Completion, LlmError, Prompt, Sampling, TokenUsage};

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl OpenAiClient {
    /// # Errors
    ///
    /// Returns [`LlmError::ClientBuild`] if the HTTP client cannot be built.
    pub fn new(api_key: String, model: String, base_url: &str, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        Ok(Self {
            http: http::build_client(timeouts)?,
            api_key,
            model,
            endpoint: completions_endpoint(base_url),
        })
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
        let body = CompletionsRequest {
            model: &self.model,
            max_tokens: sampling.max_tokens,
            temperature: sampling.temperature,
            messages: build_messages(prompt),
        };
        let request = self.http.post(&self.endpoint).bearer_auth(&self.api_key);
        let text = http::post_json(request, &body).await?;
        parse_completions_response(&text)
    }
}

fn completions_endpoint(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

#[derive(Serialize)]
struct CompletionsRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<Turn<'a>>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
struct Turn<'a> {
    role: &'static str,
    content: &'a str,
}

/// System turn (when non-blank) followed by the user turn.
fn build_messages(prompt: Prompt<'_>) -> Vec<Turn<'_>> {
    let system = (!prompt.system.trim().is_empty()).then_some(Turn { role: "system", content: prompt.system });
    system
        .into_iter()
        .chain(std::iter::once(Turn { role: "user", content: prompt.message }))
        .collect()
}

#[derive(Deserialize)]
struct CompletionsResponse {
    #[serde(default)]
    model: String,
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    prompt_tokens: u64,
    completion_tokens: u64,
}

fn parse_completions_response(json: &str) -> Result<Completion, LlmError> {
    let resp: CompletionsResponse = serde_json::from_str(json).map_err(|e| LlmError::Decode(e.to_string()))?;
    let Some(choice) = resp.choices.into_iter().next() else {
        return Err(LlmError::Decode("response has no choices".to_owned()));
    };

    Ok(Completion {
        text: choice.message.content.unwrap_or_default(),
        model: resp.model,
        truncated: choice.finish_reason.as_deref() == Some("length"),
        usage: resp
            .usage
            .map(|u| TokenUsage { input: u.prompt_tokens, output: u.completion_tokens })
            .unwrap_or_default(),
    })
}

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;
