//! Provider-neutral request/response types for the assistant.
//!
//! The assistant sends one system prompt and one user message per call and
//! reads plain text back, so a call is a [`Prompt`] plus [`Sampling`] in and
//! a [`Completion`] out. Provider wire formats stay private to their modules.

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("unsupported AI_PROVIDER: {0}")]
    UnsupportedProvider(String),

    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("LLM request failed: {0}")]
    Transport(String),

    #[error("LLM provider returned status {status}")]
    Status { status: u16, body: String },

    #[error("LLM response could not be decoded: {0}")]
    Decode(String),

    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

impl LlmError {
    /// Stable machine-readable code, used as a structured log field.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedProvider(_) => "E_UNSUPPORTED_PROVIDER",
            Self::MissingApiKey { .. } => "E_MISSING_API_KEY",
            Self::Transport(_) => "E_TRANSPORT",
            Self::Status { .. } => "E_STATUS",
            Self::Decode(_) => "E_DECODE",
            Self::ClientBuild(_) => "E_CLIENT_BUILD",
        }
    }
}

/// Sampling settings for one completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampling {
    pub max_tokens: u32,
    pub temperature: f32,
}

/// One assistant exchange: instructions plus the visitor's message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt<'a> {
    pub system: &'a str,
    pub message: &'a str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input: u64,
    pub output: u64,
}

/// Text produced by a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    pub model: String,
    /// The provider stopped at `max_tokens` rather than finishing.
    pub truncated: bool,
    pub usage: TokenUsage,
}

/// Seam between the assistant and a concrete provider. Enables mocking in tests.
#[async_trait::async_trait]
pub trait LlmChat: Send + Sync {
    /// Run one completion.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails or the response is malformed.
    async fn complete(&self, sampling: Sampling, prompt: Prompt<'_>) -> Result<Completion, LlmError>;

    /// Model name reported in logs.
    fn model(&self) -> &str;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
