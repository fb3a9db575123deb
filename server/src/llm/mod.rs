//! LLM providers behind the chat assistant.
//!
//! DESIGN
//! ======
//! [`LlmClient`] is the concrete provider picked by `AI_PROVIDER`. Routes and
//! services only see the [`LlmChat`] trait so tests can swap in a mock.

pub mod anthropic;
pub mod config;
mod http;
pub mod openai;
pub mod types;

use config::{LlmConfig, ProviderConfig};
pub use types::LlmChat;
use types::{Completion, LlmError, Prompt, Sampling};

pub enum LlmClient {
    Anthropic(anthropic::AnthropicClient),
    OpenAi(openai::OpenAiClient),
}

impl LlmClient {
    /// Build the configured provider client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider is unknown, its API key is missing,
    /// or the HTTP client fails to build.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_config(LlmConfig::from_env()?)
    }

    /// # Errors
    ///
    /// Returns an error if the provider HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        Ok(match config.provider {
            ProviderConfig::Anthropic { api_key, model } => {
                Self::Anthropic(anthropic::AnthropicClient::new(api_key, model, config.timeouts)?)
            }
            ProviderConfig::OpenAi { api_key, model, base_url } => {
                Self::OpenAi(openai::OpenAiClient::new(api_key, model, &base_url, config.timeouts)?)
            }
        })
    }

    /// Provider name (`"anthropic"` or `"openai"`) for logs.
    #[must_use]
    pub fn provider(&self) -> &'static str {
        match self {
            Self::Anthropic(_) => "anthropic",
            Self::OpenAi(_) => "openai",
        }
    }
}

#[async_trait::async_trait]
impl LlmChat for LlmClient {
    async fn complete(&self, sampling: Sampling, prompt: Prompt<'_>) -> Result<Completion, LlmError> {
        match self {
            Self::Anthropic(client) => client.complete(sampling, prompt).await,
            Self::OpenAi(client) => client.complete(sampling, prompt).await,
        }
    }

    fn model(&self) -> &str {
        match self {
            Self::Anthropic(client) => client.model(),
            Self::OpenAi(client) => client.model(),
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
