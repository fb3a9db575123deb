//! Assistant provider settings read from the environment.
//!
//! `AI_PROVIDER` picks the provider (`openai` by default, or `anthropic`);
//! only the chosen provider's key and model variables are consulted.

use super::types::LlmError;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4-turbo-preview";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-sonnet-20241022";
pub const DEFAULT_LLM_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_LLM_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LlmTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for LlmTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_LLM_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_LLM_CONNECT_TIMEOUT_SECS }
    }
}

/// Credentials and model for one provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderConfig {
    Anthropic { api_key: String, model: String },
    OpenAi { api_key: String, model: String, base_url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmConfig {
    pub provider: ProviderConfig,
    pub timeouts: LlmTimeouts,
}

impl LlmConfig {
    /// Read provider settings from the process environment.
    ///
    /// - `AI_PROVIDER`: `openai` (default) or `anthropic`, case-insensitive
    /// - `OPENAI_API_KEY`, `OPENAI_MODEL`, `OPENAI_BASE_URL`
    /// - `ANTHROPIC_API_KEY`, `ANTHROPIC_MODEL`
    /// - `LLM_REQUEST_TIMEOUT_SECS` (120), `LLM_CONNECT_TIMEOUT_SECS` (10)
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown provider or a missing API key.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`LlmConfig::from_env`] with an explicit variable source.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown provider or a missing API key.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LlmError> {
        let provider_name = lookup("AI_PROVIDER")
            .map(|raw| raw.trim().to_ascii_lowercase())
            .filter(|name| !name.is_empty());

        let provider = match provider_name.as_deref() {
            None | Some("openai") => ProviderConfig::OpenAi {
                api_key: require_key(&lookup, "OPENAI_API_KEY")?,
                model: lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_owned()),
                base_url: lookup("OPENAI_BASE_URL")
                    .map(|url| url.trim_end_matches('/').to_owned())
                    .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_owned()),
            },
            Some("anthropic") => ProviderConfig::Anthropic {
                api_key: require_key(&lookup, "ANTHROPIC_API_KEY")?,
                model: lookup("ANTHROPIC_MODEL").unwrap_or_else(|| DEFAULT_ANTHROPIC_MODEL.to_owned()),
            },
            Some(other) => return Err(LlmError::UnsupportedProvider(other.to_owned())),
        };

        let defaults = LlmTimeouts::default();
        let timeouts = LlmTimeouts {
            request_secs: seconds(lookup("LLM_REQUEST_TIMEOUT_SECS"), defaults.request_secs),
            connect_secs: seconds(lookup("LLM_CONNECT_TIMEOUT_SECS"), defaults.connect_secs),
        };

        Ok(Self { provider, timeouts })
    }
}

fn require_key(lookup: &impl Fn(&str) -> Option<String>, var: &str) -> Result<String, LlmError> {
    lookup(var)
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| LlmError::MissingApiKey { var: var.to_owned() })
}

fn seconds(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
