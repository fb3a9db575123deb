//! Server configuration parsed from environment variables.
//!
//! Every value has a default so a bare `cargo run` serves the bundled `data/`
//! directory on port 8000. LLM settings live in [`crate::llm::config`].

use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Which browser origins may call the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Holds `apps.json`, `blog/*.md` and `context.md`.
    pub data_dir: PathBuf,
    pub allowed_origins: AllowedOrigins,
}

impl ServerConfig {
    /// Build config from `BACKEND_HOST`, `BACKEND_PORT`, `DATA_DIR` and
    /// `ALLOWED_ORIGINS`.
    ///
    /// # Errors
    ///
    /// Returns an error if `BACKEND_PORT` is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an explicit variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if `BACKEND_PORT` is malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("BACKEND_HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = match lookup("BACKEND_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "BACKEND_PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let data_dir = lookup("DATA_DIR").map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);
        let allowed_origins =
            parse_allowed_origins(&lookup("ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_owned()));

        Ok(Self { host, port, data_dir, allowed_origins })
    }

    /// `host:port` string for the listener; host names are resolved at bind.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_allowed_origins(raw: &str) -> AllowedOrigins {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_owned)
        .collect();
    if origins.iter().any(|o| o == "*") {
        AllowedOrigins::Any
    } else {
        AllowedOrigins::List(origins)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
