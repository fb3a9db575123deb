//! Shared JSON records for the HTTP API.
//!
//! This crate owns the wire representation used by both `server` and `client`.
//! Records are plain view models: the server builds them from content files,
//! the client renders them and never mutates them.

use serde::{Deserialize, Serialize};

/// Author used when a blog post does not name one.
pub const DEFAULT_AUTHOR: &str = "Pablo Garay";

/// Longest chat message the API accepts, in characters.
pub const MAX_CHAT_MESSAGE_CHARS: usize = 1000;

/// A portfolio project card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppRecord {
    /// Stable identifier from `apps.json`.
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub description: String,
    /// Technologies in display order.
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Featured projects are listed first.
    #[serde(default)]
    pub featured: bool,
}

/// A blog post. Listings carry `content = None`; the detail endpoint fills it
/// with rendered HTML.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    /// File stem of the Markdown source; also the detail lookup key.
    pub slug: String,
    pub title: String,
    /// Date as written in the frontmatter, usually `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default)]
    pub excerpt: String,
    /// Rendered HTML body. Trusted: produced by the server from local files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_author() -> String {
    DEFAULT_AUTHOR.to_owned()
}

/// Body of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Rejection reasons for a [`ChatRequest`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatRequestError {
    #[error("message must not be empty")]
    Empty,
    #[error("message exceeds {max} characters ({len})")]
    TooLong { len: usize, max: usize },
}

impl ChatRequest {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// Check the message length bounds (1..=1000 characters).
    ///
    /// # Errors
    ///
    /// Returns [`ChatRequestError::Empty`] for an empty message and
    /// [`ChatRequestError::TooLong`] when it exceeds [`MAX_CHAT_MESSAGE_CHARS`].
    pub fn validate(&self) -> Result<&str, ChatRequestError> {
        let len = self.message.chars().count();
        if len == 0 {
            return Err(ChatRequestError::Empty);
        }
        if len > MAX_CHAT_MESSAGE_CHARS {
            return Err(ChatRequestError::TooLong { len, max: MAX_CHAT_MESSAGE_CHARS });
        }
        Ok(&self.message)
    }
}

/// Body returned by `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    /// RFC 3339 timestamp of the reply.
    #[serde(default)]
    pub timestamp: String,
}

/// Error body returned by every failing API route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
