//! Chat assistant: one user message in, one short reply out.
//!
//! DESIGN
//! ======
//! The system prompt is a fixed persona plus the bio context from
//! `<data_dir>/context.md`, built once at startup. Each request is a single
//! user turn; no history or session is kept server-side.

use std::path::Path;

use tracing::{info, warn};

use crate::llm::LlmChat;
use crate::llm::types::{LlmError, Prompt, Sampling};

pub const CONTEXT_FILE: &str = "context.md";
pub const MISSING_CONTEXT: &str = "No context available. Please create a context.md file.";

/// Sampling used for every assistant reply.
pub const REPLY_SAMPLING: Sampling = Sampling { max_tokens: 500, temperature: 0.7 };

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat assistant is not configured")]
    LlmNotConfigured,
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
    #[error("LLM returned an empty reply")]
    EmptyReply,
}

/// Read the bio context, falling back to a placeholder when the file is absent.
pub async fn load_context(data_dir: &Path) -> String {
    let path = data_dir.join(CONTEXT_FILE);
    match tokio::fs::read_to_string(&path).await {
        Ok(context) => context,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "assistant context unavailable");
            MISSING_CONTEXT.to_owned()
        }
    }
}

#[must_use]
pub fn build_system_prompt(context: &str) -> String {
    format!(
        "You are 'Dr. Pablo Garay's Assistant'.

INSTRUCTIONS:
1. **MAXIMUM 40 WORDS PER RESPONSE.** NO EXCEPTIONS.
2. Answer the user's question directly and briefly.
3. ALWAYS end with a short question engaging the user to ask more.
4. Speak in the user's language (Spanish preferred).
5. Do NOT list items. Do NOT summarize everything.

Bio Context:
{context}

REMEMBER: BE BRIEF. MAX 40 WORDS."
    )
}

/// Ask the LLM for a reply to `message`.
///
/// # Errors
///
/// [`ChatError::LlmNotConfigured`] without a client, [`ChatError::Llm`] when
/// the provider call fails, [`ChatError::EmptyReply`] when it returns no text.
pub async fn reply(llm: Option<&dyn LlmChat>, system_prompt: &str, message: &str) -> Result<String, ChatError> {
    let llm = llm.ok_or(ChatError::LlmNotConfigured)?;
    let completion = llm.complete(REPLY_SAMPLING, Prompt { system: system_prompt, message }).await?;
    info!(
        model = %completion.model,
        input_tokens = completion.usage.input,
        output_tokens = completion.usage.output,
        truncated = completion.truncated,
        "assistant replied"
    );

    let text = completion.text.trim();
    if text.is_empty() {
        return Err(ChatError::EmptyReply);
    }
    Ok(text.to_owned())
}

#[cfg(test)]
#[path = "assistant_test.rs"]
mod tests;
