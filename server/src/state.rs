//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the content directory, the optional LLM client and the assistant
//! system prompt built at startup. Content itself is never cached here.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::llm::LlmChat;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    data_dir: Arc<PathBuf>,
    /// Optional LLM client. `None` if the provider key is not configured.
    pub llm: Option<Arc<dyn LlmChat>>,
    /// Persona instructions plus bio context.
    pub system_prompt: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(data_dir: PathBuf, llm: Option<Arc<dyn LlmChat>>, system_prompt: String) -> Self {
        Self { data_dir: Arc::new(data_dir), llm, system_prompt: system_prompt.into() }
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub fn chat_configured(&self) -> bool {
        self.llm.is_some()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use std::sync::Mutex;

    use crate::llm::types::{Completion, LlmError, Prompt, Sampling, TokenUsage};

    /// One recorded `LlmChat::complete` invocation.
    #[derive(Debug, Clone)]
    pub struct RecordedCall {
        pub sampling: Sampling,
        pub system: String,
        pub message: String,
    }

    /// Scripted LLM. Pops queued results in order, then answers `"done"`.
    pub struct MockLlm {
        responses: Mutex<Vec<Result<Completion, LlmError>>>,
        calls: Mutex<Vec<RecordedCall>>,
    }

    impl MockLlm {
        #[must_use]
        pub fn new(responses: Vec<Result<Completion, LlmError>>) -> Self {
            Self { responses: Mutex::new(responses), calls: Mutex::new(Vec::new()) }
        }

        #[must_use]
        pub fn replying(text: &str) -> Self {
            Self::with_response(completion(text))
        }

        #[must_use]
        pub fn with_response(response: Completion) -> Self {
            Self::new(vec![Ok(response)])
        }

        #[must_use]
        pub fn failing(err: LlmError) -> Self {
            Self::new(vec![Err(err)])
        }

        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().expect("mock mutex should lock").clone()
        }
    }

    #[must_use]
    pub fn completion(text: &str) -> Completion {
        Completion { text: text.into(), model: "mock".into(), truncated: false, usage: TokenUsage::default() }
    }

    #[async_trait::async_trait]
    impl LlmChat for MockLlm {
        async fn complete(&self, sampling: Sampling, prompt: Prompt<'_>) -> Result<Completion, LlmError> {
            self.calls.lock().expect("mock mutex should lock").push(RecordedCall {
                sampling,
                system: prompt.system.to_owned(),
                message: prompt.message.to_owned(),
            });
            let mut responses = self.responses.lock().expect("mock mutex should lock");
            if responses.is_empty() { Ok(completion("done")) } else { responses.remove(0) }
        }

        fn model(&self) -> &str {
            "mock"
        }
    }

    /// State over `data_dir` with chat disabled.
    #[must_use]
    pub fn test_app_state(data_dir: &Path) -> AppState {
        AppState::new(data_dir.to_path_buf(), None, "test persona".to_owned())
    }

    /// State over `data_dir` with a mock LLM.
    #[must_use]
    pub fn test_app_state_with_llm(data_dir: &Path, llm: Arc<dyn LlmChat>) -> AppState {
        AppState::new(data_dir.to_path_buf(), Some(llm), "test persona".to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_configured_tracks_llm_presence() {
        let dir = std::env::temp_dir();
        let without = test_helpers::test_app_state(&dir);
        assert!(!without.chat_configured());

        let with = test_helpers::test_app_state_with_llm(&dir, Arc::new(test_helpers::MockLlm::new(vec![])));
        assert!(with.chat_configured());
        assert_eq!(with.data_dir(), dir.as_path());
        assert_eq!(&*with.system_prompt, "test persona");
    }
}
