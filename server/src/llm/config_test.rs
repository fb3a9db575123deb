use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_to_openai() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-test")])).unwrap();
    assert_eq!(
        cfg.provider,
        ProviderConfig::OpenAi {
            api_key: "sk-test".into(),
            model: DEFAULT_OPENAI_MODEL.into(),
            base_url: DEFAULT_OPENAI_BASE_URL.into(),
        }
    );
    assert_eq!(cfg.timeouts, LlmTimeouts::default());
}

#[test]
fn blank_provider_means_default() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[("AI_PROVIDER", " "), ("OPENAI_API_KEY", "sk")])).unwrap();
    assert!(matches!(cfg.provider, ProviderConfig::OpenAi { .. }));
}

#[test]
fn anthropic_with_overrides() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[
        ("AI_PROVIDER", "Anthropic"),
        ("ANTHROPIC_API_KEY", "ak-test"),
        ("ANTHROPIC_MODEL", "claude-custom"),
        ("LLM_REQUEST_TIMEOUT_SECS", "42"),
        ("LLM_CONNECT_TIMEOUT_SECS", "7"),
    ]))
    .unwrap();
    assert_eq!(cfg.provider, ProviderConfig::Anthropic { api_key: "ak-test".into(), model: "claude-custom".into() });
    assert_eq!(cfg.timeouts, LlmTimeouts { request_secs: 42, connect_secs: 7 });
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[
        ("OPENAI_API_KEY", "sk-test"),
        ("OPENAI_BASE_URL", "https://example.test/v1/"),
    ]))
    .unwrap();
    assert!(matches!(cfg.provider, ProviderConfig::OpenAi { ref base_url, .. } if base_url == "https://example.test/v1"));
}

#[test]
fn missing_key_names_the_selected_provider_variable() {
    let err = LlmConfig::from_lookup(lookup_from(&[("AI_PROVIDER", "anthropic"), ("OPENAI_API_KEY", "sk")]))
        .unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { ref var } if var == "ANTHROPIC_API_KEY"));
}

#[test]
fn blank_key_counts_as_missing() {
    let err = LlmConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "  ")])).unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { .. }));
}

#[test]
fn unknown_provider_errors() {
    let err = LlmConfig::from_lookup(lookup_from(&[("AI_PROVIDER", "bad"), ("OPENAI_API_KEY", "sk")])).unwrap_err();
    assert!(matches!(err, LlmError::UnsupportedProvider(ref name) if name == "bad"));
}

#[test]
fn unparseable_timeout_falls_back_to_default() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[
        ("OPENAI_API_KEY", "sk-test"),
        ("LLM_REQUEST_TIMEOUT_SECS", "soon"),
    ]))
    .unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_LLM_REQUEST_TIMEOUT_SECS);
}
