use super::*;

#[test]
fn error_codes_are_stable() {
    assert_eq!(LlmError::UnsupportedProvider("x".into()).error_code(), "E_UNSUPPORTED_PROVIDER");
    assert_eq!(LlmError::MissingApiKey { var: "KEY".into() }.error_code(), "E_MISSING_API_KEY");
    assert_eq!(LlmError::Transport("timeout".into()).error_code(), "E_TRANSPORT");
    assert_eq!(LlmError::Decode("eof".into()).error_code(), "E_DECODE");
}

#[test]
fn status_error_hides_body_in_message() {
    let err = LlmError::Status { status: 429, body: "rate limited: org-123".into() };
    assert_eq!(err.error_code(), "E_STATUS");
    assert_eq!(err.to_string(), "LLM provider returned status 429");
}

#[test]
fn unsupported_provider_message_names_value() {
    assert_eq!(LlmError::UnsupportedProvider("gemini".into()).to_string(), "unsupported AI_PROVIDER: gemini");
}
