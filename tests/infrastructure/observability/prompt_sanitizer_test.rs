use docforge::infrastructure::observability::sanitize_prompt;

#[test]
fn given_short_prompt_when_sanitizing_then_returns_trimmed_prompt() {
    assert_eq!(sanitize_prompt("  make a pdf  "), "make a pdf");
}

#[test]
fn given_long_prompt_when_sanitizing_then_truncates_with_length_note() {
    let prompt = "a".repeat(250);

    let sanitized = sanitize_prompt(&prompt);

    assert!(sanitized.starts_with(&"a".repeat(100)));
    assert!(sanitized.ends_with("... (250 chars total)"));
}

#[test]
fn given_prompt_with_bearer_token_when_sanitizing_then_redacts_it() {
    let sanitized = sanitize_prompt("call it with Bearer sk-live-123 please");

    assert_eq!(sanitized, "call it with Bearer [REDACTED] please");
}
