use super::*;

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = ClientConfig::from_values(None, None, None);
    assert_eq!(cfg.api_base, DEFAULT_API_BASE);
    assert_eq!(cfg.api_key, None);
    assert_eq!(cfg.toast_ms, DEFAULT_TOAST_MS);
    assert_eq!(cfg, ClientConfig::default());
}

#[test]
fn api_base_drops_trailing_slashes() {
    let cfg = ClientConfig::from_values(Some("http://localhost:8080/api//"), None, None);
    assert_eq!(cfg.api_base, "http://localhost:8080/api");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ClientConfig::from_values(Some("   "), Some(""), Some(" "));
    assert_eq!(cfg.api_base, DEFAULT_API_BASE);
    assert_eq!(cfg.api_key, None);
    assert_eq!(cfg.toast_ms, DEFAULT_TOAST_MS);
}

#[test]
fn api_key_is_trimmed() {
    let cfg = ClientConfig::from_values(None, Some(" reqres-free-v1 "), None);
    assert_eq!(cfg.api_key.as_deref(), Some("reqres-free-v1"));
}

#[test]
fn toast_ms_parses_and_rejects_garbage() {
    assert_eq!(ClientConfig::from_values(None, None, Some("1500")).toast_ms, 1500);
    assert_eq!(ClientConfig::from_values(None, None, Some("soon")).toast_ms, DEFAULT_TOAST_MS);
    assert_eq!(ClientConfig::from_values(None, None, Some("0")).toast_ms, DEFAULT_TOAST_MS);
}
