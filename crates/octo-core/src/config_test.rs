use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_fetch_config_uses_defaults_when_env_is_empty() {
    let map: HashMap<&str, &str> = HashMap::new();
    let config = build_fetch_config(lookup_from_map(&map)).unwrap();
    assert_eq!(config, FetchConfig::default());
    assert_eq!(config.base_url, "https://cuddlyoctopus.com/");
    assert_eq!(config.handshake_timeout_secs, 10);
    assert_eq!(config.idle_timeout_secs, 5);
    assert_eq!(config.request_timeout_secs, 300);
    assert!(config.accept_invalid_certs);
}

#[test]
fn build_fetch_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("OCTO_USER_AGENT", "octo-test/0.1");
    map.insert("OCTO_REQUEST_TIMEOUT_SECS", "30");
    map.insert("OCTO_ACCEPT_INVALID_CERTS", "false");
    map.insert("OCTO_LOG_LEVEL", "debug");

    let config = build_fetch_config(lookup_from_map(&map)).unwrap();
    assert_eq!(config.user_agent, "octo-test/0.1");
    assert_eq!(config.request_timeout_secs, 30);
    assert!(!config.accept_invalid_certs);
    assert_eq!(config.log_level, "debug");
}

#[test]
fn build_fetch_config_appends_trailing_slash_to_base_url() {
    let mut map = HashMap::new();
    map.insert("OCTO_BASE_URL", "http://127.0.0.1:8080");

    let config = build_fetch_config(lookup_from_map(&map)).unwrap();
    assert_eq!(config.base_url, "http://127.0.0.1:8080/");
}

#[test]
fn build_fetch_config_rejects_non_http_base_url() {
    let mut map = HashMap::new();
    map.insert("OCTO_BASE_URL", "ftp://cuddlyoctopus.com");

    let result = build_fetch_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "OCTO_BASE_URL"),
        "expected InvalidEnvVar(OCTO_BASE_URL), got: {result:?}"
    );
}

#[test]
fn build_fetch_config_rejects_non_numeric_timeout() {
    let mut map = HashMap::new();
    map.insert("OCTO_HANDSHAKE_TIMEOUT_SECS", "ten");

    let result = build_fetch_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "OCTO_HANDSHAKE_TIMEOUT_SECS"),
        "expected InvalidEnvVar(OCTO_HANDSHAKE_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_fetch_config_rejects_unknown_bool() {
    let mut map = HashMap::new();
    map.insert("OCTO_ACCEPT_INVALID_CERTS", "maybe");

    let result = build_fetch_config(lookup_from_map(&map));
    assert!(result.is_err(), "expected error, got: {result:?}");
}

#[test]
fn parse_bool_value_accepts_common_spellings() {
    assert_eq!(parse_bool_value("TRUE"), Some(true));
    assert_eq!(parse_bool_value(" yes "), Some(true));
    assert_eq!(parse_bool_value("0"), Some(false));
    assert_eq!(parse_bool_value("off"), Some(false));
    assert_eq!(parse_bool_value(""), None);
}

#[test]
fn with_base_url_normalizes_trailing_slash() {
    let config = FetchConfig::default().with_base_url("http://localhost:1234");
    assert_eq!(config.base_url, "http://localhost:1234/");
}
