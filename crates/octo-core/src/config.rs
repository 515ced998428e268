use crate::fetch_config::{normalize_base_url, FetchConfig};
use crate::ConfigError;

/// Load fetch configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_fetch_config() -> Result<FetchConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_fetch_config_from_env()
}

/// Load fetch configuration from environment variables already in the process.
///
/// Unlike [`load_fetch_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_fetch_config_from_env() -> Result<FetchConfig, ConfigError> {
    build_fetch_config(|key| std::env::var(key))
}

/// Build fetch configuration using the provided env-var lookup function.
///
/// Every variable is optional; unset variables fall back to
/// [`FetchConfig::default`].
fn build_fetch_config<F>(lookup: F) -> Result<FetchConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let defaults = FetchConfig::default();

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Ok(default),
        }
    };

    let parse_bool = |var: &str, default: bool| -> Result<bool, ConfigError> {
        match lookup(var) {
            Ok(raw) => parse_bool_value(&raw).ok_or_else(|| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected true/false, got \"{raw}\""),
            }),
            Err(_) => Ok(default),
        }
    };

    let base_url = normalize_base_url(&or_default("OCTO_BASE_URL", &defaults.base_url));
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(ConfigError::InvalidEnvVar {
            var: "OCTO_BASE_URL".to_string(),
            reason: format!("\"{base_url}\" is not an http(s) URL"),
        });
    }

    let user_agent = or_default("OCTO_USER_AGENT", &defaults.user_agent);
    let accept = or_default("OCTO_ACCEPT", &defaults.accept);
    let handshake_timeout_secs =
        parse_u64("OCTO_HANDSHAKE_TIMEOUT_SECS", defaults.handshake_timeout_secs)?;
    let idle_timeout_secs = parse_u64("OCTO_IDLE_TIMEOUT_SECS", defaults.idle_timeout_secs)?;
    let request_timeout_secs =
        parse_u64("OCTO_REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs)?;
    let accept_invalid_certs =
        parse_bool("OCTO_ACCEPT_INVALID_CERTS", defaults.accept_invalid_certs)?;
    let log_level = or_default("OCTO_LOG_LEVEL", &defaults.log_level);

    Ok(FetchConfig {
        base_url,
        user_agent,
        accept,
        handshake_timeout_secs,
        idle_timeout_secs,
        request_timeout_secs,
        accept_invalid_certs,
        log_level,
    })
}

fn parse_bool_value(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
