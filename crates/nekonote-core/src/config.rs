use crate::app_config::{AppConfig, LocaleFallback};
use crate::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function,
/// so tests can drive it from a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let base_url = lookup("NEXT_PUBLIC_APP_URL")
        .ok()
        .filter(|v| !v.trim().is_empty());
    let config_dir = PathBuf::from(or_default("NEKONOTE_CONFIG_DIR", "./config"));
    let log_level = or_default("NEKONOTE_LOG_LEVEL", "info");
    let locale_fallback = parse_locale_fallback(&or_default("NEKONOTE_LOCALE_FALLBACK", "exact"))?;

    Ok(AppConfig {
        base_url,
        config_dir,
        log_level,
        locale_fallback,
    })
}

fn parse_locale_fallback(s: &str) -> Result<LocaleFallback, ConfigError> {
    s.parse::<LocaleFallback>()
        .map_err(|reason| ConfigError::InvalidEnvVar {
            var: "NEKONOTE_LOCALE_FALLBACK".to_string(),
            reason,
        })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
