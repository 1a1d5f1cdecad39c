use std::path::PathBuf;

use crate::app_config::{
    clamp_page_size, AppConfig, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_OUTPUT_PATH,
    DEFAULT_QUERY, DEFAULT_TWITTER_BASE_URL, MAX_PAGE_SIZE,
};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
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
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Both credentials are checked before anything else so a single error names
/// every missing one. Page sizes are clamped to the API's `[10, 100]` window.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let non_empty = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let or_default =
        |var: &str, default: &str| -> String { non_empty(var).unwrap_or_else(|| default.to_string()) };

    // Any integer is accepted and clamped; zero and negatives land on the floor.
    let parse_page_size = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        let requested = raw.parse::<i64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })?;
        Ok(clamp_page_size(
            u32::try_from(requested.max(0)).unwrap_or(MAX_PAGE_SIZE),
        ))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let twitter_bearer_token = non_empty("TWITTER_BEARER_TOKEN");
    let gemini_api_key = non_empty("GEMINI_API_KEY");

    let (twitter_bearer_token, gemini_api_key) = match (twitter_bearer_token, gemini_api_key) {
        (Some(t), Some(g)) => (t, g),
        (t, g) => {
            let mut missing = Vec::new();
            if t.is_none() {
                missing.push("TWITTER_BEARER_TOKEN");
            }
            if g.is_none() {
                missing.push("GEMINI_API_KEY");
            }
            return Err(ConfigError::MissingEnvVar(missing.join(", ")));
        }
    };

    let twitter_query = or_default("TWITTER_QUERY", DEFAULT_QUERY);
    let max_mentions = parse_page_size("MAX_MENTIONS_TO_FETCH", "10")?;
    let max_comments_per_mention = parse_page_size("MAX_COMMENTS_PER_MENTION", "10")?;
    let gemini_model = or_default("GEMINI_MODEL", DEFAULT_GEMINI_MODEL);
    let output_path = PathBuf::from(or_default("AIRPULSE_OUTPUT_PATH", DEFAULT_OUTPUT_PATH));
    let request_timeout_secs = parse_u64("AIRPULSE_REQUEST_TIMEOUT_SECS", "30")?;
    let log_level = or_default("AIRPULSE_LOG_LEVEL", "info");
    let twitter_base_url = or_default("TWITTER_API_BASE_URL", DEFAULT_TWITTER_BASE_URL);
    let gemini_base_url = or_default("GEMINI_API_BASE_URL", DEFAULT_GEMINI_BASE_URL);

    Ok(AppConfig {
        twitter_bearer_token,
        gemini_api_key,
        twitter_query,
        max_mentions,
        max_comments_per_mention,
        gemini_model,
        output_path,
        request_timeout_secs,
        log_level,
        twitter_base_url,
        gemini_base_url,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
