//! Runtime Configuration
//!
//! The API base URL, request timeout and log level. Each value is read from a
//! `<meta>` tag in `index.html` first, then from the build environment, then
//! falls back to a default.

use log::LevelFilter;
use thiserror::Error;
use wasm_bindgen::JsCast;

pub const META_API_BASE_URL: &str = "rewards-api-base-url";
pub const META_REQUEST_TIMEOUT_MS: &str = "rewards-request-timeout-ms";
pub const META_LOG_LEVEL: &str = "rewards-log-level";

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 15_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("api base url must not be empty")]
    EmptyBaseUrl,
    #[error("api base url must be an absolute path or use http:// or https:// with a host, got `{0}`")]
    InvalidBaseUrl(String),
    #[error("request timeout must be a positive number of milliseconds, got `{0}`")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u32,
    pub log_level: LevelFilter,
}

/// Raw, unvalidated values from one configuration source
#[derive(Debug, Clone, Default)]
pub struct ConfigSource {
    pub api_base_url: Option<String>,
    pub request_timeout_ms: Option<String>,
    pub log_level: Option<String>,
}

impl ConfigSource {
    /// Values from `<meta name=".." content="..">` tags
    pub fn from_document() -> Self {
        Self {
            api_base_url: meta_content(META_API_BASE_URL),
            request_timeout_ms: meta_content(META_REQUEST_TIMEOUT_MS),
            log_level: meta_content(META_LOG_LEVEL),
        }
    }

    /// Values baked in at compile time
    pub fn from_build_env() -> Self {
        Self {
            api_base_url: option_env!("REWARDS_API_BASE_URL").map(String::from),
            request_timeout_ms: option_env!("REWARDS_REQUEST_TIMEOUT_MS").map(String::from),
            log_level: option_env!("REWARDS_LOG_LEVEL").map(String::from),
        }
    }
}

impl AppConfig {
    pub fn from_environment() -> Result<Self, ConfigError> {
        Self::resolve(&ConfigSource::from_document(), &ConfigSource::from_build_env())
    }

    /// Merge two sources; `primary` wins value by value.
    pub fn resolve(primary: &ConfigSource, fallback: &ConfigSource) -> Result<Self, ConfigError> {
        let pick = |a: &Option<String>, b: &Option<String>| {
            non_blank(a).or_else(|| non_blank(b))
        };

        let api_base_url = match pick(&primary.api_base_url, &fallback.api_base_url) {
            Some(raw) => normalize_base_url(&raw)?,
            None => DEFAULT_API_BASE_URL.to_string(),
        };

        let request_timeout_ms = match pick(&primary.request_timeout_ms, &fallback.request_timeout_ms) {
            Some(raw) => match raw.parse::<u32>() {
                Ok(ms) if ms > 0 => ms,
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => DEFAULT_REQUEST_TIMEOUT_MS,
        };

        // An unknown level name is not worth refusing to start over
        let log_level = pick(&primary.log_level, &fallback.log_level)
            .and_then(|raw| console_logger::parse_level(&raw))
            .unwrap_or_else(default_log_level);

        Ok(Self { api_base_url, request_timeout_ms, log_level })
    }
}

pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        // "/" alone trims to nothing: same-origin root
        return if raw.trim().starts_with('/') {
            Ok(String::new())
        } else {
            Err(ConfigError::EmptyBaseUrl)
        };
    }
    if trimmed.starts_with('/') && !trimmed.starts_with("//") {
        return Ok(trimmed.to_string());
    }
    let Some((scheme, remainder)) = trimmed.split_once("://") else {
        return Err(ConfigError::InvalidBaseUrl(raw.trim().to_string()));
    };
    if !(scheme == "http" || scheme == "https") || remainder.is_empty() || remainder.starts_with('/') {
        return Err(ConfigError::InvalidBaseUrl(raw.trim().to_string()));
    }
    Ok(trimmed.to_string())
}

fn default_log_level() -> LevelFilter {
    if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value.as_ref().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()??;
    let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
    Some(meta.content())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(base: Option<&str>, timeout: Option<&str>, level: Option<&str>) -> ConfigSource {
        ConfigSource {
            api_base_url: base.map(String::from),
            request_timeout_ms: timeout.map(String::from),
            log_level: level.map(String::from),
        }
    }

    #[test]
    fn test_normalize_drops_trailing_slash() {
        assert_eq!(normalize_base_url(" https://rewards.example/api/ ").unwrap(), "https://rewards.example/api");
        assert_eq!(normalize_base_url("/api/").unwrap(), "/api");
        assert_eq!(normalize_base_url("/").unwrap(), "");
    }

    #[test]
    fn test_normalize_rejects_bad_urls() {
        assert_eq!(normalize_base_url("   "), Err(ConfigError::EmptyBaseUrl));
        assert!(matches!(normalize_base_url("rewards.example"), Err(ConfigError::InvalidBaseUrl(_))));
        assert!(matches!(normalize_base_url("ftp://rewards.example"), Err(ConfigError::InvalidBaseUrl(_))));
        assert!(matches!(normalize_base_url("https:///api"), Err(ConfigError::InvalidBaseUrl(_))));
        assert!(matches!(normalize_base_url("//cdn.example/api"), Err(ConfigError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_resolve_defaults() {
        let config = AppConfig::resolve(&ConfigSource::default(), &ConfigSource::default()).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
    }

    #[test]
    fn test_resolve_primary_wins_per_value() {
        let primary = source(Some("https://meta.example/api"), None, Some(""));
        let fallback = source(Some("http://localhost:8000/api"), Some("5000"), Some("warn"));
        let config = AppConfig::resolve(&primary, &fallback).unwrap();
        assert_eq!(config.api_base_url, "https://meta.example/api");
        assert_eq!(config.request_timeout_ms, 5000);
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_resolve_rejects_zero_timeout() {
        let primary = source(None, Some("0"), None);
        let err = AppConfig::resolve(&primary, &ConfigSource::default()).unwrap_err();
        assert_eq!(err, ConfigError::InvalidTimeout("0".to_string()));
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let primary = source(None, None, Some("chatty"));
        let config = AppConfig::resolve(&primary, &ConfigSource::default()).unwrap();
        assert_eq!(config.log_level, default_log_level());
    }
}
