// config.rs - Runtime configuration for the native side
//
// Everything comes from environment variables, optionally seeded from a
// `.env` file. Site address and Leptos options are read separately by
// `leptos_config` in the server binary.
//
// Variables:
// - MEDIA_API_URL       base url of the upstream media API
// - MEDIA_API_TOKEN     optional bearer token sent upstream
// - SEARCH_DEBOUNCE_MS  quiet period before a search lookup (default 300)
// - API_TIMEOUT_SECS    upstream request timeout (default 10)

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::web_app::model::SearchSettings;
use crate::web_app::search::DEFAULT_DEBOUNCE;

pub const DEFAULT_MEDIA_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_API_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub media_api_url: String,
    pub media_api_token: Option<String>,
    pub search_debounce: Duration,
    pub api_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            media_api_url: DEFAULT_MEDIA_API_URL.to_string(),
            media_api_token: None,
            search_debounce: DEFAULT_DEBOUNCE,
            api_timeout: DEFAULT_API_TIMEOUT,
        }
    }
}

impl AppConfig {
    /// The part of the configuration the browser search box needs
    pub fn search_settings(&self) -> SearchSettings {
        SearchSettings::from_debounce(self.search_debounce)
    }

    /// Load `.env` (if present) and read the process environment
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys keep their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let media_api_url = get("MEDIA_API_URL").unwrap_or(defaults.media_api_url);

        let search_debounce = match get("SEARCH_DEBOUNCE_MS") {
            Some(raw) => Duration::from_millis(
                raw.parse::<u64>()
                    .with_context(|| format!("SEARCH_DEBOUNCE_MS must be milliseconds, got '{}'", raw))?,
            ),
            None => defaults.search_debounce,
        };

        let api_timeout = match get("API_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(
                raw.parse::<u64>()
                    .with_context(|| format!("API_TIMEOUT_SECS must be seconds, got '{}'", raw))?,
            ),
            None => defaults.api_timeout,
        };

        Ok(Self {
            media_api_url,
            media_api_token: get("MEDIA_API_TOKEN"),
            search_debounce,
            api_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.search_debounce, Duration::from_millis(300));
    }

    #[test]
    fn test_reads_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("MEDIA_API_URL", "https://media.example.com/api"),
            ("MEDIA_API_TOKEN", "secret"),
            ("SEARCH_DEBOUNCE_MS", "150"),
            ("API_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert_eq!(config.media_api_url, "https://media.example.com/api");
        assert_eq!(config.media_api_token.as_deref(), Some("secret"));
        assert_eq!(config.search_debounce, Duration::from_millis(150));
        assert_eq!(config.api_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = AppConfig::from_lookup(lookup(&[("MEDIA_API_TOKEN", "  ")])).unwrap();
        assert!(config.media_api_token.is_none());
    }

    #[test]
    fn test_debounce_reaches_search_settings() {
        let config = AppConfig::from_lookup(lookup(&[("SEARCH_DEBOUNCE_MS", "50")])).unwrap();
        let settings = config.search_settings();
        assert_eq!(settings.debounce_ms, 50);
        assert_eq!(settings.debounce(), Duration::from_millis(50));

        let defaults = AppConfig::default().search_settings();
        assert_eq!(defaults, SearchSettings::default());
        assert_eq!(defaults.debounce(), DEFAULT_DEBOUNCE);
    }

    #[test]
    fn test_rejects_bad_debounce() {
        let err = AppConfig::from_lookup(lookup(&[("SEARCH_DEBOUNCE_MS", "soon")])).unwrap_err();
        assert!(err.to_string().contains("SEARCH_DEBOUNCE_MS"));
    }
}
