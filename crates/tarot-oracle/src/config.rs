//! Configuration for the text-generation client.

use std::time::Duration;

/// Default Gemini API base URL.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default Gemini model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Environment variables consulted for the API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Connection settings for the interpretation service.
#[derive(Debug, Clone)]
pub struct OracleConfig {
    /// API key; `None` makes every request fail as unavailable.
    pub api_key: Option<String>,
    /// Model identifier.
    pub model: String,
    /// API base URL.
    pub endpoint: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

impl OracleConfig {
    /// Build a configuration from the process environment.
    ///
    /// Reads `GEMINI_API_KEY` (falling back to `API_KEY`), `TAROT_MODEL`
    /// and `TAROT_ENDPOINT`. Blank values count as unset.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |name: &str| get(name).filter(|v| !v.trim().is_empty());

        let mut config = Self {
            api_key: API_KEY_VARS.iter().find_map(|name| non_blank(name)),
            ..Self::default()
        };
        if let Some(model) = non_blank("TAROT_MODEL") {
            config.model = model;
        }
        if let Some(endpoint) = non_blank("TAROT_ENDPOINT") {
            config = config.with_endpoint(endpoint);
        }
        config
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the API base URL (a trailing slash is dropped).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
