//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::errors::{Result, TranslationError};

/// Public LibreTranslate-compatible instance used when no override is set
pub const DEFAULT_ENDPOINT: &str = "https://translate.argosopentech.com/translate";

/// Environment variable holding the endpoint override
pub const ENV_API_URL: &str = "TRANSLATE_API_URL";

/// Environment variable holding the bearer credential
pub const ENV_API_KEY: &str = "TRANSLATE_API_KEY";

/// Environment variable holding the transport timeout in milliseconds
pub const ENV_TIMEOUT_MS: &str = "REQUEST_TIMEOUT_MS";

const DEFAULT_TIMEOUT_MS: u64 = 30000;

/// Where requests go and which credential they carry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Endpoint override, used verbatim as the POST target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Bearer credential, attached whenever present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl EndpointConfig {
    /// Endpoint with an explicit override and optional credential
    pub fn new(url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            url: Some(url.into()),
            api_key,
        }
    }

    /// Endpoint override, ignoring blank values
    pub fn override_url(&self) -> Option<&str> {
        non_blank(self.url.as_deref())
    }

    /// The URL a request is actually sent to
    pub fn resolved_url(&self) -> &str {
        self.override_url().unwrap_or(DEFAULT_ENDPOINT)
    }

    /// Whether an override replaces the default endpoint
    pub fn is_custom(&self) -> bool {
        self.override_url().is_some()
    }

    /// Value for the `Authorization` header, if a credential is configured
    pub fn authorization(&self) -> Option<String> {
        non_blank(self.api_key.as_deref()).map(|key| format!("Bearer {}", key))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Configuration for the translation client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Endpoint and credential
    #[serde(default)]
    pub endpoint: EndpointConfig,
    /// Transport timeout for one exchange
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: EndpointConfig::default(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl TranslatorConfig {
    /// Load the optional config file, then let the environment override it
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// [`TranslatorConfig::load`] through an arbitrary key lookup.
    ///
    /// Empty values count as unset.
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_lookup(lookup)?;
        Ok(config)
    }

    /// Overwrite fields whose variables are set to a non-empty value
    fn apply_lookup<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(raw) = read(ENV_TIMEOUT_MS) {
            self.timeout_ms = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| TranslationError::ConfigError {
                    message: format!("{} must be a number of milliseconds: {}", ENV_TIMEOUT_MS, e),
                })?;
        }
        if let Some(url) = read(ENV_API_URL) {
            self.endpoint.url = Some(url);
        }
        if let Some(api_key) = read(ENV_API_KEY) {
            self.endpoint.api_key = Some(api_key);
        }

        Ok(())
    }

    /// Apply command-line overrides on top of the loaded configuration
    pub fn with_overrides(
        mut self,
        url: Option<String>,
        api_key: Option<String>,
        timeout_ms: Option<u64>,
    ) -> Self {
        if let Some(url) = url {
            self.endpoint.url = Some(url);
        }
        if let Some(api_key) = api_key {
            self.endpoint.api_key = Some(api_key);
        }
        if let Some(timeout_ms) = timeout_ms {
            self.timeout_ms = timeout_ms;
        }
        self
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = self.endpoint.override_url() {
            let parsed = reqwest::Url::parse(url).map_err(|e| TranslationError::ConfigError {
                message: format!("invalid endpoint URL {:?}: {}", url, e),
            })?;

            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(TranslationError::ConfigError {
                    message: format!("endpoint must use http or https, got {}", parsed.scheme()),
                });
            }
        }

        if self.timeout_ms == 0 {
            return Err(TranslationError::ConfigError {
                message: "timeout_ms must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
