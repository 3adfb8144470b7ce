//! Client configuration.

use std::env;
use std::time::Duration;

use crate::book::BookId;
use crate::error::ConfigError;

/// Environment variable holding the backend base URL.
pub const BACKEND_URL_ENV: &str = "BACKEND_URL";
/// Environment variable holding the request timeout in milliseconds.
pub const BACKEND_TIMEOUT_ENV: &str = "BACKEND_TIMEOUT_MS";

/// Configuration for talking to the books backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Base URL of the backend, without a trailing slash.
    /// The collection resource lives at `{backend_url}/books`.
    pub backend_url: String,

    /// Timeout applied to every remote call.
    pub request_timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:3000".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl CatalogConfig {
    /// Config pointing at `backend_url`, other values default.
    pub fn new(backend_url: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            backend_url: normalize_url(backend_url.into())?,
            ..Self::default()
        })
    }

    /// Read `BACKEND_URL` and `BACKEND_TIMEOUT_MS`, falling back to the
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(BACKEND_URL_ENV) {
            config.backend_url = normalize_url(url)?;
        }

        if let Some(raw) = lookup(BACKEND_TIMEOUT_ENV) {
            let millis: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    key: BACKEND_TIMEOUT_ENV,
                    value: raw.clone(),
                })?;
            config.request_timeout = Duration::from_millis(millis);
        }

        Ok(config)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// URL of the books collection.
    pub fn books_url(&self) -> String {
        format!("{}/books", self.backend_url)
    }

    /// URL of a single book.
    pub fn book_url(&self, id: BookId) -> String {
        format!("{}/books/{}", self.backend_url, id)
    }
}

fn normalize_url(url: String) -> Result<String, ConfigError> {
    let trimmed = url.trim();
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidUrl {
            url,
            reason: "expected an http:// or https:// url".to_string(),
        });
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}
