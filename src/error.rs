//! Error types for catalog operations.

use thiserror::Error;

/// A create was attempted with a required field left empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// A remote call against the books backend failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// Connection refused, timed out, or the request could not be sent.
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("backend returned {status} for {url}")]
    Status { status: u16, url: String },

    /// The response body was not the expected JSON.
    #[error("failed to decode backend response: {0}")]
    Decode(String),

    /// The backend refused to serve the request.
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            let url = err.url().map(|u| u.to_string()).unwrap_or_default();
            BackendError::Status {
                status: status.as_u16(),
                url,
            }
        } else if err.is_decode() {
            BackendError::Decode(err.to_string())
        } else {
            BackendError::Transport(err.to_string())
        }
    }
}

/// Error returned by a controller operation.
///
/// By the time the caller sees one, it has already been logged and the
/// collection is exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl CatalogError {
    pub fn is_validation(&self) -> bool {
        matches!(self, CatalogError::Validation(_))
    }
}

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid backend url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}
