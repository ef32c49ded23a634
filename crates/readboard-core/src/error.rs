//! Error types.
//!
//! - [`FetchError`] - network/fetch failures from the feed API
//! - [`ConfigError`] - dashboard configuration that failed to load
//!
//! Malformed URL parameters are deliberately absent: they are normalized to
//! their defaults and never surface as errors.

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, DNS, offline)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Non-2xx response
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Response body was not text
    #[error("Invalid response content")]
    InvalidContent,
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    #[error("Request timed out")]
    Timeout,
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid config TOML: {0}")]
    Parse(String),
    /// A field parsed but is out of range.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.message().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(FetchError::HttpError(503).to_string(), "HTTP error: 503");
        assert_eq!(
            ConfigError::InvalidValue {
                field: "refresh.interval_secs",
                reason: "must be greater than zero".to_string(),
            }
            .to_string(),
            "invalid value for `refresh.interval_secs`: must be greater than zero"
        );
    }
}
