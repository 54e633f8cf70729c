//! Connection settings for [`HttpRequester`](crate::HttpRequester).

use std::fmt;
use std::num::ParseIntError;
use std::time::Duration;

/// Environment variable holding the base endpoint of the API.
pub const ENV_ENDPOINT: &str = "LIMEPAY_ENV";
/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "LIMEPAY_API_KEY";
/// Environment variable holding the API secret.
pub const ENV_API_SECRET: &str = "LIMEPAY_API_SECRET";
/// Optional environment variable holding the request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "LIMEPAY_TIMEOUT_SECS";

/// Errors that can occur while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("environment variable {0} is not set")]
    Missing(&'static str),

    /// The timeout is not a whole number of seconds.
    #[error("invalid {var}: {source}")]
    InvalidTimeout {
        /// Name of the offending variable.
        var: &'static str,
        /// The underlying parse error.
        #[source]
        source: ParseIntError,
    },
}

/// Base endpoint, credentials, and transport options of a requester.
///
/// The base endpoint is used verbatim: request routes are appended to it
/// without adding or removing slashes.
#[derive(Clone)]
pub struct RequesterConfig {
    /// Base endpoint, e.g. `https://api.limepay.io/v1`.
    pub base_url: String,
    /// API key, sent as the Basic Auth username.
    pub api_key: String,
    /// API secret, sent as the Basic Auth password.
    pub api_secret: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Pre-built HTTP client to reuse. A fresh one is built when `None`.
    pub http_client: Option<reqwest::Client>,
}

impl fmt::Debug for RequesterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequesterConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("http_client", &self.http_client.is_some())
            .finish()
    }
}

impl RequesterConfig {
    /// Creates a configuration with no timeout and a default HTTP client.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            timeout: None,
            http_client: None,
        }
    }

    /// Sets a timeout for every request.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Reuses an existing HTTP client instead of building one.
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Reads the configuration from `LIMEPAY_ENV`, `LIMEPAY_API_KEY`,
    /// `LIMEPAY_API_SECRET`, and optionally `LIMEPAY_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is missing or the
    /// timeout does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));
        let mut config = Self::new(
            required(ENV_ENDPOINT)?,
            required(ENV_API_KEY)?,
            required(ENV_API_SECRET)?,
        );
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs = secs
                .trim()
                .parse::<u64>()
                .map_err(|source| ConfigError::InvalidTimeout {
                    var: ENV_TIMEOUT_SECS,
                    source,
                })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = RequesterConfig::new("http://localhost", "key", "super-secret");
        let debug = format!("{config:?}");
        assert!(debug.contains("key"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_from_lookup_reads_all_variables() {
        let config = RequesterConfig::from_lookup(lookup(&[
            (ENV_ENDPOINT, "https://api.limepay.io/v1"),
            (ENV_API_KEY, "key"),
            (ENV_API_SECRET, "secret"),
            (ENV_TIMEOUT_SECS, "30"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://api.limepay.io/v1");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.api_secret, "secret");
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_from_lookup_timeout_is_optional() {
        let config = RequesterConfig::from_lookup(lookup(&[
            (ENV_ENDPOINT, "http://localhost"),
            (ENV_API_KEY, "key"),
            (ENV_API_SECRET, "secret"),
        ]))
        .unwrap();
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_from_lookup_missing_secret() {
        let err = RequesterConfig::from_lookup(lookup(&[
            (ENV_ENDPOINT, "http://localhost"),
            (ENV_API_KEY, "key"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Missing(ENV_API_SECRET)));
    }

    #[test]
    fn test_from_lookup_bad_timeout() {
        let err = RequesterConfig::from_lookup(lookup(&[
            (ENV_ENDPOINT, "http://localhost"),
            (ENV_API_KEY, "key"),
            (ENV_API_SECRET, "secret"),
            (ENV_TIMEOUT_SECS, "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout { .. }));
    }
}
