//! Client configuration.
//!
//! Built from defaults, then the environment, then command-line overrides.
//!
//! # Example
//!
//! ```ignore
//! use unmutte::config::ClientConfig;
//!
//! let (config, ignored) = ClientConfig::from_env();
//! let config = config.with_backend_url("https://api.unmutte.example");
//! ```
//!
//! Logging is configured from the result, so `from_env` cannot log its own
//! complaints. Rejected values come back as [`IgnoredVar`]s for the caller to
//! report once a subscriber is installed.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::backend::DEFAULT_BACKEND_URL;

/// Environment variable overriding the backend base URL.
pub const BACKEND_URL_ENV: &str = "UNMUTTE_BACKEND_URL";
/// Environment variable holding a tracing filter directive.
pub const LOG_FILTER_ENV: &str = "UNMUTTE_LOG";
/// Environment variable overriding the request timeout, in whole seconds.
pub const TIMEOUT_ENV: &str = "UNMUTTE_TIMEOUT_SECS";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_BREATH_PERIOD: Duration = Duration::from_secs(1);
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL all endpoint paths are appended to
    pub backend_url: String,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Interval of the breathing countdown tick
    pub breath_period: Duration,
    /// tracing-subscriber filter directive
    pub log_filter: String,
    /// Directory for the log file; `None` picks the platform data dir
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
            breath_period: DEFAULT_BREATH_PERIOD,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_dir: None,
        }
    }
}

/// An environment variable that was set but could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredVar {
    pub name: &'static str,
    pub value: String,
}

impl fmt::Display for IgnoredVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:?}", self.name, self.value)
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `UNMUTTE_*` variables.
    ///
    /// Empty values are skipped. An unparsable or zero timeout keeps the
    /// default and is returned in the ignored list.
    pub fn from_env() -> (Self, Vec<IgnoredVar>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> (Self, Vec<IgnoredVar>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();
        let mut ignored = Vec::new();

        if let Some(url) = get(BACKEND_URL_ENV) {
            config = config.with_backend_url(url);
        }
        if let Some(filter) = get(LOG_FILTER_ENV) {
            config.log_filter = filter;
        }
        if let Some(raw) = get(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.request_timeout = Duration::from_secs(secs),
                _ => ignored.push(IgnoredVar {
                    name: TIMEOUT_ENV,
                    value: raw,
                }),
            }
        }
        (config, ignored)
    }

    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_breath_period(mut self, period: Duration) -> Self {
        self.breath_period = period;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.backend_url, "http://localhost:8000");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.breath_period, Duration::from_secs(1));
        assert_eq!(config.log_filter, "info");
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let config = ClientConfig::new()
            .with_backend_url("https://api.example/")
            .with_request_timeout(Duration::from_secs(5))
            .with_breath_period(Duration::from_millis(10))
            .with_log_filter("debug")
            .with_log_dir("/tmp/unmutte");

        assert_eq!(config.backend_url, "https://api.example");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.breath_period, Duration::from_millis(10));
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/unmutte")));
    }

    #[test]
    fn test_lookup_overrides() {
        let (config, ignored) = ClientConfig::from_lookup(lookup(&[
            (BACKEND_URL_ENV, "http://10.0.0.2:9000"),
            (LOG_FILTER_ENV, "unmutte=trace"),
            (TIMEOUT_ENV, "12"),
        ]));
        assert_eq!(config.backend_url, "http://10.0.0.2:9000");
        assert_eq!(config.log_filter, "unmutte=trace");
        assert_eq!(config.request_timeout, Duration::from_secs(12));
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_lookup_ignores_empty_and_invalid() {
        let (config, ignored) = ClientConfig::from_lookup(lookup(&[
            (BACKEND_URL_ENV, "  "),
            (TIMEOUT_ENV, "soon"),
        ]));
        assert_eq!(config, ClientConfig::default());
        assert_eq!(
            ignored,
            vec![IgnoredVar {
                name: TIMEOUT_ENV,
                value: "soon".to_string()
            }]
        );
        assert_eq!(ignored[0].to_string(), "UNMUTTE_TIMEOUT_SECS=\"soon\"");

        let (zero, ignored) = ClientConfig::from_lookup(lookup(&[(TIMEOUT_ENV, "0")]));
        assert_eq!(zero.request_timeout, Duration::from_secs(30));
        assert_eq!(ignored.len(), 1);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        std::env::set_var(BACKEND_URL_ENV, "http://env.test:1234/");
        let (config, _) = ClientConfig::from_env();
        std::env::remove_var(BACKEND_URL_ENV);
        assert_eq!(config.backend_url, "http://env.test:1234");
    }

    #[test]
    #[serial]
    fn test_from_env_without_variables_is_default() {
        std::env::remove_var(BACKEND_URL_ENV);
        std::env::remove_var(LOG_FILTER_ENV);
        std::env::remove_var(TIMEOUT_ENV);
        assert_eq!(ClientConfig::from_env(), (ClientConfig::default(), Vec::new()));
    }
}
