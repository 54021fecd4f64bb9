//! Application configuration.
//!
//! Batch policy (size and pacing delay) and the endpoint URL are
//! configuration with documented defaults, overridable through the
//! environment at startup and editable per-session in the Settings view.

use std::env;
use std::time::Duration;

/// Default wallet pre-generation endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/wallet/generate";

/// How many requests are in flight at once within a batch
pub const DEFAULT_BATCH_SIZE: usize = 5;

/// Pause between batches, a courtesy to rate-limited endpoints
pub const DEFAULT_BATCH_DELAY_MS: u64 = 1000;

/// Per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct Config {
    pub endpoint_url: String,
    pub batch_size: usize,
    pub batch_delay_ms: u64,
    pub request_timeout_secs: u64,
    pub export_directory: String, // Directory suggested for saving exported files
}

impl Config {
    pub fn new(endpoint_url: String) -> Self {
        let batch_size = env::var("WALGEN_BATCH_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&size| size > 0)
            .unwrap_or(DEFAULT_BATCH_SIZE);

        let batch_delay_ms = env::var("WALGEN_BATCH_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_BATCH_DELAY_MS);

        let request_timeout_secs = env::var("WALGEN_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        // Default export directory to user's documents or current directory
        let export_directory = env::var("USERPROFILE")
            .or_else(|_| env::var("HOME"))
            .ok()
            .map(|home| {
                let mut path = std::path::PathBuf::from(home);
                path.push("Documents");
                path.push("Walgen");
                path.to_string_lossy().to_string()
            })
            .unwrap_or_else(|| ".".to_string());

        Self {
            endpoint_url,
            batch_size,
            batch_delay_ms,
            request_timeout_secs,
            export_directory,
        }
    }

    /// Read the endpoint from the environment, falling back to the default.
    pub fn from_env() -> Self {
        let endpoint = env::var("WALGEN_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self::new(endpoint)
    }

    pub fn batch_delay(&self) -> Duration {
        Duration::from_millis(self.batch_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::new(DEFAULT_ENDPOINT.to_string());
        assert_eq!(config.endpoint_url, DEFAULT_ENDPOINT);
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(config.batch_delay_ms, DEFAULT_BATCH_DELAY_MS);
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
        assert!(!config.export_directory.is_empty());
    }

    #[test]
    fn test_batch_delay_duration() {
        let mut config = Config::new(DEFAULT_ENDPOINT.to_string());
        config.batch_delay_ms = 250;
        assert_eq!(config.batch_delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_request_timeout_duration() {
        let mut config = Config::new(DEFAULT_ENDPOINT.to_string());
        config.request_timeout_secs = 5;
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }
}
