//! # Application Configuration
//!
//! Configuration loaded from environment variables, validated on startup to
//! fail fast if misconfigured. Every value has a development default so the
//! client runs against a local backend with no environment at all.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Client configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the credit-management backend API, without a trailing
    /// slash (endpoint paths are appended verbatim).
    pub api_base_url: String,

    /// File the serialized session record is persisted to. Overwritten
    /// wholesale on every login/refresh, deleted wholesale on logout.
    pub session_file: PathBuf,

    /// Per-request HTTP timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let api_base_url = env::var("DESK_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8085/api".to_string());

        let session_file = env::var("DESK_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./creditdesk-session.json"));

        let request_timeout_secs = env::var("DESK_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|e| format!("DESK_REQUEST_TIMEOUT_SECS must be a valid number: {}", e))?;

        let config = Self {
            api_base_url,
            session_file,
            request_timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err("DESK_API_BASE_URL must be an http(s) URL".to_string());
        }

        if self.request_timeout_secs < 1 || self.request_timeout_secs > 300 {
            return Err("DESK_REQUEST_TIMEOUT_SECS must be between 1 and 300".to_string());
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8085/api".to_string(),
            session_file: PathBuf::from("./creditdesk-session.json"),
            request_timeout_secs: 10,
        }
    }
}
