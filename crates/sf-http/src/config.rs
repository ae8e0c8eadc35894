//! Analysis API settings

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default API location for local development
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default request timeout (analysis runs three model calls)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Where and how to reach the analysis API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API root; endpoints are resolved below it
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Configuration for `base_url` with default timeout
    #[inline]
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// With request timeout
    #[inline]
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Timeout as a duration
    #[inline]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
