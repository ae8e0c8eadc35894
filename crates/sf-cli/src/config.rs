//! Application configuration
//!
//! Resolution order: defaults, optional TOML file, `SF_*` environment
//! variables, then command-line flags.

use serde::{Deserialize, Serialize};
use sf_core::CurrentUser;
use sf_http::ApiConfig;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Overrides `api.base_url`
pub const ENV_BASE_URL: &str = "SF_API_BASE_URL";
/// Overrides `api.timeout_secs`
pub const ENV_TIMEOUT_SECS: &str = "SF_API_TIMEOUT_SECS";
/// Overrides `logging.level`
pub const ENV_LOG_LEVEL: &str = "SF_LOG_LEVEL";
/// Overrides `logging.format`
pub const ENV_LOG_FORMAT: &str = "SF_LOG_FORMAT";
/// Overrides `history.path`
pub const ENV_HISTORY_PATH: &str = "SF_HISTORY_PATH";
/// Overrides `identity.user_id`
pub const ENV_USER_ID: &str = "SF_USER_ID";
/// Overrides `identity.email`
pub const ENV_USER_EMAIL: &str = "SF_USER_EMAIL";

/// Default history file, relative to the working directory
pub const DEFAULT_HISTORY_PATH: &str = ".solution-finder/history.json";

/// Configuration could not be loaded
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File unreadable
    #[error("cannot read config file {path}: {source}")]
    Read {
        /// File asked for
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// File is not valid TOML for [`AppConfig`]
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Environment variable holds an unusable value
    #[error("invalid value {value:?} for {var}")]
    InvalidEnv {
        /// Variable name
        var: &'static str,
        /// Offending value
        value: String,
    },
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "human" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Where submission history is kept
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// JSON file holding every record
    pub path: PathBuf,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_HISTORY_PATH),
        }
    }
}

/// Signed-in identity; no user id means signed out
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Stable user id
    pub user_id: Option<String>,
    /// Sign-in email
    pub email: Option<String>,
}

/// Complete configuration of the binary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Analysis API
    pub api: ApiConfig,
    /// Logging
    pub logging: LoggingConfig,
    /// Submission history
    pub history: HistoryConfig,
    /// Current user
    pub identity: IdentityConfig,
}

impl AppConfig {
    /// With API base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = url.into();
        self
    }

    /// With request timeout
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.api.timeout_secs = secs;
        self
    }

    /// With log filter
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    /// With log format
    #[must_use]
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.logging.format = format;
        self
    }

    /// With history file
    #[must_use]
    pub fn with_history_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.history.path = path.into();
        self
    }

    /// Signed in as `user_id`
    #[must_use]
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.identity.user_id = Some(user_id.into());
        self
    }

    /// The signed-in user, if any
    #[must_use]
    pub fn current_user(&self) -> Option<CurrentUser> {
        let id = self.identity.user_id.as_deref()?.trim();
        if id.is_empty() {
            return None;
        }
        Some(CurrentUser::new(
            id,
            self.identity.email.clone().unwrap_or_default(),
        ))
    }

    /// Parse a TOML document; absent keys keep their defaults
    ///
    /// # Errors
    /// `ConfigError::Parse` if the document does not match
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    /// `ConfigError::Read` or `ConfigError::Parse`
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Apply `SF_*` overrides looked up through `lookup`
    ///
    /// # Errors
    /// `ConfigError::InvalidEnv` for a non-numeric timeout or unknown format
    pub fn apply_env_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BASE_URL) {
            self.api.base_url = url;
        }
        if let Some(value) = lookup(ENV_TIMEOUT_SECS) {
            self.api.timeout_secs = value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_TIMEOUT_SECS,
                value: value.clone(),
            })?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Some(value) = lookup(ENV_LOG_FORMAT) {
            self.logging.format = value.parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_LOG_FORMAT,
                value: value.clone(),
            })?;
        }
        if let Some(path) = lookup(ENV_HISTORY_PATH) {
            self.history.path = PathBuf::from(path);
        }
        if let Some(id) = lookup(ENV_USER_ID) {
            self.identity.user_id = Some(id);
        }
        if let Some(email) = lookup(ENV_USER_EMAIL) {
            self.identity.email = Some(email);
        }
        Ok(self)
    }

    /// Defaults or `path`, then the process environment
    ///
    /// # Errors
    /// Any [`ConfigError`]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.apply_env_from(|var| std::env::var(var).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_local_api() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.timeout_secs, 60);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.history.path, PathBuf::from(".solution-finder/history.json"));
        assert_eq!(config.current_user(), None);
    }

    #[test]
    fn identity_from_toml_and_environment() {
        let config = AppConfig::from_toml_str(
            r#"
            [identity]
            user_id = "u-42"

            [history]
            path = "/var/lib/sf/history.json"
            "#,
        )
        .unwrap()
        .apply_env_from(env(&[(ENV_USER_EMAIL, "anna@example.com")]))
        .unwrap();

        assert_eq!(
            config.current_user(),
            Some(CurrentUser::new("u-42", "anna@example.com"))
        );
        assert_eq!(config.history.path, PathBuf::from("/var/lib/sf/history.json"));
    }

    #[test]
    fn blank_user_id_is_signed_out() {
        let config = AppConfig::default().apply_env_from(env(&[(ENV_USER_ID, "  ")])).unwrap();
        assert_eq!(config.current_user(), None);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [api]
            base_url = "https://analysis.example.com"

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(
            config,
            AppConfig::default()
                .with_base_url("https://analysis.example.com")
                .with_log_format(LogFormat::Json)
        );
    }

    #[test]
    fn malformed_toml_is_rejected() {
        assert!(matches!(
            AppConfig::from_toml_str("[api]\ntimeout_secs = \"soon\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn environment_overrides_file_values() {
        let config = AppConfig::default()
            .with_timeout_secs(5)
            .apply_env_from(env(&[
                (ENV_BASE_URL, "http://engine:9000"),
                (ENV_TIMEOUT_SECS, "120"),
                (ENV_LOG_LEVEL, "debug"),
                (ENV_LOG_FORMAT, "JSON"),
            ]))
            .unwrap();
        assert_eq!(config.api.base_url, "http://engine:9000");
        assert_eq!(config.api.timeout_secs, 120);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn unusable_environment_values_are_errors() {
        let err = AppConfig::default()
            .apply_env_from(env(&[(ENV_TIMEOUT_SECS, "soon")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { var: ENV_TIMEOUT_SECS, .. }));

        let err = AppConfig::default()
            .apply_env_from(env(&[(ENV_LOG_FORMAT, "xml")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { var: ENV_LOG_FORMAT, .. }));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = AppConfig::from_file(Path::new("/nonexistent/solution-finder.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/solution-finder.toml"));
    }
}
