//! Logger configuration

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Settings consumed by [`Logger::initialize`](crate::Logger::initialize)
///
/// Every key is optional when deserializing. Empty `file_path` and
/// `remote_url` disable the matching writer.
///
/// # Example
///
/// ```
/// use rust_loki_logger::LoggerConfig;
///
/// let config = LoggerConfig::new()
///     .with_level("warn")
///     .with_file_path("app.log")
///     .with_label("service", "billing");
///
/// assert_eq!(config.labels["service"], "billing");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum level: "debug", "info", "warn" or "error"; anything else means "info"
    pub level: String,
    pub file_path: String,
    /// Loki push endpoint, e.g. `http://localhost:3100/loki/api/v1/push`
    #[serde(alias = "loki_url")]
    pub remote_url: String,
    /// Static labels attached to every entry
    pub labels: BTreeMap<String, String>,
    /// Also print entries to the terminal
    pub console: bool,
    /// Report swallowed writer failures on stderr
    pub report_writer_errors: bool,
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = path.into();
        self
    }

    #[must_use]
    pub fn with_remote_url(mut self, url: impl Into<String>) -> Self {
        self.remote_url = url.into();
        self
    }

    #[must_use]
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    #[must_use]
    pub fn with_report_writer_errors(mut self, enabled: bool) -> Self {
        self.report_writer_errors = enabled;
        self
    }

    /// Minimum level actually applied by the logger
    pub fn effective_level(&self) -> LogLevel {
        LogLevel::parse_or_default(&self.level)
    }

    /// Strict check for callers that want to reject typos up front
    ///
    /// The logger itself never calls this; it accepts any configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.level.trim().is_empty() {
            self.level.parse::<LogLevel>()?;
        }

        if !self.remote_url.is_empty()
            && !(self.remote_url.starts_with("http://") || self.remote_url.starts_with("https://"))
        {
            return Err(LoggerError::config(
                "LoggerConfig",
                format!("remote_url must be an http(s) URL, got '{}'", self.remote_url),
            ));
        }

        if self.labels.keys().any(|k| k.trim().is_empty()) {
            return Err(LoggerError::config("LoggerConfig", "label keys must not be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_is_info() {
        assert_eq!(LoggerConfig::new().effective_level(), LogLevel::Info);
        assert_eq!(
            LoggerConfig::new().with_level("loud").effective_level(),
            LogLevel::Info
        );
        assert_eq!(
            LoggerConfig::new().with_level("warn").effective_level(),
            LogLevel::Warn
        );
    }

    #[test]
    fn test_deserialize_partial() {
        let config: LoggerConfig = serde_json::from_str(
            r#"{"level":"debug","loki_url":"http://localhost:3100/loki/api/v1/push","labels":{"env":"dev"}}"#,
        )
        .unwrap();

        assert_eq!(config.effective_level(), LogLevel::Debug);
        assert_eq!(config.remote_url, "http://localhost:3100/loki/api/v1/push");
        assert_eq!(config.labels["env"], "dev");
        assert!(config.file_path.is_empty());
        assert!(!config.console);
    }

    #[test]
    fn test_validate() {
        assert!(LoggerConfig::new().validate().is_ok());
        assert!(LoggerConfig::new().with_level("warning").validate().is_ok());

        let err = LoggerConfig::new().with_level("verbose").validate().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerConfig::new()
            .with_remote_url("localhost:3100")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("remote_url"));

        assert!(LoggerConfig::new().with_label(" ", "x").validate().is_err());
    }
}
