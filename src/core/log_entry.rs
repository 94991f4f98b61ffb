//! Log entry structure

use super::field::{Field, FieldValue};
use super::log_level::LogLevel;
use chrono::Utc;
use serde::Serialize;
use std::collections::BTreeMap;

/// Label key injected into every entry
pub const LEVEL_LABEL: &str = "level";

/// A single log record, shared read-only by every writer of one dispatch
///
/// Serializes as `{"Level":..,"Message":..,"Labels":{..},"Fields":{..},"Time":..}`,
/// the line format existing Loki queries parse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    #[serde(rename = "Level")]
    level: LogLevel,
    #[serde(rename = "Message")]
    message: String,
    #[serde(rename = "Labels")]
    labels: BTreeMap<String, String>,
    #[serde(rename = "Fields")]
    fields: BTreeMap<String, FieldValue>,
    #[serde(rename = "Time")]
    timestamp: i64,
}

impl LogEntry {
    /// Assemble an entry from the call arguments and the configured static labels
    ///
    /// The `level` label always wins over a static label with the same key.
    /// Later fields overwrite earlier ones sharing a key.
    pub fn new<I>(
        level: LogLevel,
        message: impl Into<String>,
        fields: I,
        static_labels: &BTreeMap<String, String>,
    ) -> Self
    where
        I: IntoIterator<Item = Field>,
    {
        let mut labels = static_labels.clone();
        labels.insert(LEVEL_LABEL.to_string(), level.to_str().to_string());

        let fields = fields.into_iter().map(Field::into_parts).collect();

        Self {
            level,
            message: message.into(),
            labels,
            fields,
            timestamp: Utc::now().timestamp(),
        }
    }

    /// Override the capture time (seconds since the Unix epoch)
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn labels(&self) -> &BTreeMap<String, String> {
        &self.labels
    }

    pub fn fields(&self) -> &BTreeMap<String, FieldValue> {
        &self.fields
    }

    /// Seconds since the Unix epoch
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}
