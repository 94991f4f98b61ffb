//! Loki push writer for remote logging
//!
//! Sends each entry to a Loki-compatible `/loki/api/v1/push` endpoint as a
//! single-stream JSON payload:
//!
//! ```text
//! {"streams":[{"stream":{"level":"info","service":"api"},"values":[["1736332245000000000","{...}"]]}]}
//! ```

use crate::core::formatter::{format_entry, unix_nanos_string};
use crate::core::{LogEntry, LogWriter, LoggerError, Result};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::thread;
use std::time::Duration;

/// Per-request HTTP timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Bounded retry with linear backoff
///
/// After failed attempt `n` (1-based) the writer sleeps `n * backoff_unit`
/// before trying again, so the defaults wait 1s and then 2s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff_unit: Duration,
}

impl RetryPolicy {
    pub const fn new(max_attempts: u32, backoff_unit: Duration) -> Self {
        Self {
            max_attempts,
            backoff_unit,
        }
    }

    /// Delay after the given failed attempt
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.backoff_unit * attempt
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(1))
    }
}

/// One group of lines sharing a label set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LokiStream {
    pub stream: BTreeMap<String, String>,
    pub values: Vec<[String; 2]>,
}

/// Body of a Loki push request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LokiPayload {
    pub streams: Vec<LokiStream>,
}

/// Writer that pushes entries to a Loki endpoint over HTTP
///
/// # Example
///
/// ```no_run
/// use rust_loki_logger::writers::LokiWriter;
/// use rust_loki_logger::{Logger, LoggerConfig};
/// use std::collections::BTreeMap;
///
/// let mut labels = BTreeMap::new();
/// labels.insert("service".to_string(), "api".to_string());
///
/// let writer = LokiWriter::new("http://localhost:3100/loki/api/v1/push", labels)
///     .expect("Failed to build HTTP client");
///
/// let logger = Logger::builder().writer(writer).build();
/// logger.info("This log will be pushed to Loki");
/// ```
pub struct LokiWriter {
    url: String,
    labels: BTreeMap<String, String>,
    client: Client,
    retry: RetryPolicy,
}

impl LokiWriter {
    /// Create a writer for `url` carrying the given static labels
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be constructed
    pub fn new(url: impl Into<String>, labels: BTreeMap<String, String>) -> Result<Self> {
        let client = Client::builder().timeout(DEFAULT_REQUEST_TIMEOUT).build()?;

        Ok(Self {
            url: url.into(),
            labels,
            client,
            retry: RetryPolicy::default(),
        })
    }

    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Build the push body for one entry
    ///
    /// Entry labels override the writer's static labels on key collisions.
    pub fn build_payload(&self, entry: &LogEntry) -> Result<LokiPayload> {
        let line = format_entry(entry)?;

        let mut stream = self.labels.clone();
        stream.extend(
            entry
                .labels()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );

        Ok(LokiPayload {
            streams: vec![LokiStream {
                stream,
                values: vec![[unix_nanos_string(entry.timestamp()), line]],
            }],
        })
    }

    /// Single POST attempt
    fn push(&self, payload: &LokiPayload) -> Result<()> {
        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()?;

        let status = response.status().as_u16();
        if status >= 300 {
            return Err(LoggerError::HttpStatus { status });
        }

        Ok(())
    }
}

impl LogWriter for LokiWriter {
    fn write(&self, entry: &LogEntry) -> Result<()> {
        let payload = self.build_payload(entry)?;
        let attempts = self.retry.max_attempts.max(1);

        let mut last_error = None;
        for attempt in 1..=attempts {
            match self.push(&payload) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < attempts {
                        thread::sleep(self.retry.delay_after(attempt));
                    }
                }
            }
        }

        let last = last_error.unwrap_or_else(|| LoggerError::other("no push attempt was made"));
        Err(LoggerError::push_failed(&self.url, attempts, last))
    }

    fn name(&self) -> &str {
        "loki"
    }
}
