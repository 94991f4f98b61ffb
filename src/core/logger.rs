//! Main logger implementation
//!
//! A [`Logger`] owns its configuration and the writer set built from it.
//! One mutex guards both, so `initialize` and every dispatch run one at a time.
//! Writers are invoked sequentially while that lock is held: a remote writer
//! that is retrying delays every other caller until it gives up.

use super::{
    config::LoggerConfig,
    field::Field,
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    writer::LogWriter,
};
use crate::writers::{FileWriter, LokiWriter};
use parking_lot::Mutex;

struct LoggerState {
    config: LoggerConfig,
    min_level: LogLevel,
    writers: Vec<Box<dyn LogWriter>>,
}

impl LoggerState {
    fn from_config(config: LoggerConfig) -> Self {
        let min_level = config.effective_level();
        let writers = build_writers(&config);
        Self {
            config,
            min_level,
            writers,
        }
    }
}

pub struct Logger {
    state: Mutex<LoggerState>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create a logger and build its writers from `config`
    #[must_use]
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            state: Mutex::new(LoggerState::from_config(config)),
            metrics: LoggerMetrics::new(),
        }
    }

    /// A logger with no writers; every call is a no-op until `initialize`
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(LoggerConfig::default())
    }

    /// Create a new logger builder
    ///
    /// # Example
    ///
    /// ```
    /// use rust_loki_logger::{Logger, LoggerConfig};
    ///
    /// let logger = Logger::builder()
    ///     .config(LoggerConfig::new().with_level("debug"))
    ///     .build();
    ///
    /// logger.debug("ready");
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Replace the configuration wholesale and rebuild the writer set
    ///
    /// An empty or unrecognized level means `Info`. A file writer that cannot
    /// open its path is skipped without error. Previously configured writers,
    /// including ones added with [`add_writer`](Self::add_writer), are dropped.
    pub fn initialize(&self, config: LoggerConfig) {
        let mut state = self.state.lock();
        *state = LoggerState::from_config(config);
    }

    /// Append a custom writer to the current writer set
    pub fn add_writer(&self, writer: Box<dyn LogWriter>) {
        self.state.lock().writers.push(writer);
    }

    pub fn min_level(&self) -> LogLevel {
        self.state.lock().min_level
    }

    /// Snapshot of the active configuration
    pub fn config(&self) -> LoggerConfig {
        self.state.lock().config.clone()
    }

    pub fn writer_count(&self) -> usize {
        self.state.lock().writers.len()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Get the number of entries at least one writer failed to record
    pub fn dropped_count(&self) -> u64 {
        self.metrics.dropped_count()
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.log_with_fields(level, message, Vec::new());
    }

    /// Build an entry and hand it to every writer
    ///
    /// Nothing is built when `level` is below the minimum or no writer is
    /// configured. Writer failures never reach the caller.
    pub fn log_with_fields<I>(&self, level: LogLevel, message: impl Into<String>, fields: I)
    where
        I: IntoIterator<Item = Field>,
    {
        let state = self.state.lock();

        if !level.is_enabled_for(state.min_level) {
            self.metrics.record_filtered();
            return;
        }

        if state.writers.is_empty() {
            return;
        }

        let entry = LogEntry::new(level, message, fields, &state.config.labels);
        Self::dispatch(
            &state.writers,
            &entry,
            &self.metrics,
            state.config.report_writer_errors,
        );
    }

    /// Fan an entry out to every writer with per-writer error and panic isolation
    fn dispatch(
        writers: &[Box<dyn LogWriter>],
        entry: &LogEntry,
        metrics: &LoggerMetrics,
        report: bool,
    ) {
        let mut failed = 0;

        for (idx, writer) in writers.iter().enumerate() {
            let write_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                writer.write(entry)
            }));

            match write_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    if report {
                        eprintln!(
                            "[LOGGER ERROR] Writer #{} ({}) failed: {}",
                            idx,
                            writer.name(),
                            e
                        );
                    }
                    failed += 1;
                }
                Err(panic_info) => {
                    if report {
                        let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                            s.to_string()
                        } else if let Some(s) = panic_info.downcast_ref::<String>() {
                            s.clone()
                        } else {
                            "Unknown panic".to_string()
                        };
                        eprintln!(
                            "[LOGGER CRITICAL] Writer #{} ({}) panicked: {}. \
                             Other writers continue to function.",
                            idx,
                            writer.name(),
                            panic_msg
                        );
                    }
                    failed += 1;
                }
            }
        }

        metrics.record_dispatch(failed);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    pub fn debug_with_fields<I>(&self, message: impl Into<String>, fields: I)
    where
        I: IntoIterator<Item = Field>,
    {
        self.log_with_fields(LogLevel::Debug, message, fields);
    }

    pub fn info_with_fields<I>(&self, message: impl Into<String>, fields: I)
    where
        I: IntoIterator<Item = Field>,
    {
        self.log_with_fields(LogLevel::Info, message, fields);
    }

    pub fn warn_with_fields<I>(&self, message: impl Into<String>, fields: I)
    where
        I: IntoIterator<Item = Field>,
    {
        self.log_with_fields(LogLevel::Warn, message, fields);
    }

    pub fn error_with_fields<I>(&self, message: impl Into<String>, fields: I)
    where
        I: IntoIterator<Item = Field>,
    {
        self.log_with_fields(LogLevel::Error, message, fields);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::disabled()
    }
}

/// Build the writer set described by `config`, in file, remote, console order
fn build_writers(config: &LoggerConfig) -> Vec<Box<dyn LogWriter>> {
    let mut writers: Vec<Box<dyn LogWriter>> = Vec::new();

    if !config.file_path.is_empty() {
        match FileWriter::new(&config.file_path) {
            Ok(writer) => writers.push(Box::new(writer)),
            Err(e) => {
                if config.report_writer_errors {
                    eprintln!("[LOGGER ERROR] File writer disabled: {}", e);
                }
            }
        }
    }

    if !config.remote_url.is_empty() {
        if let Some(writer) = remote_writer(config) {
            writers.push(writer);
        }
    }

    if config.console {
        if let Some(writer) = console_writer() {
            writers.push(writer);
        }
    }

    writers
}

fn remote_writer(config: &LoggerConfig) -> Option<Box<dyn LogWriter>> {
    match LokiWriter::new(&config.remote_url, config.labels.clone()) {
        Ok(writer) => Some(Box::new(writer)),
        Err(e) => {
            if config.report_writer_errors {
                eprintln!("[LOGGER ERROR] Remote writer disabled: {}", e);
            }
            None
        }
    }
}

#[cfg(feature = "console")]
fn console_writer() -> Option<Box<dyn LogWriter>> {
    Some(Box::new(crate::writers::ConsoleWriter::new()))
}

#[cfg(not(feature = "console"))]
fn console_writer() -> Option<Box<dyn LogWriter>> {
    None
}

/// Builder for [`Logger`]
#[derive(Default)]
pub struct LoggerBuilder {
    config: LoggerConfig,
    writers: Vec<Box<dyn LogWriter>>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.config.level = level.to_str().to_string();
        self
    }

    #[must_use]
    pub fn label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.labels.insert(key.into(), value.into());
        self
    }

    /// Add a writer after the ones built from the configuration
    #[must_use]
    pub fn writer<W: LogWriter + 'static>(mut self, writer: W) -> Self {
        self.writers.push(Box::new(writer));
        self
    }

    pub fn build(self) -> Logger {
        let logger = Logger::new(self.config);
        for writer in self.writers {
            logger.add_writer(writer);
        }
        logger
    }
}
