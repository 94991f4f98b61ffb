//! # Rust Loki Logger
//!
//! A small structured logging facade that fans every log call out to a set of
//! writers: a durable local file, a Loki push endpoint, and optionally the
//! console.
//!
//! ## Features
//!
//! - **Level filtering**: `debug < info < warn < error`, default `info`
//! - **Labels**: static labels from the configuration plus a `level` label on every entry
//! - **Fields**: per-call structured key/value data
//! - **Best effort**: a failing writer never fails the log call
//!
//! ```no_run
//! use rust_loki_logger::prelude::*;
//!
//! let logger = Logger::new(
//!     LoggerConfig::new()
//!         .with_level("warn")
//!         .with_file_path("/tmp/t.log")
//!         .with_remote_url("http://localhost:3100/loki/api/v1/push")
//!         .with_label("service", "example-app"),
//! );
//!
//! logger.debug("filtered out");
//! logger.warn_with_fields("disk almost full", [new_field("free_mb", 512)]);
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod writers;

pub mod prelude {
    pub use crate::core::{
        new_field, Field, FieldValue, LogEntry, LogLevel, LogWriter, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerMetrics, MetricsSnapshot, Result,
    };
    pub use crate::writers::FileWriter;
}

pub use crate::core::{
    field_func, format_entry, new_field, Field, FieldValue, LogEntry, LogLevel, LogWriter, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, MetricsSnapshot, Result, LEVEL_LABEL,
};
pub use crate::global::{global_logger, initialize};
pub use crate::writers::FileWriter;
#[cfg(feature = "console")]
pub use crate::writers::ConsoleWriter;
pub use crate::writers::{LokiWriter, RetryPolicy};
