//! Core logger types and traits

pub mod config;
pub mod error;
pub mod field;
pub mod formatter;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod writer;

pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use field::{field_func, new_field, Field, FieldValue};
pub use formatter::format_entry;
pub use log_entry::{LogEntry, LEVEL_LABEL};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::{LoggerMetrics, MetricsSnapshot};
pub use writer::LogWriter;
