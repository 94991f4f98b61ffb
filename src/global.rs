//! Process-wide logger
//!
//! Free functions that forward to one lazily created [`Logger`]. The logger
//! starts with no writers, so calls made before [`initialize`] are dropped.
//!
//! ```no_run
//! use rust_loki_logger::global;
//! use rust_loki_logger::{new_field, LoggerConfig};
//!
//! global::initialize(
//!     LoggerConfig::new()
//!         .with_level("debug")
//!         .with_file_path("./app.log")
//!         .with_remote_url("http://localhost:3100/loki/api/v1/push")
//!         .with_label("service", "example-app"),
//! );
//!
//! global::info_with_fields("user login", [new_field("user_id", "12345")]);
//! ```

use crate::core::{Field, LogLevel, Logger, LoggerConfig};

pub use crate::core::{field_func, new_field};
use once_cell::sync::Lazy;

static GLOBAL_LOGGER: Lazy<Logger> = Lazy::new(Logger::disabled);

/// The process-wide logger
pub fn global_logger() -> &'static Logger {
    &GLOBAL_LOGGER
}

/// Replace the process-wide configuration and writers
pub fn initialize(config: LoggerConfig) {
    GLOBAL_LOGGER.initialize(config);
}

pub fn log(level: LogLevel, message: impl Into<String>) {
    GLOBAL_LOGGER.log(level, message);
}

pub fn log_with_fields<I>(level: LogLevel, message: impl Into<String>, fields: I)
where
    I: IntoIterator<Item = Field>,
{
    GLOBAL_LOGGER.log_with_fields(level, message, fields);
}

pub fn debug(message: impl Into<String>) {
    GLOBAL_LOGGER.debug(message);
}

pub fn info(message: impl Into<String>) {
    GLOBAL_LOGGER.info(message);
}

pub fn warn(message: impl Into<String>) {
    GLOBAL_LOGGER.warn(message);
}

pub fn error(message: impl Into<String>) {
    GLOBAL_LOGGER.error(message);
}

pub fn debug_with_fields<I>(message: impl Into<String>, fields: I)
where
    I: IntoIterator<Item = Field>,
{
    GLOBAL_LOGGER.debug_with_fields(message, fields);
}

pub fn info_with_fields<I>(message: impl Into<String>, fields: I)
where
    I: IntoIterator<Item = Field>,
{
    GLOBAL_LOGGER.info_with_fields(message, fields);
}

pub fn warn_with_fields<I>(message: impl Into<String>, fields: I)
where
    I: IntoIterator<Item = Field>,
{
    GLOBAL_LOGGER.warn_with_fields(message, fields);
}

pub fn error_with_fields<I>(message: impl Into<String>, fields: I)
where
    I: IntoIterator<Item = Field>,
{
    GLOBAL_LOGGER.error_with_fields(message, fields);
}
