//! Logging macros for ergonomic log message formatting.
//!
//! # Examples
//!
//! ```
//! use rust_loki_logger::prelude::*;
//! use rust_loki_logger::{fields, info};
//!
//! let logger = Logger::disabled();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! logger.info_with_fields("User login", fields!["user_id" => 42, "action" => "login"]);
//! ```

/// Build a `Vec<Field>` from `key => value` pairs.
///
/// # Examples
///
/// ```
/// use rust_loki_logger::fields;
///
/// let fields = fields!["order_id" => 3, "amount" => 99.99, "status" => "processing"];
/// assert_eq!(fields.len(), 3);
/// assert_eq!(fields![].len(), 0);
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        ::std::vec::Vec::<$crate::Field>::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Field::new($key, $value)),+]
    };
}

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use rust_loki_logger::prelude::*;
/// # let logger = Logger::disabled();
/// use rust_loki_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_loki_logger::prelude::*;
/// # let logger = Logger::disabled();
/// use rust_loki_logger::warn;
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
