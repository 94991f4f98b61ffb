//! Writer implementations

#[cfg(feature = "console")]
pub mod console;
pub mod file;
pub mod loki;

#[cfg(feature = "console")]
pub use console::ConsoleWriter;
pub use file::FileWriter;
pub use loki::{LokiPayload, LokiStream, LokiWriter, RetryPolicy, DEFAULT_REQUEST_TIMEOUT};

pub use crate::core::LogWriter;
