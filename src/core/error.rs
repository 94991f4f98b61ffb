//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Log file could not be opened (or reopened)
    #[error("Failed to open log file '{path}': {source}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Bytes could not be written to the log file
    #[error("Failed to write log file '{path}': {source}")]
    FileWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Log file could not be synced to disk
    #[error("Failed to sync log file '{path}': {source}")]
    FileSync {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Formatter error with format type
    #[error("Formatter error ({format_type}): {message}")]
    FormatterError {
        format_type: String,
        message: String,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote endpoint answered with a non-success status
    #[error("Remote endpoint returned status code {status}")]
    HttpStatus { status: u16 },

    /// Remote push gave up after exhausting its retry budget
    #[error("Failed to push to '{url}' after {attempts} attempts: {source}")]
    PushFailed {
        url: String,
        attempts: u32,
        #[source]
        source: Box<LoggerError>,
    },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn file_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::FileOpen {
            path: path.into(),
            source,
        }
    }

    pub fn file_write(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::FileWrite {
            path: path.into(),
            source,
        }
    }

    pub fn file_sync(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::FileSync {
            path: path.into(),
            source,
        }
    }

    /// Create a formatter error
    pub fn formatter(format_type: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FormatterError {
            format_type: format_type.into(),
            message: message.into(),
        }
    }

    /// Create a push failure wrapping the last attempt's error
    pub fn push_failed(url: impl Into<String>, attempts: u32, last: LoggerError) -> Self {
        LoggerError::PushFailed {
            url: url.into(),
            attempts,
            source: Box::new(last),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
