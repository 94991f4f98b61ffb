//! Entry serialization shared by every writer
//!
//! Entries are rendered as single-line JSON:
//!
//! `{"Level":"warn","Message":"slow query","Labels":{"level":"warn","service":"api"},"Fields":{"ms":812},"Time":1736332245}`
//!
//! Labels and fields are sorted maps, so identical entries always render identically.

use super::error::{LoggerError, Result};
use super::log_entry::LogEntry;
use chrono::{DateTime, Local, Utc};

/// strftime pattern of the local-time prefix on file lines
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Serialize an entry to its single-line JSON form
///
/// Fails with [`LoggerError::FormatterError`] when a field holds a value JSON
/// cannot represent (NaN or an infinite float).
pub fn format_entry(entry: &LogEntry) -> Result<String> {
    if let Some((key, value)) = entry.fields().iter().find(|(_, v)| !v.is_encodable()) {
        return Err(LoggerError::formatter(
            "json",
            format!("unsupported value for field '{}': {}", key, value),
        ));
    }

    Ok(serde_json::to_string(entry)?)
}

/// Render `"[YYYY-MM-DD HH:MM:SS] "` in local time for a Unix timestamp
pub fn local_timestamp_prefix(secs: i64) -> String {
    match DateTime::<Utc>::from_timestamp(secs, 0) {
        Some(utc) => format!("[{}] ", utc.with_timezone(&Local).format(FILE_TIMESTAMP_FORMAT)),
        None => format!("[{}] ", secs),
    }
}

/// Nanosecond timestamp string for a second-resolution Unix timestamp
///
/// Sub-second digits are always zero.
pub fn unix_nanos_string(secs: i64) -> String {
    secs.saturating_mul(NANOS_PER_SECOND).to_string()
}
