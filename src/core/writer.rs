//! Writer trait for log output destinations

use super::{error::Result, log_entry::LogEntry};

/// A log sink
///
/// Writers are invoked through a shared reference and may be called from
/// several dispatches at once, so each implementation synchronizes internally.
pub trait LogWriter: Send + Sync {
    fn write(&self, entry: &LogEntry) -> Result<()>;
    fn name(&self) -> &str;
}
