//! File writer implementation

use crate::core::formatter::{format_entry, local_timestamp_prefix};
use crate::core::{LogEntry, LogWriter, LoggerError, Result};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends one line per entry to a local file
///
/// Lines look like `[2025-01-08 10:30:45] {"Level":"info","Message":...}` with the
/// prefix in local time. Each write is synced to disk before returning.
/// The file is opened in append mode, so reopening never truncates it.
pub struct FileWriter {
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl FileWriter {
    /// Open (or create) `path` for appending
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rust_loki_logger::writers::FileWriter;
    ///
    /// let writer = FileWriter::new("/var/log/app.log").unwrap();
    /// ```
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = Self::open(&path)?;

        Ok(Self {
            path,
            file: Mutex::new(Some(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Close the underlying handle; a later `write` reopens the file
    pub fn close(&self) {
        self.file.lock().take();
    }

    pub fn is_open(&self) -> bool {
        self.file.lock().is_some()
    }

    fn open(path: &Path) -> Result<File> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LoggerError::file_open(path.display().to_string(), e))
    }

    fn render(entry: &LogEntry) -> Result<String> {
        let mut line = local_timestamp_prefix(entry.timestamp());
        line.push_str(&format_entry(entry)?);
        line.push('\n');
        Ok(line)
    }
}

impl LogWriter for FileWriter {
    fn write(&self, entry: &LogEntry) -> Result<()> {
        let line = Self::render(entry)?;

        let mut guard = self.file.lock();
        let mut file = match guard.take() {
            Some(file) => file,
            None => Self::open(&self.path)?,
        };

        file.write_all(line.as_bytes())
            .map_err(|e| LoggerError::file_write(self.path.display().to_string(), e))?;
        file.sync_all()
            .map_err(|e| LoggerError::file_sync(self.path.display().to_string(), e))?;

        // A handle that failed above is dropped and reopened on the next write
        *guard = Some(file);
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}
