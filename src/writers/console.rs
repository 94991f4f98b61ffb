//! Console writer implementation

use crate::core::formatter::{format_entry, local_timestamp_prefix};
use crate::core::{LogEntry, LogLevel, LogWriter, Result};
use colored::Colorize;

/// Prints entries to the terminal
///
/// Error entries go to stderr, everything else to stdout.
pub struct ConsoleWriter {
    use_colors: bool,
}

impl ConsoleWriter {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn render(&self, entry: &LogEntry) -> Result<String> {
        let level_str = if self.use_colors {
            format!("{:5}", entry.level().to_str().to_uppercase())
                .color(entry.level().color_code())
                .to_string()
        } else {
            format!("{:5}", entry.level().to_str().to_uppercase())
        };

        Ok(format!(
            "{}[{}] {}",
            local_timestamp_prefix(entry.timestamp()),
            level_str,
            format_entry(entry)?
        ))
    }
}

impl Default for ConsoleWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogWriter for ConsoleWriter {
    fn write(&self, entry: &LogEntry) -> Result<()> {
        let output = self.render(entry)?;

        match entry.level() {
            LogLevel::Error => eprintln!("{}", output),
            _ => println!("{}", output),
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
