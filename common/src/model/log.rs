//! Append-only lifecycle log shown in the "logs" tab.

use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    System,
    Success,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::System => "system",
            LogLevel::Success => "success",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Captured when the entry is created.
    pub timestamp: DateTime<Local>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Local::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Info, message)
    }

    pub fn system(message: impl Into<String>) -> Self {
        Self::new(LogLevel::System, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Error, message)
    }

    /// `HH:MM:SS` in local time, as displayed in the console.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// Session log. Entries can only be appended.
#[derive(Debug, Clone, Default)]
pub struct LogConsole {
    entries: Vec<LogEntry>,
}

impl LogConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_preserves_append_order() {
        let mut console = LogConsole::new();
        console.push(LogEntry::system("start"));
        console.push(LogEntry::error("boom"));

        let levels: Vec<_> = console.entries().iter().map(|e| e.level).collect();
        assert_eq!(levels, [LogLevel::System, LogLevel::Error]);
        assert!(console.entries()[0].timestamp <= console.entries()[1].timestamp);
    }

    #[test]
    fn time_label_is_clock_time() {
        let entry = LogEntry::info("dispatch");
        assert_eq!(entry.time_label().len(), 8);
        assert_eq!(entry.level.as_str(), "info");
    }
}
