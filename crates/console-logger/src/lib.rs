//! Console Logger
//!
//! A `log` backend for browser apps. Every record is written to the browser
//! console with its matching severity and kept in a bounded buffer of recent
//! lines that the app can inspect.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Number of records kept by the global logger
pub const DEFAULT_CAPACITY: usize = 200;

/// A single captured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<5} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Circular buffer of the most recent log lines.
///
/// Once full, pushing a new line evicts the oldest one.
#[derive(Debug)]
pub struct RecentLogs {
    lines: VecDeque<LogLine>,
    capacity: usize,
}

impl RecentLogs {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: LogLine) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Oldest first
    pub fn snapshot(&self) -> Vec<LogLine> {
        self.lines.iter().cloned().collect()
    }
}

/// Logger writing to the browser console
pub struct ConsoleLogger {
    recent: Mutex<RecentLogs>,
}

impl ConsoleLogger {
    pub fn new(capacity: usize) -> Self {
        Self {
            recent: Mutex::new(RecentLogs::new(capacity)),
        }
    }

    /// Snapshot of the buffered lines, oldest first
    pub fn recent(&self) -> Vec<LogLine> {
        self.recent
            .lock()
            .map(|recent| recent.snapshot())
            .unwrap_or_default()
    }

    fn capture(&self, record: &Record) {
        let line = LogLine {
            timestamp: Local::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        write_console(&line);
        if let Ok(mut recent) = self.recent.lock() {
            recent.push(line);
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.capture(record);
        }
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Install the global logger.
///
/// Fails if a logger is already installed; the level is applied either way.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_max_level(level);
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(DEFAULT_CAPACITY));
    log::set_logger(logger)
}

/// Change the global level filter after `init`
pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}

#[cfg(target_arch = "wasm32")]
fn write_console(line: &LogLine) {
    let text = wasm_bindgen::JsValue::from_str(&line.to_string());
    match line.level {
        Level::Error => web_sys::console::error_1(&text),
        Level::Warn => web_sys::console::warn_1(&text),
        Level::Info => web_sys::console::info_1(&text),
        Level::Debug => web_sys::console::debug_1(&text),
        Level::Trace => web_sys::console::log_1(&text),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(line: &LogLine) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn make_line(message: &str) -> LogLine {
        LogLine {
            timestamp: Local::now(),
            level: Level::Info,
            target: "test".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_recent_logs_evicts_oldest() {
        let mut recent = RecentLogs::new(3);
        for msg in ["a", "b", "c", "d"] {
            recent.push(make_line(msg));
        }

        let messages: Vec<String> = recent.snapshot().into_iter().map(|l| l.message).collect();
        assert_eq!(messages, vec!["b", "c", "d"]);
        assert_eq!(recent.len(), 3);
    }

    #[test]
    fn test_recent_logs_zero_capacity_keeps_one() {
        let mut recent = RecentLogs::new(0);
        assert_eq!(recent.capacity(), 1);
        assert!(recent.is_empty());

        recent.push(make_line("first"));
        recent.push(make_line("second"));
        assert_eq!(recent.snapshot()[0].message, "second");
    }

    #[test]
    fn test_capture_records_level_target_and_message() {
        let logger = ConsoleLogger::new(10);
        logger.capture(
            &Record::builder()
                .args(format_args!("saved item {}", 7))
                .level(Level::Warn)
                .target("todo_list_ui::store")
                .build(),
        );

        let lines = logger.recent();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].level, Level::Warn);
        assert_eq!(lines[0].target, "todo_list_ui::store");
        assert_eq!(lines[0].message, "saved item 7");
    }

    #[test]
    fn test_display_contains_level_and_message() {
        let line = make_line("hello");
        let text = line.to_string();
        assert!(text.contains("INFO"));
        assert!(text.ends_with("test: hello"));
    }
}
