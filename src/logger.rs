//! Custom logging module.
//!
//! This module provides the logger behind the `log` facade. Records are
//! written to stderr and can additionally be forwarded to a callback, which
//! tests use to capture output.

use crate::error::AppError;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::io::Write;
use std::sync::{Arc, Mutex};

type LogCallback = Box<dyn Fn(String) + Send + Sync>;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Logger that writes formatted records to stderr and an optional callback
///
pub struct CustomLogger {
    level: LevelFilter,
    stderr: bool,
    log_callback: Arc<Mutex<Option<LogCallback>>>,
}

impl CustomLogger {
    pub fn new(level: LevelFilter) -> Self {
        CustomLogger {
            level,
            stderr: true,
            log_callback: Arc::new(Mutex::new(None)),
        }
    }

    /// Stop writing to stderr. Records still reach the callback.
    ///
    pub fn quiet(mut self) -> Self {
        self.stderr = false;
        self
    }

    pub fn set_log_callback(&self, callback: LogCallback) {
        if let Ok(mut guard) = self.log_callback.lock() {
            *guard = Some(callback);
        }
    }

    /// Install as the global logger. Fails if a logger is already set.
    ///
    pub fn init(self) -> Result<(), AppError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))
            .map(|()| log::set_max_level(level))
            .map_err(|e| AppError::Logger(e.to_string()))
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let formatted = format_log(record);
        if self.stderr {
            let _ = writeln!(std::io::stderr(), "{}", formatted);
        }
        if let Ok(callback) = self.log_callback.lock() {
            if let Some(ref cb) = *callback {
                cb(formatted);
            }
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
