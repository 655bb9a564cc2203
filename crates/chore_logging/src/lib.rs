#![deny(missing_docs)]
//! Shared logging utilities for the chores workspace.
//!
//! Nothing here installs a global logger. The binary builds one [`TaskLogger`]
//! at startup and hands clones of it to every task; the `chore_*` macros take
//! that logger as their first argument.

use std::fmt;
use std::sync::{Arc, Mutex};

pub use log::{Level, LevelFilter};
use log::{Log, Metadata, Record};

/// Target attached to every record emitted through a [`TaskLogger`].
pub const LOG_TARGET: &str = "chores";

/// Explicitly owned logger handle, cheap to clone.
#[derive(Clone)]
pub struct TaskLogger {
    inner: Arc<dyn Log>,
}

impl TaskLogger {
    /// Wraps any `log::Log` implementation, e.g. a `simplelog::CombinedLogger`.
    pub fn new(inner: Box<dyn Log>) -> Self {
        Self {
            inner: Arc::from(inner),
        }
    }

    /// A logger that drops every record.
    pub fn discard() -> Self {
        Self::new(Box::new(DiscardLog))
    }

    /// A logger that records everything in memory, for assertions in tests.
    pub fn capturing() -> (Self, CapturedLog) {
        let captured = CapturedLog::default();
        let logger = Self::new(Box::new(captured.clone()));
        (logger, captured)
    }

    /// Emits one record at `level`. Prefer the `chore_*` macros.
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        let record = Record::builder()
            .level(level)
            .target(LOG_TARGET)
            .args(args)
            .build();
        if self.inner.enabled(record.metadata()) {
            self.inner.log(&record);
        }
    }

    /// Flushes buffered output of the underlying logger.
    pub fn flush(&self) {
        self.inner.flush();
    }
}

impl fmt::Debug for TaskLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskLogger").finish_non_exhaustive()
    }
}

struct DiscardLog;

impl Log for DiscardLog {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        false
    }

    fn log(&self, _record: &Record) {}

    fn flush(&self) {}
}

/// In-memory record store shared with a capturing [`TaskLogger`].
#[derive(Debug, Clone, Default)]
pub struct CapturedLog {
    records: Arc<Mutex<Vec<(Level, String)>>>,
}

impl CapturedLog {
    /// Snapshot of all records so far, oldest first.
    pub fn records(&self) -> Vec<(Level, String)> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// Messages logged at exactly `level`.
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|(lvl, _)| *lvl == level)
            .map(|(_, msg)| msg)
            .collect()
    }

    /// True if any record at `level` contains `needle`.
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.messages_at(level).iter().any(|msg| msg.contains(needle))
    }
}

impl Log for CapturedLog {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

/// Logs a trace-level message through an explicit [`TaskLogger`].
#[macro_export]
macro_rules! chore_trace {
    ($logger:expr, $($arg:tt)*) => {{
        $logger.log($crate::Level::Trace, format_args!($($arg)*));
    }};
}

/// Logs a debug-level message through an explicit [`TaskLogger`].
#[macro_export]
macro_rules! chore_debug {
    ($logger:expr, $($arg:tt)*) => {{
        $logger.log($crate::Level::Debug, format_args!($($arg)*));
    }};
}

/// Logs an info-level message through an explicit [`TaskLogger`].
#[macro_export]
macro_rules! chore_info {
    ($logger:expr, $($arg:tt)*) => {{
        $logger.log($crate::Level::Info, format_args!($($arg)*));
    }};
}

/// Logs a warn-level message through an explicit [`TaskLogger`].
#[macro_export]
macro_rules! chore_warn {
    ($logger:expr, $($arg:tt)*) => {{
        $logger.log($crate::Level::Warn, format_args!($($arg)*));
    }};
}

/// Logs an error-level message through an explicit [`TaskLogger`].
#[macro_export]
macro_rules! chore_error {
    ($logger:expr, $($arg:tt)*) => {{
        $logger.log($crate::Level::Error, format_args!($($arg)*));
    }};
}
