//! User-facing progress and failure reporting.
//!
//! The pipeline never logs directly for user-visible messages; it goes through
//! a [`Reporter`] handed in by the caller. The binary uses [`TracingReporter`],
//! tests use [`MemoryReporter`] to assert on what was surfaced.

use std::sync::Mutex;
use tracing::{error, info, warn};

/// Severity of a reported message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Progress information.
    Info,
    /// Non-fatal advisory.
    Warn,
    /// A failure, fatal or local to one repository.
    Error,
}

/// Sink for user-visible messages.
///
/// `scope` is a short category tag such as `config`, `sill` or `enoent`.
pub trait Reporter: Send + Sync {
    /// Reports progress.
    fn info(&self, scope: &str, message: &str);

    /// Reports a non-fatal advisory.
    fn warn(&self, scope: &str, message: &str);

    /// Reports a failure.
    fn error(&self, scope: &str, message: &str);
}

/// Forwards reports to `tracing` events at the matching level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn info(&self, scope: &str, message: &str) {
        info!(scope, "{message}");
    }

    fn warn(&self, scope: &str, message: &str) {
        warn!(scope, "{message}");
    }

    fn error(&self, scope: &str, message: &str) {
        error!(scope, "{message}");
    }
}

/// A single captured report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Severity.
    pub level: Level,
    /// Category tag.
    pub scope: String,
    /// Human-readable message.
    pub message: String,
}

/// Captures every report in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    reports: Mutex<Vec<Report>>,
}

impl MemoryReporter {
    /// Creates an empty reporter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all reports so far.
    #[must_use]
    pub fn reports(&self) -> Vec<Report> {
        self.lock().clone()
    }

    /// Returns the reports with the given severity.
    #[must_use]
    pub fn at_level(&self, level: Level) -> Vec<Report> {
        self.lock()
            .iter()
            .filter(|report| report.level == level)
            .cloned()
            .collect()
    }

    fn push(&self, level: Level, scope: &str, message: &str) {
        self.lock().push(Report {
            level,
            scope: scope.to_string(),
            message: message.to_string(),
        });
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Report>> {
        // A panicking test thread must not hide what was reported before it.
        self.reports
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Reporter for MemoryReporter {
    fn info(&self, scope: &str, message: &str) {
        self.push(Level::Info, scope, message);
    }

    fn warn(&self, scope: &str, message: &str) {
        self.push(Level::Warn, scope, message);
    }

    fn error(&self, scope: &str, message: &str) {
        self.push(Level::Error, scope, message);
    }
}
