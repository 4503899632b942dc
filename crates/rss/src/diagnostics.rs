// ABOUTME: Injectable diagnostics sink for recoverable normalization problems.
// ABOUTME: TracingLog forwards to tracing; MemoryLog keeps records for callers and tests.

use std::fmt;
use std::sync::Mutex;

/// A recoverable condition hit while normalizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A publish date could not be parsed; the entry got the current time.
    InvalidDate { value: String, reason: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::InvalidDate { value, reason } => {
                write!(f, "rss: invalid date {:?}: {}", value, reason)
            }
        }
    }
}

/// Receives diagnostics. Implementations must not affect control flow.
pub trait DiagnosticLog: Send + Sync {
    fn record(&self, diagnostic: Diagnostic);
}

/// Emits each diagnostic as a `tracing` warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl DiagnosticLog for TracingLog {
    fn record(&self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::InvalidDate { value, reason } => {
                tracing::warn!(value = %value, reason = %reason, "rss: unparsable publish date");
            }
        }
    }
}

/// Collects diagnostics in memory.
#[derive(Debug, Default)]
pub struct MemoryLog {
    records: Mutex<Vec<Diagnostic>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn records(&self) -> Vec<Diagnostic> {
        match self.records.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl DiagnosticLog for MemoryLog {
    fn record(&self, diagnostic: Diagnostic) {
        match self.records.lock() {
            Ok(mut guard) => guard.push(diagnostic),
            Err(poisoned) => poisoned.into_inner().push(diagnostic),
        }
    }
}
